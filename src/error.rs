// Bootstrap error taxonomy
//
// Every failure in this program is fatal, but each fatal point gets its
// own kind so the entry point can report which precondition was violated
// before terminating.

use ash::vk;
use thiserror::Error;

/// Errors that can occur while bringing up the window and the Vulkan instance.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The Vulkan loader could not be found or linked.
    #[error("failed to load the Vulkan library: {0}")]
    LoaderUnavailable(#[from] ash::LoadingError),

    /// The driver rejected the layer enumeration call itself.
    #[error("failed to enumerate instance layers: {0}")]
    LayerEnumeration(#[source] vk::Result),

    /// A requested validation layer is not installed on this host.
    #[error("requested validation layer is not available: {0}")]
    LayerUnavailable(String),

    /// The native window could not be constructed.
    #[error("failed to create the window: {0}")]
    WindowCreateFailed(#[from] winit::error::OsError),

    /// The driver rejected the instance create info.
    #[error("failed to create the Vulkan instance: {0}")]
    InstanceCreateFailed(#[source] vk::Result),
}
