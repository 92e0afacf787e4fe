// Window management
//
// Responsibilities:
// - Create the fixed-size application window (no OpenGL context, not resizable)
// - Report which Vulkan instance extensions the window system needs for
//   surface creation

use std::os::raw::c_char;

use winit::{
    dpi::PhysicalSize,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes},
};

use crate::config::WindowConfig;
use crate::error::BootstrapError;

/// Create the application window.
///
/// The window is a fixed-size, non-resizable shell: winit never attaches a
/// rendering context of its own, and resizing is disabled because nothing in
/// this program can react to it.
pub fn create_window(
    event_loop: &ActiveEventLoop,
    config: &WindowConfig,
) -> Result<Window, BootstrapError> {
    let attributes = WindowAttributes::default()
        .with_title(&config.title)
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .with_resizable(false);

    let window = event_loop.create_window(attributes)?;
    log::info!(
        "Created window \"{}\" ({}x{})",
        config.title,
        config.width,
        config.height
    );

    Ok(window)
}

/// Instance extensions the window system requires for surface creation.
///
/// `VK_KHR_surface` always comes first, followed by the platform-specific
/// surface extension(s).
pub fn required_surface_extensions() -> Vec<*const c_char> {
    let mut extensions = vec![ash::extensions::khr::Surface::name().as_ptr()];

    #[cfg(target_os = "windows")]
    {
        extensions.push(ash::extensions::khr::Win32Surface::name().as_ptr());
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        extensions.push(ash::extensions::khr::XlibSurface::name().as_ptr());
        extensions.push(ash::extensions::khr::WaylandSurface::name().as_ptr());
    }

    #[cfg(target_os = "macos")]
    {
        extensions.push(ash::extensions::ext::MetalSurface::name().as_ptr());
    }

    extensions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    fn names(extensions: &[*const c_char]) -> Vec<&CStr> {
        extensions
            .iter()
            .map(|&ptr| unsafe { CStr::from_ptr(ptr) })
            .collect()
    }

    #[test]
    fn test_surface_extension_comes_first() {
        let extensions = required_surface_extensions();
        let names = names(&extensions);

        assert_eq!(names[0], c"VK_KHR_surface");
        assert!(names.len() >= 2, "expected a platform surface extension");
    }

    #[test]
    fn test_surface_extensions_are_unique() {
        let extensions = required_surface_extensions();
        let names = names(&extensions);

        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "duplicate {:?}", name);
        }
    }
}
