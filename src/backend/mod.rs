// Backend module - Vulkan abstraction layer
//
// Design: Thin wrapper around ash, limited to instance bootstrap

pub mod instance;

pub use instance::VulkanInstance;
