// Vulkan instance bootstrap
//
// Responsibilities:
// - Validation layer discovery and verification
// - Required instance extension assembly
// - Instance creation with application metadata

use std::ffi::CStr;
use std::os::raw::c_char;

use ash::{vk, Entry};

use crate::error::BootstrapError;
use crate::window;

/// Validation layers requested when diagnostics are enabled.
pub const VALIDATION_LAYERS: [&CStr; 1] = [c"VK_LAYER_LUNARG_standard_validation"];

const APPLICATION_NAME: &CStr = c"Hello Triangle";
const ENGINE_NAME: &CStr = c"No Engine";

/// Owned Vulkan instance with automatic cleanup.
///
/// The entry must outlive the instance, so it rides along in the struct.
pub struct VulkanInstance {
    pub instance: ash::Instance,
    _entry: Entry,
}

impl VulkanInstance {
    /// Load the Vulkan library and create an instance.
    ///
    /// `enable_validation` drives both debug-only behaviors: the
    /// validation-layer check (and layer attachment) and the debug-report
    /// extension. The check runs before anything is created; a missing
    /// layer means no instance is ever constructed.
    pub fn new(enable_validation: bool) -> Result<Self, BootstrapError> {
        let entry = unsafe { Entry::load() }?;

        if enable_validation {
            check_validation_layer_support(&entry)?;
        }

        let instance = create_instance(&entry, enable_validation)?;
        log::info!("Created Vulkan instance (validation: {})", enable_validation);

        Ok(Self {
            instance,
            _entry: entry,
        })
    }
}

impl Drop for VulkanInstance {
    fn drop(&mut self) {
        log::info!("Destroying Vulkan instance...");
        unsafe {
            self.instance.destroy_instance(None);
        }
    }
}

/// Verify every requested validation layer is present on this host.
///
/// The driver is queried fresh on every call; nothing is cached.
fn check_validation_layer_support(entry: &Entry) -> Result<(), BootstrapError> {
    let available = entry
        .enumerate_instance_layer_properties()
        .map_err(BootstrapError::LayerEnumeration)?;

    if let Some(missing) = find_missing_layer(&VALIDATION_LAYERS, &available) {
        return Err(BootstrapError::LayerUnavailable(
            missing.to_string_lossy().into_owned(),
        ));
    }

    Ok(())
}

/// First requested layer with no exact match in the available set.
///
/// Matching is exact byte equality: case variants and prefixes of a
/// requested name do not count as support.
fn find_missing_layer<'a>(
    requested: &[&'a CStr],
    available: &[vk::LayerProperties],
) -> Option<&'a CStr> {
    requested.iter().copied().find(|&name| {
        !available
            .iter()
            .any(|properties| unsafe { CStr::from_ptr(properties.layer_name.as_ptr()) } == name)
    })
}

/// Build the instance extension list.
///
/// Platform-required extensions keep their order at the front; the
/// debug-report extension, when requested, is always the final element.
fn assemble_extensions(platform: &[*const c_char], enable_debug: bool) -> Vec<*const c_char> {
    let mut extensions = platform.to_vec();

    if enable_debug {
        extensions.push(vk::ExtDebugReportFn::name().as_ptr());
    }

    extensions
}

/// Layer names to enable, empty when validation is off.
fn enabled_layer_names(enable_validation: bool) -> Vec<*const c_char> {
    if enable_validation {
        VALIDATION_LAYERS.iter().map(|name| name.as_ptr()).collect()
    } else {
        Vec::new()
    }
}

fn create_instance(entry: &Entry, enable_validation: bool) -> Result<ash::Instance, BootstrapError> {
    let app_info = vk::ApplicationInfo::builder()
        .application_name(APPLICATION_NAME)
        .application_version(vk::make_api_version(0, 1, 0, 0))
        .engine_name(ENGINE_NAME)
        .engine_version(vk::make_api_version(0, 1, 0, 0))
        .api_version(vk::API_VERSION_1_0);

    let extensions = assemble_extensions(&window::required_surface_extensions(), enable_validation);
    let layer_names = enabled_layer_names(enable_validation);

    let create_info = vk::InstanceCreateInfo::builder()
        .application_info(&app_info)
        .enabled_extension_names(&extensions)
        .enabled_layer_names(&layer_names);

    let instance = unsafe { entry.create_instance(&create_info, None) }
        .map_err(BootstrapError::InstanceCreateFailed)?;

    Ok(instance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(name: &str) -> vk::LayerProperties {
        let mut properties = vk::LayerProperties::default();
        assert!(name.len() < properties.layer_name.len());
        for (dst, src) in properties.layer_name.iter_mut().zip(name.as_bytes()) {
            *dst = *src as c_char;
        }
        properties
    }

    fn extension_names(extensions: &[*const c_char]) -> Vec<&CStr> {
        extensions
            .iter()
            .map(|&ptr| unsafe { CStr::from_ptr(ptr) })
            .collect()
    }

    #[test]
    fn test_requested_layer_present_passes() {
        let available = [
            layer("VK_LAYER_LUNARG_standard_validation"),
            layer("VK_LAYER_OTHER"),
        ];

        assert_eq!(find_missing_layer(&VALIDATION_LAYERS, &available), None);
    }

    #[test]
    fn test_requested_layer_absent_is_reported() {
        let available = [layer("VK_LAYER_OTHER")];

        assert_eq!(
            find_missing_layer(&VALIDATION_LAYERS, &available),
            Some(c"VK_LAYER_LUNARG_standard_validation"),
        );
    }

    #[test]
    fn test_layer_match_is_case_sensitive() {
        let available = [layer("vk_layer_lunarg_standard_validation")];

        assert!(find_missing_layer(&VALIDATION_LAYERS, &available).is_some());
    }

    #[test]
    fn test_layer_match_rejects_prefixes_and_supersets() {
        // Neither a truncated name nor an extended one counts as support.
        let available = [
            layer("VK_LAYER_LUNARG_standard"),
            layer("VK_LAYER_LUNARG_standard_validation_extra"),
        ];

        assert!(find_missing_layer(&VALIDATION_LAYERS, &available).is_some());
    }

    #[test]
    fn test_empty_request_never_fails() {
        assert_eq!(find_missing_layer(&[], &[]), None);
    }

    #[test]
    fn test_debug_extension_appended_last() {
        let platform = [
            c"VK_KHR_surface".as_ptr(),
            c"VK_KHR_win32_surface".as_ptr(),
        ];

        let extensions = assemble_extensions(&platform, true);
        let names = extension_names(&extensions);

        assert_eq!(
            names,
            [
                c"VK_KHR_surface",
                c"VK_KHR_win32_surface",
                c"VK_EXT_debug_report",
            ],
        );
    }

    #[test]
    fn test_no_debug_extension_without_validation() {
        let platform = [
            c"VK_KHR_surface".as_ptr(),
            c"VK_KHR_win32_surface".as_ptr(),
        ];

        let extensions = assemble_extensions(&platform, false);
        let names = extension_names(&extensions);

        assert_eq!(names, [c"VK_KHR_surface", c"VK_KHR_win32_surface"]);
    }

    #[test]
    fn test_layer_list_empty_when_validation_disabled() {
        assert!(enabled_layer_names(false).is_empty());
        assert_eq!(enabled_layer_names(true).len(), VALIDATION_LAYERS.len());
    }
}
