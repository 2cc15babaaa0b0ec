//! Vulkan instance creation and extension validation
//!
//! Covers the instance half of the bootstrap: build the list of required
//! instance extensions, check all of them against what the loader actually
//! supports, and only then create the instance. Validation always scans the
//! full list so a failure names every missing extension at once instead of
//! stopping at the first.

use std::ffi::{CStr, CString};

use ash::vk;
use ash::Entry;
use thiserror::Error;

use crate::config::{ApiVersion, ApplicationDescriptor};

/// Vulkan instance errors
#[derive(Error, Debug)]
pub enum InstanceError {
    /// The Vulkan loader could not be found or loaded
    #[error("Failed to load the Vulkan library: {0}")]
    LoadingFailed(String),

    /// The loader rejected the supported-extension query
    #[error("Extension enumeration failed: {0:?}")]
    EnumerationFailed(vk::Result),

    /// One or more required extensions are not supported by the loader
    #[error("Missing required instance extensions: {}", .0.join(", "))]
    MissingExtensions(Vec<String>),

    /// vkCreateInstance returned a non-success code
    #[error("Instance creation failed: {0:?}")]
    CreationFailed(vk::Result),

    /// A name destined for the driver contains an embedded NUL byte
    #[error("Invalid {0}: embedded NUL byte")]
    InvalidName(&'static str),
}

/// Result type for instance operations
pub type InstanceResult<T> = Result<T, InstanceError>;

// Appended to every requirement list. Drivers layered over another API
// (MoltenVK) refuse to enumerate unless portability enumeration is enabled,
// and the extension must be requested before the flag below has any effect.
const PORTABILITY_EXTENSIONS: [&CStr; 2] = [
    vk::KhrPortabilityEnumerationFn::name(),
    vk::KhrGetPhysicalDeviceProperties2Fn::name(),
];

/// Vulkan instance wrapper with RAII cleanup
///
/// Owns the loaded entry point and the instance handle; dropping the wrapper
/// destroys the instance.
pub struct Instance {
    entry: Entry,
    instance: ash::Instance,
}

impl Instance {
    /// Create a Vulkan instance after verifying extension support
    ///
    /// `windowing_extensions` is the list the window system reported as
    /// mandatory for presentation. The portability extensions are appended to
    /// it, the combined list is validated against the loader, and creation is
    /// only attempted once every required extension is known to be supported.
    pub fn new(
        descriptor: &ApplicationDescriptor,
        windowing_extensions: &[String],
    ) -> InstanceResult<Self> {
        let entry = unsafe { Entry::load() }
            .map_err(|e| InstanceError::LoadingFailed(format!("{}", e)))?;

        let required = required_extensions(windowing_extensions);
        let supported = supported_extension_names(&entry)?;

        log::debug!("{} instance extensions available:", supported.len());
        for name in &supported {
            log::debug!("  {}", name);
        }

        let missing = missing_extensions(&required, &supported);
        for name in &required {
            if missing.contains(name) {
                log::error!("Required instance extension not supported: {}", name);
            } else {
                log::debug!("Required instance extension supported: {}", name);
            }
        }
        if !missing.is_empty() {
            return Err(InstanceError::MissingExtensions(missing));
        }

        let app_name = to_cstring(&descriptor.application_name, "application name")?;
        let engine_name = to_cstring(&descriptor.engine_name, "engine name")?;

        let app_info = vk::ApplicationInfo::builder()
            .application_name(&app_name)
            .application_version(make_version(descriptor.application_version))
            .engine_name(&engine_name)
            .engine_version(make_version(descriptor.engine_version))
            .api_version(api_version_raw(descriptor.api_version));

        let cstr_extensions: Vec<CString> = required
            .iter()
            .map(|name| to_cstring(name, "extension name"))
            .collect::<InstanceResult<_>>()?;

        let extension_ptrs: Vec<*const i8> = cstr_extensions
            .iter()
            .map(|name| name.as_ptr())
            .collect();

        // No layers at this stage. The portability flag makes drivers that
        // only conform through a translation layer visible to enumeration.
        let create_info = vk::InstanceCreateInfo::builder()
            .application_info(&app_info)
            .enabled_extension_names(&extension_ptrs)
            .flags(vk::InstanceCreateFlags::ENUMERATE_PORTABILITY_KHR);

        let instance = unsafe {
            entry
                .create_instance(&create_info, None)
                .map_err(InstanceError::CreationFailed)?
        };

        log::info!(
            "Created Vulkan instance with {} extensions enabled",
            required.len()
        );

        Ok(Self { entry, instance })
    }

    /// Raw ash instance handle for layers built on top of the bootstrap
    pub fn handle(&self) -> &ash::Instance {
        &self.instance
    }

    /// Vulkan entry point the instance was created from
    pub fn entry(&self) -> &Entry {
        &self.entry
    }
}

impl Drop for Instance {
    fn drop(&mut self) {
        unsafe {
            self.instance.destroy_instance(None);
        }
        log::debug!("Destroyed Vulkan instance");
    }
}

/// Full required-extension list: the windowing extensions followed by the
/// portability extensions, order preserved
fn required_extensions(windowing_extensions: &[String]) -> Vec<String> {
    let mut required = windowing_extensions.to_vec();
    required.extend(
        PORTABILITY_EXTENSIONS
            .iter()
            .map(|name| name.to_string_lossy().into_owned()),
    );
    required
}

/// Names in `required` that `supported` does not contain, in `required` order
fn missing_extensions(required: &[String], supported: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|name| !supported.contains(name))
        .cloned()
        .collect()
}

/// Query the loader for every instance extension it supports
fn supported_extension_names(entry: &Entry) -> InstanceResult<Vec<String>> {
    let properties = entry
        .enumerate_instance_extension_properties(None)
        .map_err(InstanceError::EnumerationFailed)?;

    Ok(properties
        .iter()
        .map(|ext| {
            unsafe { CStr::from_ptr(ext.extension_name.as_ptr()) }
                .to_string_lossy()
                .into_owned()
        })
        .collect())
}

fn make_version((major, minor, patch): (u32, u32, u32)) -> u32 {
    vk::make_api_version(0, major, minor, patch)
}

fn api_version_raw(version: ApiVersion) -> u32 {
    match version {
        ApiVersion::V1_0 => vk::API_VERSION_1_0,
        ApiVersion::V1_1 => vk::API_VERSION_1_1,
        ApiVersion::V1_2 => vk::API_VERSION_1_2,
        ApiVersion::V1_3 => vk::API_VERSION_1_3,
    }
}

fn to_cstring(value: &str, what: &'static str) -> InstanceResult<CString> {
    CString::new(value).map_err(|_| InstanceError::InvalidName(what))
}
