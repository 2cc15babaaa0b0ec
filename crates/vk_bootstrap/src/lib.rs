//! # vk_bootstrap
//!
//! The ground floor of a Vulkan renderer: open a fixed-size window with no
//! OpenGL context, verify that the loader supports every instance extension
//! the window system needs, and create a Vulkan instance. Nothing is drawn
//! yet; the point is that every handle is acquired, owned, and released
//! correctly before any rendering code exists.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vk_bootstrap::{App, BootstrapConfig};
//!
//! fn main() -> Result<(), vk_bootstrap::BootstrapError> {
//!     let config = BootstrapConfig::default();
//!     let mut app = App::new(&config)?;
//!     app.run();
//!     Ok(())
//! }
//! ```
//!
//! Resources are released when the `App` drops, in reverse acquisition
//! order: instance first, then window, then the windowing library itself.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod instance;
pub mod logging;
pub mod window;

mod app;

pub use app::{App, BootstrapError, BootstrapResult};
pub use config::{ApiVersion, ApplicationDescriptor, BootstrapConfig, Config, WindowConfig};
pub use instance::{Instance, InstanceError};
pub use window::{Window, WindowError};
