//! Window management using GLFW
//!
//! Provides window creation and event polling for a Vulkan application. The
//! window carries no OpenGL context and is created at a fixed size.

use thiserror::Error;

use crate::config::WindowConfig;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("GLFW initialization failed")]
    InitializationFailed,

    #[error("Window creation failed")]
    CreationFailed,
}

pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper with proper resource management
///
/// Fields drop in declaration order: the window is destroyed first, and the
/// GLFW library shuts down when the last handle to it drops.
pub struct Window {
    window: glfw::PWindow,
    #[allow(dead_code)] // Will receive events once input handling is added
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    glfw: glfw::Glfw,
}

impl Window {
    /// Create a fixed-size window configured for Vulkan
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| WindowError::InitializationFailed)?;

        // Configure for Vulkan (no OpenGL context), fixed size
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        glfw.window_hint(glfw::WindowHint::Resizable(false));

        let (window, events) = glfw
            .create_window(
                config.width,
                config.height,
                &config.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(WindowError::CreationFailed)?;

        Ok(Self {
            window,
            events,
            glfw,
        })
    }

    /// Whether the user has requested the window to close
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Request window closure programmatically
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Process pending window system events without blocking
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Current window size in pixels
    pub fn size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (width as u32, height as u32)
    }

    /// Whether a Vulkan loader and a minimally functional ICD were found
    pub fn vulkan_supported(&self) -> bool {
        self.glfw.vulkan_supported()
    }

    /// Instance extensions the platform needs to present to windows
    ///
    /// Returns `None` when Vulkan cannot drive this window system.
    pub fn required_instance_extensions(&self) -> Option<Vec<String>> {
        self.glfw.get_required_instance_extensions()
    }
}
