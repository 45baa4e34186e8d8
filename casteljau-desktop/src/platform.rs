//! Window and OpenGL context creation.

use casteljau::scene::SceneError;
use glfw::{Context as _, SwapInterval, WindowMode};
use luminance_front::framebuffer::FramebufferError;
use luminance_glfw::{GlfwSurface, GlfwSurfaceError};
use std::{error::Error, fmt, os::raw::c_void};

/// Title of the editor window.
pub const TITLE: &str = "casteljau";

/// Everything that can go wrong on the desktop side.
#[derive(Debug)]
pub enum PlatformError {
  /// GLFW refused to open the window.
  CannotCreateWindow,
  /// GLFW or the OpenGL state could not be initialized.
  Surface(GlfwSurfaceError<Box<PlatformError>>),
  /// The back buffer could not be acquired.
  BackBuffer(FramebufferError),
  /// The editor could not set its scene up.
  Scene(SceneError),
}

impl fmt::Display for PlatformError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      PlatformError::CannotCreateWindow => f.write_str("cannot create window"),
      PlatformError::Surface(ref e) => write!(f, "cannot create surface: {}", e),
      PlatformError::BackBuffer(ref e) => write!(f, "cannot get back buffer: {}", e),
      PlatformError::Scene(ref e) => write!(f, "cannot bootstrap editor: {}", e),
    }
  }
}

impl Error for PlatformError {}

impl From<FramebufferError> for PlatformError {
  fn from(e: FramebufferError) -> Self {
    PlatformError::BackBuffer(e)
  }
}

impl From<SceneError> for PlatformError {
  fn from(e: SceneError) -> Self {
    PlatformError::Scene(e)
  }
}

/// Open a window with an OpenGL 3.3 context and all events polled.
///
/// `point_size` is the size, in pixels, of point primitives.
pub fn create_surface(
  width: u32,
  height: u32,
  point_size: f32,
) -> Result<GlfwSurface, PlatformError> {
  let surface = GlfwSurface::new(|glfw| {
    let (mut window, events) = glfw
      .create_window(width, height, TITLE, WindowMode::Windowed)
      .ok_or_else(|| GlfwSurfaceError::UserError(Box::new(PlatformError::CannotCreateWindow)))?;

    window.make_current();
    window.set_all_polling(true);
    glfw.set_swap_interval(SwapInterval::Sync(1));

    // luminance doesn’t expose the point size; set it once with raw GL
    gl::load_with(|s| window.get_proc_address(s) as *const c_void);
    unsafe {
      gl::PointSize(point_size);
    }

    Ok((window, events))
  })
  .map_err(PlatformError::Surface)?;

  log::info!("{}×{} window opened", width, height);

  Ok(surface)
}
