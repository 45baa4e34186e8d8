//! The editor: a [`Session`] and the [`SceneList`] showing it.

use luminance_front::{context::GraphicsContext, framebuffer::Framebuffer, texture::Dim2, Backend};

use crate::{
  config::EditorConfig,
  scene::{SceneError, SceneList},
  session::{Change, Session},
  InputAction, LoopFeedback,
};

pub struct Editor {
  session: Session,
  scene: SceneList,
}

impl Editor {
  /// Bootstrap the editor with an empty curve.
  pub fn bootstrap(
    config: EditorConfig,
    window_size: [u32; 2],
    context: &mut impl GraphicsContext<Backend = Backend>,
  ) -> Result<Self, SceneError> {
    let session = Session::new(config, window_size);
    let mut scene = SceneList::new(context)?;
    scene.upload(context, &session)?;

    log::info!(
      "editor ready: {} fragment(s) per curve, {} weighting",
      config.sample_count,
      config.weighting
    );

    Ok(Editor { session, scene })
  }

  pub fn session(&self) -> &Session {
    &self.session
  }

  /// Apply pending actions and render a frame.
  pub fn render_frame(
    &mut self,
    back_buffer: Framebuffer<Dim2, (), ()>,
    actions: impl Iterator<Item = InputAction>,
    context: &mut impl GraphicsContext<Backend = Backend>,
  ) -> LoopFeedback {
    let mut geometry_changed = false;

    for action in actions {
      match self.session.apply(action) {
        Change::Quit => return LoopFeedback::Exit,
        Change::Geometry => geometry_changed = true,
        Change::Viewport | Change::None => (),
      }
    }

    // several clicks in the same frame only need the last state
    if geometry_changed {
      if let Err(e) = self.scene.upload(context, &self.session) {
        log::error!("{}", e);
        return LoopFeedback::Exit;
      }
    }

    let projection = self.session.projection();
    let clear_color = self.session.config().clear_color;
    let render = self
      .scene
      .render(context, &back_buffer, projection, clear_color);

    match render.into_result() {
      Ok(()) => LoopFeedback::Continue,
      Err(e) => {
        log::error!("cannot render frame: {}", e);
        LoopFeedback::Exit
      }
    }
  }
}
