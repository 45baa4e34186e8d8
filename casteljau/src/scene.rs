//! GPU side of the editor: one shader program shared by a list of drawable layers.
//!
//! Geometry is never patched in place. Every time the session changes, each layer gets a brand
//! new tessellation built from [`Session::layer_vertices`] and the previous one is dropped, which
//! releases its GPU buffers.

use std::fmt;

use cgmath::Matrix4;
use luminance::UniformInterface;
use luminance_front::{
  context::GraphicsContext,
  framebuffer::Framebuffer,
  pipeline::{PipelineError, PipelineState, Render},
  render_state::RenderState,
  shader::{types::Mat44, BuiltProgram, Program, ProgramError, Uniform},
  tess::{Tess, TessError},
  texture::Dim2,
  Backend,
};

use crate::{
  geometry::{Layer, Semantics, Vertex},
  session::Session,
};

const VS: &str = include_str!("scene-vs.glsl");
const FS: &str = include_str!("scene-fs.glsl");

#[derive(Debug, UniformInterface)]
struct ShaderInterface {
  projection: Uniform<Mat44<f32>>,
}

/// What can go wrong while setting up or updating the scene.
#[derive(Debug)]
pub enum SceneError {
  /// The shader program didn’t compile or link.
  ProgramCreation(ProgramError),
  /// A layer’s tessellation couldn’t be created.
  TessCreation(Layer, TessError),
}

impl fmt::Display for SceneError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      SceneError::ProgramCreation(ref e) => write!(f, "cannot create shader program: {}", e),
      SceneError::TessCreation(layer, ref e) => {
        write!(f, "cannot create tessellation for {:?}: {}", layer, e)
      }
    }
  }
}

impl std::error::Error for SceneError {}

impl From<ProgramError> for SceneError {
  fn from(e: ProgramError) -> Self {
    SceneError::ProgramCreation(e)
  }
}

// A layer and its current GPU geometry, if it has any vertex.
struct Drawable {
  layer: Layer,
  tess: Option<Tess<Vertex>>,
}

/// The list of things to draw every frame.
pub struct SceneList {
  program: Program<Semantics, (), ShaderInterface>,
  drawables: Vec<Drawable>,
}

impl SceneList {
  /// Compile the shared shader program. No geometry is uploaded yet.
  pub fn new(context: &mut impl GraphicsContext<Backend = Backend>) -> Result<Self, SceneError> {
    let BuiltProgram { program, warnings } = context
      .new_shader_program::<Semantics, (), ShaderInterface>()
      .from_strings(VS, None, None, FS)?;

    for warning in warnings {
      log::warn!("shader program warning: {:?}", warning);
    }

    let drawables = Layer::ALL
      .iter()
      .map(|&layer| Drawable { layer, tess: None })
      .collect();

    Ok(SceneList { program, drawables })
  }

  /// Rebuild every layer’s tessellation from the current session content.
  pub fn upload(
    &mut self,
    context: &mut impl GraphicsContext<Backend = Backend>,
    session: &Session,
  ) -> Result<(), SceneError> {
    for drawable in &mut self.drawables {
      let vertices = session.layer_vertices(drawable.layer);

      // an empty tessellation cannot be built; there is nothing to draw anyway
      if vertices.is_empty() {
        drawable.tess = None;
        continue;
      }

      let tess = context
        .new_tess()
        .set_vertices(vertices)
        .set_mode(drawable.layer.mode())
        .build()
        .map_err(|e| SceneError::TessCreation(drawable.layer, e))?;

      drawable.tess = Some(tess);
    }

    log::trace!(
      "uploaded {} point(s), {} sample(s)",
      session.points().len(),
      session.samples().len()
    );

    Ok(())
  }

  /// Clear `back_buffer` and draw every layer in order.
  pub fn render(
    &mut self,
    context: &mut impl GraphicsContext<Backend = Backend>,
    back_buffer: &Framebuffer<Dim2, (), ()>,
    projection: Matrix4<f32>,
    clear_color: [f32; 4],
  ) -> Render<PipelineError> {
    let program = &mut self.program;
    let drawables = &self.drawables;
    let pipeline_state = PipelineState::default().set_clear_color(clear_color);
    // flat 2D drawing, later layers go on top
    let render_state = RenderState::default().set_depth_test(None);

    context
      .new_pipeline_gate()
      .pipeline(back_buffer, &pipeline_state, |_, mut shd_gate| {
        shd_gate.shade(program, |mut iface, uni, mut rdr_gate| {
          iface.set(&uni.projection, Mat44::new(projection));

          rdr_gate.render(&render_state, |mut tess_gate| {
            for tess in drawables.iter().filter_map(|d| d.tess.as_ref()) {
              tess_gate.render(tess)?;
            }

            Ok(())
          })
        })
      })
      .assume()
  }
}
