//! Desktop front-end of the casteljau Bézier editor.
//!
//! Left-click to add a control point, press <R> to clear them all, <escape> to quit.

mod platform;

use casteljau::{Editor, EditorConfig, InputAction, LoopFeedback, Weighting};
use glfw::{Action, Context as _, Key, MouseButton, WindowEvent};
use platform::PlatformError;
use std::{iter, process};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "casteljau", about = "Click to place control points of a Bézier curve.")]
pub struct CLIOpts {
  #[structopt(short, long, default_value = "1000")]
  /// Number of fragments the curve is cut into.
  samples: usize,

  #[structopt(short, long, default_value = "mirrored")]
  /// Interpolation convention: “mirrored” (t weighs the lower-index point) or “standard”.
  weighting: Weighting,

  #[structopt(long, default_value = "960")]
  /// Initial window width.
  width: u32,

  #[structopt(long, default_value = "540")]
  /// Initial window height.
  height: u32,

  #[structopt(long, default_value = "6")]
  /// Size of control points, in pixels.
  point_size: f32,
}

impl CLIOpts {
  fn editor_config(&self) -> EditorConfig {
    EditorConfig::default()
      .set_sample_count(self.samples)
      .set_weighting(self.weighting)
  }
}

fn run(cli_opts: CLIOpts) -> Result<(), PlatformError> {
  let surface = platform::create_surface(cli_opts.width, cli_opts.height, cli_opts.point_size)?;
  let mut context = surface.context;
  let events = surface.events_rx;

  // the editor works in window coordinates, the same as the cursor’s
  let (win_w, win_h) = context.window.get_size();
  let mut editor = Editor::bootstrap(
    cli_opts.editor_config(),
    [win_w as _, win_h as _],
    &mut context,
  )?;

  // render a first frame so that the editor knows the actual window size
  let back_buffer = context.back_buffer()?;
  let feedback = editor.render_frame(
    back_buffer,
    iter::once(InputAction::Resized {
      width: win_w as _,
      height: win_h as _,
    }),
    &mut context,
  );

  if feedback == LoopFeedback::Exit {
    return Ok(());
  }

  context.window.swap_buffers();

  'app: loop {
    // handle events
    context.window.glfw.poll_events();
    let actions = glfw::flush_messages(&events).flat_map(|(_, event)| adapt_events(event));

    let back_buffer = context.back_buffer()?;
    let feedback = editor.render_frame(back_buffer, actions, &mut context);

    match feedback {
      LoopFeedback::Continue => context.window.swap_buffers(),
      LoopFeedback::Exit => break 'app,
    }
  }

  log::info!(
    "bye; the curve had {} control point(s)",
    editor.session().points().len()
  );

  Ok(())
}

fn adapt_events(event: WindowEvent) -> Option<InputAction> {
  match event {
    WindowEvent::Close | WindowEvent::Key(Key::Escape, _, Action::Release, _) => {
      Some(InputAction::Quit)
    }

    WindowEvent::Key(Key::R, _, Action::Press, _) => Some(InputAction::Reset),

    WindowEvent::MouseButton(MouseButton::Button1, Action::Release, _) => {
      Some(InputAction::PrimaryReleased)
    }

    WindowEvent::CursorPos(x, y) => Some(InputAction::CursorMoved {
      x: x as _,
      y: y as _,
    }),

    WindowEvent::Size(width, height) => Some(InputAction::Resized {
      width: width as _,
      height: height as _,
    }),

    _ => None,
  }
}

fn main() {
  env_logger::builder()
    .filter_level(log::LevelFilter::Info)
    .parse_default_env()
    .init();
  let cli_opts = CLIOpts::from_args();

  if let Err(e) = run(cli_opts) {
    log::error!("{}", e);
    process::exit(1);
  }
}
