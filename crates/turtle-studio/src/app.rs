use std::collections::HashSet;

use anyhow::{Context, Result};

use turtle_engine::assets::{load_image, ImageData};
use turtle_engine::core::{App as EngineApp, AppControl, FrameCtx};
use turtle_engine::device::GpuInit;
use turtle_engine::render::{LineRenderer, SpriteRenderer, TextRenderer};
use turtle_engine::scene::DrawList;
use turtle_engine::input::{InputEvent, Key};
use turtle_engine::text::{FontSystem, LineRasterizer, TextRasterizer};
use turtle_engine::window::{LogicalSize, Runtime, RuntimeConfig};

use crate::config::StudioConfig;
use crate::frame::describe_frame;
use crate::input::translate_frame;
use crate::session::Session;

/// Loads the font and sprite, opens the window and runs until the user quits.
///
/// Returns an error if a resource fails to load, the window or GPU cannot be
/// initialized, or the session dies mid-run (trail or surface out of memory).
pub fn run(config: StudioConfig) -> Result<()> {
    let mut fonts = FontSystem::new();
    let font = fonts
        .load_first_available(&config.font_candidates(), config.font_size)
        .with_context(|| format!("failed to load font {}", config.font_path.display()))?;
    let rasterizer = TextRasterizer::new(fonts, font, config.font_size);

    let sprite = load_image(&config.sprite_path)
        .with_context(|| format!("failed to load marker sprite {}", config.sprite_path.display()))?;
    log::debug!("marker sprite loaded: {sprite:?}");

    let (w, h) = config.window_size;
    let runtime_config = RuntimeConfig {
        title: config.title.clone(),
        initial_size: LogicalSize::new(w as f64, h as f64),
        resizable: true,
    };

    let app = SketchApp::new(config, rasterizer, sprite);
    Runtime::run(runtime_config, GpuInit::default(), app)
}

/// Owns the session plus the per-frame rendering state.
struct SketchApp<R: LineRasterizer = TextRasterizer> {
    config: StudioConfig,
    session: Session,
    rasterizer: R,

    draw_list: DrawList,
    line_renderer: LineRenderer,
    sprite_renderer: SpriteRenderer,
    text_renderer: TextRenderer,

    fatal: Option<anyhow::Error>,
}

impl<R: LineRasterizer> SketchApp<R> {
    fn new(config: StudioConfig, rasterizer: R, sprite: ImageData) -> Self {
        // Sized from the request; the runtime's first resize event carries the real size.
        let (w, h) = config.window_size;
        let session = Session::new(&config, w, h);
        Self {
            config,
            session,
            rasterizer,
            draw_list: DrawList::new(),
            line_renderer: LineRenderer::new(),
            sprite_renderer: SpriteRenderer::new(sprite),
            text_renderer: TextRenderer::new(),
            fatal: None,
        }
    }

    /// Applies one frame of input and rebuilds the draw list.
    fn step(&mut self, events: &[InputEvent], held: &HashSet<Key>, dt: f32) -> AppControl {
        match translate_frame(&mut self.session, events, held, dt, &self.config) {
            Ok(AppControl::Continue) => {}
            Ok(AppControl::Exit) => return AppControl::Exit,
            Err(e) => return self.fail(e.into()),
        }

        describe_frame(&self.session, &self.rasterizer, &self.config, &mut self.draw_list);
        AppControl::Continue
    }

    /// Records an unrecoverable error for `exit_status` and stops the loop.
    fn fail(&mut self, err: anyhow::Error) -> AppControl {
        log::error!("{err:#}");
        self.fatal = Some(err);
        AppControl::Exit
    }
}

impl<R: LineRasterizer> EngineApp for SketchApp<R> {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.step(&ctx.input_frame.events, &ctx.input.keys_down, ctx.time.dt) == AppControl::Exit {
            return AppControl::Exit;
        }

        let dl = &mut self.draw_list;
        let r_line = &mut self.line_renderer;
        let r_sprite = &mut self.sprite_renderer;
        let r_text = &mut self.text_renderer;

        let rendered = ctx.render(self.session.viewport(), self.config.background, |rctx, target| {
            r_line.render(rctx, target, dl);
            r_sprite.render(rctx, target, dl);
            r_text.render(rctx, target, dl);
        });

        match rendered {
            Ok(()) => AppControl::Continue,
            Err(e) => self.fail(anyhow::Error::new(e).context("GPU surface failed")),
        }
    }

    fn exit_status(&mut self) -> Result<()> {
        match self.fatal.take() {
            Some(e) => Err(e).context("drawing session aborted"),
            None => Ok(()),
        }
    }
}
