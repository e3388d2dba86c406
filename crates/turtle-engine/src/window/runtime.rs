use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::{resized_event, translate_window_event};
use crate::input::{InputFrame, InputState};
use crate::time::{FrameClock, FrameTime};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "turtle".to_string(),
            initial_size: LogicalSize::new(800.0, 800.0),
            resizable: true,
        }
    }
}

/// Entry point for the runtime.
///
/// Drives a single window: events are collected into the input state and
/// frame, and every redraw hands one `FrameCtx` to the app. Only the app's
/// `AppControl::Exit` (or an initialization failure) ends the loop.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        // Window and GPU objects drop before the app reports.
        state.window = None;

        if let Some(err) = state.init_error.take() {
            return Err(err);
        }
        state.app.exit_status()
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl WindowEntry {
    fn request_redraw(&self) {
        self.with_window(|w| w.request_redraw());
    }

    /// Records `event` into the input state and this frame's event list.
    fn feed(&mut self, event: &WindowEvent) {
        self.with_mut(|fields| {
            if let Some(ev) = translate_window_event(fields.window, event) {
                fields.input_state.apply_event(fields.input_frame, ev);
            }
        });
    }

    /// Reconfigures the surface to the window's current physical size.
    fn sync_surface_size(&mut self) {
        let size = self.with_window(|w| w.inner_size());
        self.with_gpu_mut(|gpu| gpu.resize(size));
    }

    /// Runs one app frame, then drops the frame's events.
    fn redraw<A: CoreApp>(&mut self, app: &mut A) -> AppControl {
        self.with_mut(|fields| {
            let time: FrameTime = fields.clock.tick();
            let control = {
                let mut ctx = FrameCtx {
                    window: WindowCtx {
                        id: fields.window.id(),
                        window: fields.window,
                    },
                    gpu: fields.gpu,
                    input: fields.input_state,
                    input_frame: fields.input_frame,
                    time,
                };
                app.on_frame(&mut ctx)
            };
            fields.input_frame.clear();
            control
        })
    }
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    init_error: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            init_error: None,
            exit_requested: false,
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        log::debug!("window created: {:?}", window.inner_size());

        let gpu_init = self.gpu_init.clone();

        // The app starts from the real window size, not the requested one.
        let mut input_state = InputState::default();
        let mut input_frame = InputFrame::default();
        input_state.apply_event(&mut input_frame, resized_event(&window, window.inner_size()));

        WindowEntryTryBuilder {
            input_state,
            input_frame,
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init)).context("GPU initialization failed")
            },
        }
        .try_build()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.init_error = Some(err);
        self.exit_requested = true;
        event_loop.exit();
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.request_redraw();
                self.window = Some(entry);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: held keys move the marker every frame.
        if let Some(entry) = self.window.as_ref() {
            entry.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.window.as_mut() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        entry.feed(&event);

        let control = match event {
            // Queued for the app; it decides whether to quit on the next frame.
            WindowEvent::CloseRequested => {
                entry.request_redraw();
                AppControl::Continue
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                entry.sync_surface_size();
                entry.request_redraw();
                AppControl::Continue
            }
            WindowEvent::RedrawRequested => entry.redraw(&mut self.app),
            _ => AppControl::Continue,
        };

        if control == AppControl::Exit {
            log::debug!("app requested exit");
            self.exit_requested = true;
            event_loop.exit();
        }
    }
}
