//! Winit frontend: window and surface setup, input dispatch, and the
//! fixed-timestep update/render loop.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};

use perrito_core::{FRAME_RATE, PressOutcome, Session, Vec2};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::assets::Assets;
use crate::canvas::Canvas;
use crate::render;
use crate::text::TextRenderer;

const WINDOW_TITLE: &str = "perrito";

pub struct Frontend {
    session: Session,
    assets: Assets,
    text: TextRenderer,
    pointer: Vec2,
    last_frame: Instant,
    next_frame: Instant,
    gfx: Option<Gfx>,
}

struct Gfx {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    canvas: Canvas,
}

impl Frontend {
    pub fn new(session: Session, assets: Assets, text: TextRenderer) -> Self {
        let now = Instant::now();
        // until the cursor first moves, the sprite idles at its home point
        let pointer = session.layout().center();
        Self {
            session,
            assets,
            text,
            pointer,
            last_frame: now,
            next_frame: now,
            gfx: None,
        }
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;
        Ok(())
    }

    fn frame_duration() -> Duration {
        Duration::from_secs(1) / FRAME_RATE
    }

    /// One loop iteration: measured-dt update, scene render, present.
    fn redraw(&mut self) {
        let dt = self.last_frame.elapsed().as_secs_f32();
        self.last_frame = Instant::now();
        self.session.update(dt, self.pointer);

        let Some(gfx) = &mut self.gfx else {
            return;
        };
        render::draw_frame(
            &mut gfx.canvas,
            &self.session,
            &self.assets,
            &mut self.text,
            self.pointer,
        );

        let Ok(mut buf) = gfx.surface.buffer_mut() else {
            return;
        };
        gfx.canvas.copy_to(&mut buf);
        buf.present().ok();
    }
}

impl ApplicationHandler for Frontend {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }

        let layout = self.session.layout();
        let (width, height) = (layout.width(), layout.height());

        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("failed to create window"),
        );

        let context =
            softbuffer::Context::new(window.clone()).expect("failed to create softbuffer context");
        let mut surface = softbuffer::Surface::new(&context, window.clone())
            .expect("failed to create softbuffer surface");

        let size = window.inner_size();
        surface
            .resize(
                NonZeroU32::new(size.width.max(1)).unwrap(),
                NonZeroU32::new(size.height.max(1)).unwrap(),
            )
            .expect("failed to size the surface");

        let canvas = Canvas::new(size.width.max(1), size.height.max(1));
        log::debug!("window ready at {}x{}", size.width, size.height);

        self.gfx = Some(Gfx {
            window,
            surface,
            canvas,
        });
        self.last_frame = Instant::now();
        self.next_frame = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = self
                    .gfx
                    .as_ref()
                    .map_or(1.0, |gfx| gfx.window.scale_factor());
                self.pointer = Vec2::new(
                    (position.x / scale) as f32,
                    (position.y / scale) as f32,
                );
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let outcome = self.session.handle_press(self.pointer);
                if outcome == PressOutcome::Quit {
                    event_loop.exit();
                    return;
                }
                if outcome.has_update() {
                    if let Some(gfx) = &self.gfx {
                        gfx.window.request_redraw();
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // fixed-timestep pacing: one redraw per nominal frame
        let now = Instant::now();
        if now >= self.next_frame {
            self.next_frame = now + Self::frame_duration();
            if let Some(gfx) = &self.gfx {
                gfx.window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}
