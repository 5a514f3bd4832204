//! Main window loop: wires pointer input, the drag controller, the renderer,
//! and the presenter to winit's frame scheduling.

use crate::controllers::drag::controller::DragController;
use crate::controllers::drag::events::PointerEvent;
use crate::controllers::drag::redraw::RedrawQueue;
use crate::core::data::viewport::Viewport;
use crate::core::render::render_frame::render_viewport;
use crate::input::gui::pointer_input::PointerInput;
use crate::presenters::pixels::presenter::SurfacePresenter;
use log::{error, info, warn};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

struct App {
    viewport: Viewport,
    controller: DragController,
    pointer_input: PointerInput,
    redraw: RedrawQueue,
    presenter: SurfacePresenter,
}

impl App {
    fn new(window: &'static Window) -> Result<Self, Box<dyn std::error::Error>> {
        let size = window.inner_size();
        let viewport = Viewport::home_view(size.width, size.height)?;
        let presenter = SurfacePresenter::new(window)?;

        let mut redraw = RedrawQueue::new();
        redraw.request();

        Ok(Self {
            viewport,
            controller: DragController::new(),
            pointer_input: PointerInput::new(),
            redraw,
            presenter,
        })
    }

    fn handle_pointer_event(&mut self, event: PointerEvent) {
        let arms_frame_loop = matches!(event, PointerEvent::Press { .. });
        self.controller.handle_event(event);

        if arms_frame_loop {
            self.redraw.request();
        }
    }

    /// One display-refresh step: apply the pending drag tick, then render and
    /// present the (possibly updated) viewport.
    fn redraw_frame(&mut self) {
        let _ = self.redraw.take();

        match self.controller.tick(&mut self.viewport) {
            Ok(true) => self.redraw.request(),
            Ok(false) => {}
            Err(err) => error!("pan/zoom step failed: {}", err),
        }

        // A resize between scheduling and drawing leaves the surface and
        // viewport briefly out of step; skip until the resize settles.
        if self.presenter.width() != self.viewport.pixel_width()
            || self.presenter.height() != self.viewport.pixel_height()
        {
            warn!(
                "skipping frame: surface {}x{} but viewport {}x{}",
                self.presenter.width(),
                self.presenter.height(),
                self.viewport.pixel_width(),
                self.viewport.pixel_height()
            );
            return;
        }

        match render_viewport(&self.viewport) {
            Ok(frame) => {
                if let Err(err) = self.presenter.present(&frame) {
                    error!("present failed: {}", err);
                }
            }
            Err(err) => error!("render failed: {}", err),
        }
    }

    /// Applies a window resize to the surface and the viewport. Transient
    /// zero-sized surfaces (minimized window) skip the frame entirely; the
    /// zoom level is untouched either way.
    fn handle_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            warn!("skipping resize to zero-sized surface {}x{}", width, height);
            return;
        }

        if let Err(err) = self.presenter.resize(width, height) {
            error!("surface resize failed: {}", err);
            return;
        }

        if let Err(err) = self.viewport.resize(width, height) {
            error!("viewport resize rejected: {}", err);
            return;
        }

        self.redraw.request();
    }
}

/// Runs the interactive viewer. Does not return until the window closes.
pub fn run_gui() -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;

    // pixels borrows the window for the life of the surface, so leak it to
    // get the 'static reference it wants.
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelzoom")
            .with_inner_size(LogicalSize::new(800.0, 600.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut app = App::new(window)?;
    info!(
        "starting viewer at {}x{}",
        app.viewport.pixel_width(),
        app.viewport.pixel_height()
    );

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => {
                elwt.exit();
            }
            WindowEvent::RedrawRequested => {
                app.redraw_frame();
            }
            WindowEvent::Resized(size) => {
                app.handle_resize(size.width, size.height);
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = window.inner_size();
                app.handle_resize(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pointer_event = app.pointer_input.on_cursor_moved(position.x, position.y);
                app.handle_pointer_event(pointer_event);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(pointer_event) = app.pointer_input.on_mouse_input(*state, *button) {
                    app.handle_pointer_event(pointer_event);
                }
            }
            WindowEvent::CursorLeft { .. } => {
                let pointer_event = app.pointer_input.on_cursor_left();
                app.handle_pointer_event(pointer_event);
            }
            WindowEvent::Touch(touch) => {
                let pointer_event =
                    app.pointer_input
                        .on_touch(touch.phase, touch.location.x, touch.location.y);
                app.handle_pointer_event(pointer_event);
            }
            _ => {}
        },
        Event::AboutToWait => {
            if app.redraw.is_pending() {
                window.request_redraw();
            }
        }
        _ => {}
    })?;

    Ok(())
}
