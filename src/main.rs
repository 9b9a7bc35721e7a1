//! Xellanix UI component demo
//!
//! Opens a window and drives the components with real input. Nothing is
//! drawn; the window title shows the slider value and `RUST_LOG=debug`
//! traces every interaction.

mod gui;

use gui::Gui;
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};
use xellanix_ui_winit::InputTranslator;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

struct App {
    window: Option<Arc<Window>>,
    input: InputTranslator,
    gui: Gui,
    last_title_value: Option<f64>,
}

impl App {
    fn refresh_title(&mut self) {
        let value = self.gui.value();
        if self.last_title_value == Some(value) {
            return;
        }
        if let Some(window) = &self.window {
            window.set_title(&format!("Xellanix UI - value {}", value));
            self.last_title_value = Some(value);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title("Xellanix UI")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));
        match event_loop.create_window(window_attributes) {
            Ok(window) => {
                let size = window.inner_size();
                self.gui.layout(size.width as f32, size.height as f32);
                self.window = Some(Arc::new(window));
                self.refresh_title();
            }
            Err(err) => {
                log::error!("failed to create window: {}", err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(size) => {
                self.gui.layout(size.width as f32, size.height as f32);
            }
            WindowEvent::RedrawRequested => {
                log::trace!("ui tree: {:?}", self.gui.node());
            }
            _ => {}
        }

        for interaction in self.input.handle_event(&event) {
            self.gui.handle_event(&interaction);
        }
        self.refresh_title();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.gui.update(Instant::now());

        if self.gui.is_animating() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + FRAME_INTERVAL));
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Xellanix UI demo...");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App {
        window: None,
        input: InputTranslator::new(),
        gui: Gui::new()?,
        last_title_value: None,
    };

    event_loop.run_app(&mut app)?;
    Ok(())
}
