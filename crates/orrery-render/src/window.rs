//! Window management and input dispatch.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use orrery_scene::CameraCommand;

use crate::renderer::{RenderOptions, Renderer};

/// Directional key → camera command. Everything else is ignored.
fn camera_command(key: KeyCode) -> Option<CameraCommand> {
    match key {
        KeyCode::KeyW => Some(CameraCommand::Forward),
        KeyCode::KeyS => Some(CameraCommand::Back),
        KeyCode::ArrowLeft => Some(CameraCommand::Left),
        KeyCode::ArrowRight => Some(CameraCommand::Right),
        KeyCode::ArrowUp => Some(CameraCommand::Up),
        KeyCode::ArrowDown => Some(CameraCommand::Down),
        _ => None,
    }
}

pub struct App {
    options: RenderOptions,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
}

impl App {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            window: None,
            renderer: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attrs = Window::default_attributes()
            .with_title("Orrery")
            .with_inner_size(PhysicalSize::new(self.options.width, self.options.height));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("Failed to create window"),
        );
        let renderer = pollster::block_on(Renderer::new(Arc::clone(&window), self.options))
            .expect("Failed to create renderer");

        self.window = Some(window);
        self.renderer = Some(renderer);

        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(key),
                        repeat: false,
                        ..
                    },
                ..
            } => match key {
                KeyCode::Escape => event_loop.exit(),
                _ => {
                    if let (Some(command), Some(renderer)) =
                        (camera_command(key), &mut self.renderer)
                    {
                        tracing::debug!("Camera command: {:?}", command);
                        renderer.apply_camera(command);
                    }
                }
            },

            // Mouse-look stub: deltas are delivered but unused.
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.pointer_moved(position.x, position.y);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.render() {
                        tracing::warn!("Frame dropped: {e:#}");
                    }
                }

                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            _ => {}
        }
    }
}

/// Run the windowed renderer until close is requested.
pub fn run(options: RenderOptions) -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(options);
    event_loop.run_app(&mut app)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_six_directional_keys_are_recognized() {
        assert_eq!(camera_command(KeyCode::KeyW), Some(CameraCommand::Forward));
        assert_eq!(camera_command(KeyCode::KeyS), Some(CameraCommand::Back));
        assert_eq!(camera_command(KeyCode::ArrowLeft), Some(CameraCommand::Left));
        assert_eq!(
            camera_command(KeyCode::ArrowRight),
            Some(CameraCommand::Right)
        );
        assert_eq!(camera_command(KeyCode::ArrowUp), Some(CameraCommand::Up));
        assert_eq!(camera_command(KeyCode::ArrowDown), Some(CameraCommand::Down));

        assert_eq!(camera_command(KeyCode::KeyA), None);
        assert_eq!(camera_command(KeyCode::Space), None);
    }
}
