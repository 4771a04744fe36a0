#[cfg(not(target_arch = "wasm32"))]
mod native {
    use glam::DVec3;
    use std::sync::Arc;
    use std::time::Instant;
    use toss_jump::render::OrbitCamera;
    use toss_jump::{Character, GameConfig, LogSink, SceneBlueprint, SystemClock, TableManager};
    use winit::application::ApplicationHandler;
    use winit::dpi::PhysicalPosition;
    use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
    use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
    use winit::keyboard::{KeyCode, PhysicalKey};
    use winit::window::{Window, WindowId};

    struct App {
        window: Option<Arc<Window>>,
        character: Character<SystemClock>,
        sink: LogSink,
        camera: OrbitCamera,
        mouse_pos: PhysicalPosition<f64>,
        orbiting: bool,
        last_frame: Option<Instant>,
    }

    impl App {
        fn new() -> Self {
            let config = GameConfig::STANDARD;
            let mut character = Character::new(config, SystemClock::new());
            character.reset();

            let scene = SceneBlueprint::standard(&config);
            let mut tables = TableManager::new(&config);
            let spawn = config.role_init_position;
            let table_y = config.ground_y - config.table_height / 2.0;
            tables.create_cube("table-0", spawn.x, table_y, spawn.z);
            log::info!(
                "scene: camera at {:?}, {} platform(s) of {:?}",
                scene.camera.position(),
                tables.len(),
                scene.platform_size
            );

            Self {
                window: None,
                character,
                sink: LogSink::default(),
                camera: scene.camera,
                mouse_pos: PhysicalPosition::new(0.0, 0.0),
                orbiting: false,
                last_frame: None,
            }
        }

        fn update(&mut self) {
            let now = Instant::now();
            let dt = self
                .last_frame
                .map(|last| now.duration_since(last).as_secs_f64() * 1000.0)
                .unwrap_or(0.0);
            self.last_frame = Some(now);

            // long stalls (window drag, breakpoints) would otherwise teleport the character
            self.character.update(dt.min(100.0));
            self.character.write_to(&mut self.sink);
        }
    }

    impl ApplicationHandler for App {
        fn resumed(&mut self, event_loop: &ActiveEventLoop) {
            if self.window.is_none() {
                let window_attrs = Window::default_attributes()
                    .with_title("Toss Jump")
                    .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

                match event_loop.create_window(window_attrs) {
                    Ok(window) => self.window = Some(Arc::new(window)),
                    Err(e) => {
                        log::error!("Window creation failed: {:?}", e);
                        event_loop.exit();
                    }
                }
            }
        }

        fn window_event(
            &mut self,
            event_loop: &ActiveEventLoop,
            _id: WindowId,
            event: WindowEvent,
        ) {
            match event {
                WindowEvent::CloseRequested => {
                    event_loop.exit();
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    if event.state == ElementState::Pressed {
                        if let PhysicalKey::Code(code) = event.physical_key {
                            match code {
                                KeyCode::Escape => event_loop.exit(),
                                KeyCode::KeyR => self.character.reset(),
                                _ => {}
                            }
                        }
                    }
                }
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => match state {
                    ElementState::Pressed => self.character.press(),
                    ElementState::Released => self.character.release(DVec3::ZERO),
                },
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Right,
                    ..
                } => {
                    self.orbiting = state == ElementState::Pressed;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let delta_x = position.x - self.mouse_pos.x;
                    let delta_y = position.y - self.mouse_pos.y;
                    self.mouse_pos = position;

                    if self.orbiting {
                        self.camera.rotate(delta_x, delta_y);
                        log::debug!("camera at {:?}", self.camera.position());
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let scroll = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y as f64,
                        MouseScrollDelta::PixelDelta(pos) => pos.y / 50.0,
                    };
                    self.camera.zoom(scroll);
                    log::debug!("camera radius {:.2}", self.camera.radius);
                }
                WindowEvent::RedrawRequested => {
                    self.update();
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
                _ => {}
            }
        }
    }

    pub fn run() -> Result<(), winit::error::EventLoopError> {
        env_logger::init();

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new();
        event_loop.run_app(&mut app)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), winit::error::EventLoopError> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
