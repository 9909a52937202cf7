#![allow(dead_code)]

mod active_region;
mod app;
mod bounds;
mod camera;
mod camera_controller;
mod components;
mod config;
mod constants;
mod events;
mod frame_clock;
mod framing;
mod game;
mod input;
mod nodes;
mod spawning;

use std::path::PathBuf;

use glam::Vec2;
use log::{debug, info, warn};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use config::GameConfig;
use constants::*;
use frame_clock::FrameClock;
use game::Game;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Color Nodes v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let config = GameConfig::load_or_default(&config_path);

    // Keep the server alive for the whole run
    let _profiler = if config.profiling {
        start_profiler()
    } else {
        None
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}

fn start_profiler() -> Option<puffin_http::Server> {
    let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    match puffin_http::Server::new(&addr) {
        Ok(server) => {
            puffin::set_scopes_on(true);
            info!("Profiler listening on {}", addr);
            Some(server)
        }
        Err(e) => {
            warn!("Could not start profiler on {}: {}", addr, e);
            None
        }
    }
}

struct App {
    config: GameConfig,
    state: Option<AppState>,
}

struct AppState {
    window: Window,
    game: Game,
    clock: FrameClock,
    last_center: Vec2,
}

impl App {
    fn new(config: GameConfig) -> Self {
        Self { config, state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window = match app::create_window(event_loop) {
            Ok(window) => window,
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = app::viewport_size(window.inner_size());
        let game = Game::new(&self.config, width, height);
        let last_center = game.camera().center();
        info!("Camera framed at {}", last_center);

        self.state = Some(AppState {
            window,
            game,
            clock: FrameClock::new(),
            last_center,
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                let (width, height) = app::viewport_size(size);
                state.game.resize(width, height);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => state.handle_key(key, event_loop),
            WindowEvent::CursorMoved { position, .. } => {
                state.game.pointer_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => match button_state {
                ElementState::Pressed => state.game.pointer_pressed(),
                ElementState::Released => state.game.pointer_released(),
            },
            WindowEvent::RedrawRequested => {
                state.update(self.config.profiling);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

impl AppState {
    fn update(&mut self, profiling: bool) {
        if profiling {
            puffin::GlobalProfiler::lock().new_frame();
        }

        let dt = self.clock.tick();
        self.game.update(dt);

        let center = self.game.camera().center();
        if center != self.last_center {
            debug!(
                "Frame {}: camera at {} ({:?})",
                self.clock.frame,
                center,
                self.game.drag_state()
            );
            self.last_center = center;
        }
    }

    fn handle_key(&mut self, key: KeyCode, event_loop: &ActiveEventLoop) {
        match key {
            KeyCode::Escape => event_loop.exit(),
            KeyCode::Space => match self.game.toggle_random_node(false) {
                Some(node) => info!("Disabled node {:?}", node),
                None => info!("No enabled nodes left"),
            },
            KeyCode::Enter | KeyCode::KeyN => match self.game.toggle_random_node(true) {
                Some(node) => info!("Enabled node {:?}", node),
                None => info!("All nodes already enabled"),
            },
            KeyCode::KeyR => {
                self.game.reset_board();
            }
            KeyCode::KeyF => {
                info!(
                    "Framing outline {:?}, visible {:?}",
                    self.game.controller.framing_outline(),
                    self.game.camera().visible_area()
                );
            }
            _ => {}
        }
    }
}
