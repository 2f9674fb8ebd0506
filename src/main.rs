//! Fun Ball Puzzle entry point
//!
//! Opens the window and runs the frame loop: input, update, render, pace.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use fun_ball_puzzle::audio::{self, SoundEffect, SoundPlayer};
use fun_ball_puzzle::consts::*;
use fun_ball_puzzle::platform::{Command, FrameClock, KeyState};
use fun_ball_puzzle::renderer::{RenderError, RenderState, SceneBuilder};
use fun_ball_puzzle::sim::{GameEvent, GameState, tick};
use fun_ball_puzzle::{Settings, Tuning};

#[derive(Debug, Error)]
enum AppError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to open window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Window and GPU state, created once the event loop is running
struct Graphics {
    window: Arc<Window>,
    renderer: RenderState,
}

/// Process context: the single owner of every long-lived resource
struct App {
    settings: Settings,
    audio: Box<dyn SoundPlayer>,
    game: GameState,
    keys: KeyState,
    clock: FrameClock,
    scene: SceneBuilder,
    graphics: Option<Graphics>,
    /// Fatal error to report once the loop has exited
    error: Option<AppError>,
}

impl App {
    fn new(settings: Settings, tuning: Tuning, seed: u64) -> Self {
        let audio = audio::load_player(&settings);
        log::info!("Game initialized with seed: {}", seed);

        Self {
            settings,
            audio,
            game: GameState::with_tuning(seed, tuning),
            keys: KeyState::new(),
            clock: FrameClock::new(FPS),
            scene: SceneBuilder::new(),
            graphics: None,
            error: None,
        }
    }

    fn init_graphics(&self, event_loop: &ActiveEventLoop) -> Result<Graphics, AppError> {
        let attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attributes)?);
        let renderer = pollster::block_on(RenderState::new(window.clone()))?;

        Ok(Graphics { window, renderer })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    /// One pass of the loop: update the simulation, react to its events, draw
    fn frame(&mut self, event_loop: &ActiveEventLoop, now: Instant) {
        let dt = self.clock.tick(now);
        tick(&mut self.game, &self.keys.tick_input(), dt);

        for event in self.game.drain_events() {
            self.on_game_event(event);
        }

        self.render(event_loop);
    }

    fn on_game_event(&self, event: GameEvent) {
        match event {
            GameEvent::Started => log::info!("Game started"),
            GameEvent::Restarted => log::info!("Game restarted"),
            GameEvent::BallCaught { points } => {
                log::debug!("Caught ball worth {} (score {})", points, self.game.score);
                self.audio.play(SoundEffect::Catch);
            }
            GameEvent::BallMissed => log::debug!("Ball missed"),
            GameEvent::GameOver { reason, score } => {
                log::info!("Game over ({:?}), final score {}", reason, score);
                self.audio.play(SoundEffect::GameOver);
            }
        }
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(graphics) = self.graphics.as_mut() else {
            return;
        };

        let vertices = self.scene.build(&self.game);
        match graphics.renderer.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                graphics.renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }
        match self.init_graphics(event_loop) {
            Ok(graphics) => {
                self.graphics = Some(graphics);
                self.clock = FrameClock::new(FPS);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat,
                        ..
                    },
                ..
            } => match self.keys.handle_key(code, state, repeat) {
                Some(Command::Quit) => event_loop.exit(),
                Some(Command::Space) => self.game.press_space(),
                None => {}
            },
            WindowEvent::Focused(false) => self.keys.release_all(),
            WindowEvent::Resized(size) => {
                if let Some(graphics) = self.graphics.as_mut() {
                    graphics.renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.render(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_none() {
            return;
        }

        let now = Instant::now();
        if self.clock.frame_due(now) {
            self.frame(event_loop, now);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.deadline()));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(graphics) = &self.graphics {
            log::debug!("Closing window {:?}", graphics.window.id());
        }
        log::info!("Fun Ball Puzzle exiting");
    }
}

fn run() -> Result<(), AppError> {
    let settings = Settings::default();
    let tuning = Tuning::default();
    match (serde_json::to_string(&settings), serde_json::to_string(&tuning)) {
        (Ok(s), Ok(t)) => log::debug!("Settings: {s}, tuning: {t}"),
        _ => log::debug!("Settings: {:?}, tuning: {:?}", settings, tuning),
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings, tuning, rand::random());
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Fun Ball Puzzle starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("fun-ball-puzzle: {e}");
            ExitCode::FAILURE
        }
    }
}
