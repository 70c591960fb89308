use crate::assets::Texture;
use crate::config::Settings;
use crate::draw::{Canvas, render_game};
use crate::error::Error;
use crate::game::{GameState, Step};
use crate::input::{Action, BOOST_KEY, BOUND_KEYS, action_for_key};
use pixels::{Pixels, SurfaceTexture};
use std::time::Instant;
use winit::dpi::LogicalSize;
use winit::event::Event;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};
use winit_input_helper::WinitInputHelper;

/// Graphics handles in acquisition order. Released back to front.
#[derive(Default)]
pub struct Surfaces {
    pub window: Option<Window>,
    pub pixels: Option<Pixels>,
    pub background: Option<Texture>,
}

impl Surfaces {
    /// Drops whatever is still held and returns how many handles that was.
    /// Safe to call again, or on a half-built set.
    pub fn release(&mut self) -> usize {
        let mut released = 0;
        if self.background.take().is_some() {
            released += 1;
        }
        if self.pixels.take().is_some() {
            released += 1;
        }
        if self.window.take().is_some() {
            released += 1;
        }
        if released > 0 {
            log::debug!("released {released} graphics handles");
        }
        released
    }
}

impl Drop for Surfaces {
    fn drop(&mut self) {
        self.release();
    }
}

pub struct App {
    settings: Settings,
    game: GameState,
    input: WinitInputHelper,
    surfaces: Surfaces,
    running: bool,
}

impl App {
    pub fn init(event_loop: &EventLoop<()>, settings: Settings) -> Result<Self, Error> {
        let mut surfaces = Surfaces::default();

        let window = WindowBuilder::new()
            .with_title(settings.title.as_str())
            .with_inner_size(LogicalSize::new(settings.width, settings.height))
            .with_resizable(false)
            .build(event_loop)?;

        let pixels = {
            let window_size = window.inner_size();
            let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
            Pixels::new(settings.width, settings.height, surface_texture)?
        };
        surfaces.window = Some(window);
        surfaces.pixels = Some(pixels);

        if let Some(path) = settings.background.as_deref() {
            surfaces.background = Some(Texture::load(path)?);
        }

        let game = GameState::new(&settings, Instant::now());
        log::info!(
            "window {}x{} with {}px cells, moving every {}ms",
            settings.width,
            settings.height,
            settings.cell_size,
            settings.move_interval_ms
        );

        Ok(Self { settings, game, input: WinitInputHelper::new(), surfaces, running: true })
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!("quitting with score {}", self.game.score);
        }
        self.running = false;
    }

    /// Releases the window, renderer and textures. Idempotent.
    pub fn clean(&mut self) {
        self.surfaces.release();
    }

    /// Polls, steps and redraws until quit. Never returns.
    pub fn run(mut self, event_loop: EventLoop<()>) -> ! {
        event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Poll;

            if let Event::RedrawRequested(_) = event {
                if let Err(err) = self.render() {
                    log::error!("present failed: {err}");
                    self.stop();
                }
            }

            if self.running && self.input.update(&event) {
                if self.input.close_requested() || self.input.destroyed() {
                    self.stop();
                }
                self.handle_keys();

                match self.game.update(Instant::now()) {
                    Some(Step::AteApple) => log::debug!("apple eaten, score {}", self.game.score),
                    Some(Step::Collided) | Some(Step::Moved) | None => {}
                }

                if let Some(window) = &self.surfaces.window {
                    window.request_redraw();
                }
            }

            if !self.running {
                self.clean();
                *control_flow = ControlFlow::Exit;
            }
        })
    }

    fn handle_keys(&mut self) {
        for key in BOUND_KEYS {
            if !self.input.key_pressed(key) {
                continue;
            }
            match action_for_key(key) {
                Some(Action::Steer(dir)) => self.game.steer(dir),
                Some(Action::Restart) if self.game.is_game_over() => self.game.restart(),
                Some(Action::TogglePause) => self.game.toggle_pause(Instant::now()),
                Some(Action::Quit) => self.stop(),
                _ => {}
            }
        }
        self.game.set_boost(self.input.key_held(BOOST_KEY));
    }

    fn render(&mut self) -> Result<(), pixels::Error> {
        let Some(pixels) = self.surfaces.pixels.as_mut() else {
            return Ok(());
        };
        {
            let mut canvas = Canvas::new(pixels.frame_mut(), self.settings.width, self.settings.height);
            render_game(&mut canvas, &self.game, self.surfaces.background.as_ref());
        }
        pixels.render()
    }
}
