pub mod app;
pub mod apple;
pub mod assets;
pub mod config;
pub mod direction;
pub mod draw;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod snake;
pub mod timer;

pub use app::App;
pub use config::Settings;
pub use direction::Direction;
pub use error::Error;
pub use game::{GameState, Phase, Step};
pub use geometry::{Cell, Grid};
