pub mod audio;
pub mod config;
pub mod editor;
pub mod engine;
pub mod entity;
pub mod events;
pub mod game;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod interaction;
pub mod movement;
pub mod phase;
pub mod renderer;
pub mod ticker;
pub mod view;

pub use config::GameConfig;
pub use game::{Game, Timing};
