//! Pong - two-paddle ball game for the Commodore 64
//!
//! The game runs on anything that implements [`c64::bus::Bus`]: real
//! hardware through [`c64::bus::Mmio`], or the simulated
//! [`c64::sim::Machine`] on a host.
//!
//! ## Architecture
//!
//! - **Assets** (`assets`): sprite bitmaps and colours
//! - **Players** (`player`): paddles bound to joysticks, scores
//! - **Court** (`court`): per-frame rules for ball, walls and goals
//! - **Game** (`game`): setup and the frame loop
//! - **Runner** (`runner`, `controller`, `config`): headless host runs

pub mod assets;
pub mod config;
pub mod controller;
pub mod court;
pub mod error;
pub mod game;
pub mod player;
pub mod runner;

// Re-exports for convenience
pub use config::{RunConfig, parse_serve};
pub use controller::Controller;
pub use court::{BallEvent, Court, FrameReport};
pub use error::{ConfigError, ConfigResult};
pub use game::Pong;
pub use player::{Player, PlayerId};
pub use runner::{RunSummary, Runner, render_screen};
