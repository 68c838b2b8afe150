//! Runner configuration

use std::path::PathBuf;

use c64::types::Vector;

use crate::controller::Controller;
use crate::error::{ConfigError, ConfigResult};

/// Default number of frames to run, about 12 seconds of PAL
pub const DEFAULT_FRAMES: u64 = 600;
/// Initial ball velocity, down and to the right
pub const DEFAULT_SERVE: Vector = Vector::new(1, 1);

/// Settings for one host run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Frames to simulate
    pub frames: u64,
    /// Driver for joystick #1
    pub player1: Controller,
    /// Driver for joystick #2
    pub player2: Controller,
    /// Initial ball velocity
    pub serve: Vector,
    /// Where to write the final text screen, if anywhere
    pub dump: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            player1: Controller::Auto,
            player2: Controller::Auto,
            serve: DEFAULT_SERVE,
            dump: None,
        }
    }
}

impl RunConfig {
    /// Check the settings can be run
    ///
    /// Boundaries are tested for equality, so the ball must move at most two
    /// pixels per axis to land on them from the centre.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.frames == 0 {
            return Err(ConfigError::NoFrames);
        }
        check_serve(self.serve)
    }
}

fn check_serve(serve: Vector) -> ConfigResult<()> {
    check_speed(serve.x)?;
    check_speed(serve.y)
}

fn check_speed(speed: i8) -> ConfigResult<()> {
    match speed {
        -2 | -1 | 1 | 2 => Ok(()),
        _ => Err(ConfigError::ServeSpeed { speed }),
    }
}

/// Parse a serve vector written as `dx,dy`
pub fn parse_serve(input: &str) -> ConfigResult<Vector> {
    let (x, y) = input
        .split_once(',')
        .ok_or_else(|| ConfigError::serve_syntax(input))?;
    let component = |s: &str| {
        let s = s.trim();
        s.parse::<i8>().map_err(|_| ConfigError::serve_component(s))
    };
    let serve = Vector::new(component(x)?, component(y)?);
    check_serve(serve)?;
    Ok(serve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_valid() {
        let config = RunConfig::default();
        assert_eq!(config.serve, Vector::new(1, 1));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_parse_serve() {
        assert_eq!(parse_serve("1,1"), Ok(Vector::new(1, 1)));
        assert_eq!(parse_serve(" -2 , 1"), Ok(Vector::new(-2, 1)));
    }

    #[test]
    fn test_parse_serve_errors() {
        assert_eq!(parse_serve("11"), Err(ConfigError::serve_syntax("11")));
        assert_eq!(parse_serve("1,x"), Err(ConfigError::serve_component("x")));
        assert_eq!(parse_serve("0,1"), Err(ConfigError::ServeSpeed { speed: 0 }));
        assert_eq!(parse_serve("1,3"), Err(ConfigError::ServeSpeed { speed: 3 }));
    }

    #[test]
    fn test_zero_frames_rejected() {
        let config = RunConfig { frames: 0, ..RunConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::NoFrames));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::ServeSpeed { speed: 5 }.to_string(),
            "serve speed 5 is not one of -2, -1, 1, 2"
        );
    }
}
