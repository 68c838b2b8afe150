//! Joystick drivers for the host runner
//!
//! On the real machine a person holds the stick. The runner instead asks a
//! [`Controller`] for a joystick state each frame and presents it on the
//! control port before the game polls it.

use c64::input::Joystick;
use clap::ValueEnum;

use crate::player::PADDLE_STEP;

/// Ball bitmap rows / 2
const BALL_HALF_HEIGHT: i16 = 10;
/// Bat bitmap rows (double height) / 2
const BAT_HALF_HEIGHT: i16 = 21;

/// How a simulated joystick is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Controller {
    /// Never touched
    Idle,
    /// Held up
    Up,
    /// Held down
    Down,
    /// Follows the ball
    #[default]
    Auto,
}

impl Controller {
    /// Joystick state for this frame given the paddle and ball sprite positions
    pub fn joystick(self, paddle: (u8, u8), ball: (u8, u8)) -> Joystick {
        match self {
            Controller::Idle => Joystick::RELEASED,
            Controller::Up => Joystick { up: true, ..Joystick::RELEASED },
            Controller::Down => Joystick { down: true, ..Joystick::RELEASED },
            Controller::Auto => {
                let target = ball.1 as i16 + BALL_HALF_HEIGHT;
                let centre = paddle.1 as i16 + BAT_HALF_HEIGHT;
                let step = PADDLE_STEP as i16;
                Joystick {
                    up: target < centre - step,
                    down: target > centre + step,
                    ..Joystick::RELEASED
                }
            }
        }
    }
}
