//! Joystick input handling for the C64
//!
//! Both control ports are wired to CIA #1. Each direction and the fire button
//! pull one data line low while pressed, so the raw register is active-low:
//! a cleared bit means "pressed". [`Joystick::decode`] is the only place that
//! polarity is inverted.
//!
//! # Example
//!
//! ```no_run
//! use c64::bus::Mmio;
//! use c64::input::{Joystick, Port};
//!
//! let mut bus = unsafe { Mmio::new() };
//! let stick = Joystick::read(&mut bus, Port::Two);
//!
//! if stick.fire {
//!     // launch
//! }
//! let step = stick.direction_vector();
//! ```

use crate::bits::test_bit;
use crate::bus::Bus;
use crate::types::Vector;

/// CIA #1 data port A, joystick #2
pub const JOYSTICK_PORT_A: u16 = 56320;
/// CIA #1 data port B, joystick #1
pub const JOYSTICK_PORT_B: u16 = 56321;

/// Line assignments within a port byte
pub mod line {
    /// Up
    pub const UP: u8 = 0;
    /// Down
    pub const DOWN: u8 = 1;
    /// Left
    pub const LEFT: u8 = 2;
    /// Right
    pub const RIGHT: u8 = 3;
    /// Fire button
    pub const FIRE: u8 = 4;
}

/// Control port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Port {
    /// Control port 1
    One,
    /// Control port 2
    Two,
}

impl Port {
    /// Map a port number to a port; `2` is port two, anything else port one
    #[inline]
    pub const fn from_number(number: u8) -> Self {
        if number == 2 { Port::Two } else { Port::One }
    }

    /// Address of the CIA register this port is read from
    #[inline]
    pub const fn register(self) -> u16 {
        match self {
            Port::One => JOYSTICK_PORT_B,
            Port::Two => JOYSTICK_PORT_A,
        }
    }
}

/// Decoded joystick state, `true` = pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Joystick {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl Joystick {
    /// Nothing pressed
    pub const RELEASED: Joystick = Joystick {
        up: false,
        down: false,
        left: false,
        right: false,
        fire: false,
    };

    /// Decode a raw active-low port byte
    #[inline]
    pub const fn decode(raw: u8) -> Self {
        Joystick {
            up: !test_bit(raw, line::UP),
            down: !test_bit(raw, line::DOWN),
            left: !test_bit(raw, line::LEFT),
            right: !test_bit(raw, line::RIGHT),
            fire: !test_bit(raw, line::FIRE),
        }
    }

    /// Encode back to the raw active-low byte
    ///
    /// Lines the joystick does not drive (bits 5-7) read high.
    #[inline]
    pub const fn encode(self) -> u8 {
        let mut pressed = 0u8;
        if self.up {
            pressed |= 1 << line::UP;
        }
        if self.down {
            pressed |= 1 << line::DOWN;
        }
        if self.left {
            pressed |= 1 << line::LEFT;
        }
        if self.right {
            pressed |= 1 << line::RIGHT;
        }
        if self.fire {
            pressed |= 1 << line::FIRE;
        }
        !pressed
    }

    /// Poll a control port
    #[inline]
    pub fn read<B: Bus + ?Sized>(bus: &mut B, port: Port) -> Self {
        Self::decode(bus.read(port.register()))
    }

    /// Unit direction of the stick
    ///
    /// Left wins over right and up wins over down when both are reported.
    /// Up is negative y, matching screen coordinates.
    pub const fn direction_vector(self) -> Vector {
        let x = if self.left {
            -1
        } else if self.right {
            1
        } else {
            0
        };
        let y = if self.up {
            -1
        } else if self.down {
            1
        } else {
            0
        };
        Vector::new(x, y)
    }
}
