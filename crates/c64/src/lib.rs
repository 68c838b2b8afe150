//! # C64 - Commodore 64 hardware layer
//!
//! A hardware abstraction layer for the VIC-II video chip and the control
//! ports of the Commodore 64.
//!
//! ## Features
//!
//! - **Bus**: volatile memory-mapped I/O, or a simulated machine for the host
//! - **Registers**: typed live handles to byte registers and single bits
//! - **VIC-II**: colours, text screen, sprites, collisions, raster frame pacing
//! - **Sprites**: compile-time encoding of high-res and multicolor bitmaps
//! - **Input**: joystick decoding with active-low polarity handled in one place
//! - **Colours**: the 16-entry palette and nearest-colour matching
//!
//! ## Quick Start
//!
//! ```no_run
//! use c64::prelude::*;
//!
//! const BALL: Sprite<HighRes> = Sprite::new([0x00FF00; 21]);
//!
//! let mut vic = Vic::new(unsafe { Mmio::new() });
//! let ball = vic.upload_sprite(832, &BALL);
//! vic.enable_sprite(0, &ball, false, false, false);
//!
//! let pos = vic.sprite_pos(0);
//! pos.set(&mut vic, (100, 100));
//!
//! loop {
//!     vic.wait_for_raster(250);
//!     let step = Joystick::read(&mut vic, Port::Two).direction_vector();
//!     pos.translate(&mut vic, step);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`bus`] - Bus trait and hardware access
//! - [`reg`] - Register and position handles
//! - [`bits`] - Single-bit register access
//! - [`vic`] - VIC-II facade and frame guard
//! - [`sprite`] - Sprite bitmap encoding
//! - [`input`] - Joystick input
//! - [`color`] - Palette and colour matching
//! - [`sim`] - Simulated machine
//! - [`types`] - Common types

#![cfg_attr(not(test), no_std)]

pub mod bits;
pub mod bus;
pub mod color;
pub mod input;
pub mod reg;
pub mod sim;
pub mod sprite;
pub mod types;
pub mod vic;

/// Convenient re-exports for common usage
///
/// Import everything you need with:
/// ```
/// use c64::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bus::{Bus, Mmio};
    pub use crate::color::{self, Color, PALETTE};
    pub use crate::input::{Joystick, Port};
    pub use crate::reg::{Position, Reg};
    pub use crate::sprite::{Encoding, HighRes, Multicolor, Sprite, SpriteData};
    pub use crate::types::*;
    pub use crate::vic::{self, Collisions, Frame, FrameHook, Vic};
}

