//! Bitmaps and colours

use c64::color::Color;
use c64::sprite::{HighRes, Multicolor, Sprite};

/// Where the ball bitmap is stored (block 13, the tape buffer)
pub const BALL_ADDRESS: u16 = 832;
/// Where the bat bitmap is stored (block 14)
pub const BAT_ADDRESS: u16 = 896;

/// The ball image
pub const BALL: Sprite<HighRes> = Sprite::new([
    0b000000000000000000000000,
    0b000000000000000000000000,
    0b000000000111111000000000,
    0b000000011111111110000000,
    0b000000110111111111000000,
    0b000001100011111111100000,
    0b000001110111111111100000,
    0b000011111111111111110000,
    0b000011111111111111110000,
    0b000011111111111111110000,
    0b000000111111111111000000,
    0b000011000000000000110000,
    0b000011111111111111110000,
    0b000001111111111111100000,
    0b000001111111111111100000,
    0b000000111111111111000000,
    0b000000011111111110000000,
    0b000000000111111000000000,
    0b000000000000000000000000,
    0b000000000000000000000000,
    0b000000000000000000000000,
]);

/// The bat image
pub const BAT: Sprite<Multicolor> = Sprite::new([
    0x000002200000,
    0x000002200000,
    0x000002200000,
    0x000002200000,
    0x000002200000,
    0x000002200000,
    0x000002200000,
    0x000002200000,
    0x000002200000,
    0x000002200000,
    0x000002200000,
    0x000002200000,
    0x000002200000,
    0x000002200000,
    0x000002200000,
    0x000002200000,
    0x000003300000,
    0x000001100000,
    0x000003300000,
    0x000001100000,
    0x000003300000,
]);

/// 50% grey
pub const BORDER: Color = Color::nearest(128, 128, 128);
pub const BACKGROUND: Color = Color::nearest(0, 0, 0);
pub const PLAYER_1_COLOR: Color = Color::nearest(255, 0, 0);
pub const PLAYER_2_COLOR: Color = Color::nearest(0, 255, 0);
