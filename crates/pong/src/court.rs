//! Per-frame game rules
//!
//! The ball has no model of its own: its position lives in the sprite 0
//! registers and only its velocity is kept here.

use c64::bus::Bus;
use c64::reg::Position;
use c64::types::Vector;
use c64::vic::{FrameHook, Vic};
use log::debug;

use crate::player::{Player, PlayerId};

/// Sprite used for the ball
pub const BALL_SPRITE: u8 = 0;
/// Ball y that bounces off the top wall
pub const TOP_WALL: u8 = 45;
/// Ball y that bounces off the bottom wall
pub const BOTTOM_WALL: u8 = 235;
/// Ball x where player two scores
pub const LEFT_GOAL: u8 = 1;
/// Ball x where player one scores
pub const RIGHT_GOAL: u8 = 255;
/// Ball position after a point
pub const CENTER: (u8, u8) = (255 / 2, 255 / 2);
/// Where player one's paddle starts
pub const PLAYER_1_START: (u8, u8) = (15, 255 / 2);
/// Where player two's paddle starts
pub const PLAYER_2_START: (u8, u8) = (255, 255 / 2);
/// Text cell showing player one's score
pub const PLAYER_1_SCORE_CELL: (u8, u8) = (10, 12);
/// Text cell showing player two's score
pub const PLAYER_2_SCORE_CELL: (u8, u8) = (20, 12);

/// What the ball did after moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallEvent {
    /// Hit the top or bottom wall
    WallBounce,
    /// Crossed a goal line
    Scored(PlayerId),
}

/// Outcome of one frame of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// The ball bounced off a paddle at the start of the frame
    pub paddle_hit: bool,
    pub event: Option<BallEvent>,
}

/// Players, ball and velocity
#[derive(Debug, Clone)]
pub struct Court {
    player1: Player,
    player2: Player,
    ball: Position,
    velocity: Vector,
}

impl Court {
    pub fn new(player1: Player, player2: Player, ball: Position, velocity: Vector) -> Self {
        Court { player1, player2, ball, velocity }
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::One => &self.player1,
            PlayerId::Two => &self.player2,
        }
    }

    pub fn ball(&self) -> Position {
        self.ball
    }

    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vector) {
        self.velocity = velocity;
    }

    /// Put the ball back in the middle; velocity is kept
    pub fn reset_ball<B: Bus + ?Sized>(&self, bus: &mut B) {
        self.ball.set(bus, CENTER);
    }

    /// Apply one frame of rules
    pub fn play<B: Bus>(&mut self, vic: &mut Vic<B>) -> FrameReport {
        let mut report = FrameReport::default();

        let hits = vic.sprite_collisions();
        if hits.sprite(BALL_SPRITE)
            && (hits.sprite(PlayerId::One.sprite()) || hits.sprite(PlayerId::Two.sprite()))
        {
            self.velocity = self.velocity.flip_x();
            // push the ball out so the next read does not bounce it back
            self.ball.translate(vic, self.velocity.horizontal());
            report.paddle_hit = true;
            debug!("paddle hit, velocity now {:?}", self.velocity);
        }

        self.player1.update_position(vic);
        self.player2.update_position(vic);

        let (x, y) = self.ball.translate(vic, self.velocity);
        if y == TOP_WALL || y == BOTTOM_WALL {
            self.velocity = self.velocity.flip_y();
            report.event = Some(BallEvent::WallBounce);
            debug!("wall bounce at ({x}, {y})");
        } else if x == LEFT_GOAL {
            self.score(vic, PlayerId::Two);
            report.event = Some(BallEvent::Scored(PlayerId::Two));
        } else if x == RIGHT_GOAL {
            self.score(vic, PlayerId::One);
            report.event = Some(BallEvent::Scored(PlayerId::One));
        }
        report
    }

    fn score<B: Bus + ?Sized>(&mut self, bus: &mut B, id: PlayerId) {
        let player = match id {
            PlayerId::One => &mut self.player1,
            PlayerId::Two => &mut self.player2,
        };
        player.scored();
        debug!("player {} scores, now {}", id.number(), player.points());
        self.reset_ball(bus);
    }
}

impl<B: Bus> FrameHook<B> for Court {
    fn end_frame(&mut self, vic: &mut Vic<B>) {
        let (x, y) = PLAYER_1_SCORE_CELL;
        vic.display(x, y).set(vic, self.player1.score());
        let (x, y) = PLAYER_2_SCORE_CELL;
        vic.display(x, y).set(vic, self.player2.score());
    }
}
