//! Setup and the frame loop

use c64::bus::Bus;
use c64::types::Vector;
use c64::vic::Vic;
use log::info;

use crate::assets::{
    BACKGROUND, BALL, BALL_ADDRESS, BAT, BAT_ADDRESS, BORDER, PLAYER_1_COLOR, PLAYER_2_COLOR,
};
use crate::court::{BALL_SPRITE, Court, FrameReport, PLAYER_1_START, PLAYER_2_START};
use crate::player::{Player, PlayerId};

/// A running game on some bus
#[derive(Debug)]
pub struct Pong<B: Bus> {
    vic: Vic<B>,
    court: Court,
}

impl<B: Bus> Pong<B> {
    /// Configure sprites and colours, centre the ball and place both paddles
    pub fn new(bus: B, serve: Vector) -> Self {
        let mut vic = Vic::new(bus);

        let ball = vic.upload_sprite(BALL_ADDRESS, &BALL);
        let bat = vic.upload_sprite(BAT_ADDRESS, &BAT);
        vic.enable_sprite(BALL_SPRITE, &ball, true, false, false);
        vic.enable_sprite(PlayerId::One.sprite(), &bat, false, false, true);
        vic.enable_sprite(PlayerId::Two.sprite(), &bat, false, false, true);

        let border = vic.border();
        border.set(&mut vic, BORDER.index);
        let background = vic.background();
        background.set(&mut vic, BACKGROUND.index);
        let color = vic.sprite_1_color();
        color.set(&mut vic, PLAYER_1_COLOR.index);
        let color = vic.sprite_2_color();
        color.set(&mut vic, PLAYER_2_COLOR.index);

        let p1 = Player::new(PlayerId::One, vic.sprite_pos(PlayerId::One.sprite()), PLAYER_1_START, &mut vic);
        let p2 = Player::new(PlayerId::Two, vic.sprite_pos(PlayerId::Two.sprite()), PLAYER_2_START, &mut vic);
        let court = Court::new(p1, p2, vic.sprite_pos(BALL_SPRITE), serve);
        court.reset_ball(&mut vic);

        info!("pong ready, serve {serve:?}");
        Pong { vic, court }
    }

    /// Wait for the next frame and play it
    ///
    /// Scores reach the screen when the frame closes, before this returns.
    pub fn frame(&mut self) -> FrameReport {
        let mut frame = self.vic.frame(&mut self.court);
        let (vic, court) = frame.parts();
        court.play(vic)
    }

    /// Play forever
    pub fn run(&mut self) -> ! {
        loop {
            self.frame();
        }
    }

    pub fn vic(&self) -> &Vic<B> {
        &self.vic
    }

    pub fn vic_mut(&mut self) -> &mut Vic<B> {
        &mut self.vic
    }

    pub fn court(&self) -> &Court {
        &self.court
    }

    /// Tear down and give the bus back
    pub fn into_bus(self) -> B {
        self.vic.into_bus()
    }
}
