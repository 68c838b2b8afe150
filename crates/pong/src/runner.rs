//! Headless runs on the simulated machine

use c64::sim::Machine;
use c64::vic::{SCREEN_ROWS, Vic};
use log::info;

use crate::config::RunConfig;
use crate::controller::Controller;
use crate::court::{BALL_SPRITE, BallEvent};
use crate::game::Pong;
use crate::player::PlayerId;

/// What happened during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Frames played
    pub frames: u64,
    /// Points for player one and player two
    pub scores: (u8, u8),
    pub paddle_hits: u32,
    pub wall_bounces: u32,
}

/// Drives a [`Pong`] on a [`Machine`] with simulated joysticks
#[derive(Debug)]
pub struct Runner {
    pong: Pong<Machine>,
    player1: Controller,
    player2: Controller,
    summary: RunSummary,
}

impl Runner {
    pub fn new(config: &RunConfig) -> Self {
        Runner {
            pong: Pong::new(Machine::new(), config.serve),
            player1: config.player1,
            player2: config.player2,
            summary: RunSummary::default(),
        }
    }

    /// Present joystick states, then play one frame
    pub fn step(&mut self) {
        let vic = self.pong.vic_mut();
        let ball = sprite_at(vic, BALL_SPRITE);
        for (id, controller) in [(PlayerId::One, self.player1), (PlayerId::Two, self.player2)] {
            let stick = controller.joystick(sprite_at(vic, id.sprite()), ball);
            vic.bus_mut().set_joystick(id.port(), stick);
        }

        let report = self.pong.frame();
        self.summary.frames += 1;
        if report.paddle_hit {
            self.summary.paddle_hits += 1;
        }
        match report.event {
            Some(BallEvent::WallBounce) => self.summary.wall_bounces += 1,
            Some(BallEvent::Scored(id)) => {
                let court = self.pong.court();
                info!(
                    "frame {}: player {} scores ({} - {})",
                    self.summary.frames,
                    id.number(),
                    court.player(PlayerId::One).points(),
                    court.player(PlayerId::Two).points(),
                );
            }
            None => {}
        }
    }

    /// Play `frames` frames and report
    pub fn run(&mut self, frames: u64) -> RunSummary {
        info!("running {frames} frames");
        for _ in 0..frames {
            self.step();
        }
        let court = self.pong.court();
        self.summary.scores = (
            court.player(PlayerId::One).points(),
            court.player(PlayerId::Two).points(),
        );
        info!("run finished: {:?}", self.summary);
        self.summary
    }

    pub fn pong(&self) -> &Pong<Machine> {
        &self.pong
    }

    pub fn machine(&self) -> &Machine {
        self.pong.vic().bus()
    }
}

/// Sprite position without going through the bus
fn sprite_at(vic: &Vic<Machine>, id: u8) -> (u8, u8) {
    let pos = vic.sprite_pos(id);
    let machine = vic.bus();
    (machine.peek(pos.x.addr()), machine.peek(pos.y.addr()))
}

/// Render the text screen as plain text
///
/// Screen codes 1-26 are letters and `'0'..='9'` are digits, as in the
/// default character set. Everything else shows as a space and trailing
/// blanks are dropped.
pub fn render_screen(machine: &Machine) -> String {
    let mut text = String::new();
    for y in 0..SCREEN_ROWS {
        let row: String = machine.screen_row(y).iter().map(|&code| glyph(code)).collect();
        text.push_str(row.trim_end());
        text.push('\n');
    }
    text
}

fn glyph(code: u8) -> char {
    match code {
        b'0'..=b'9' => code as char,
        1..=26 => (b'A' + code - 1) as char,
        _ => ' ',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_glyphs() {
        assert_eq!(glyph(b'7'), '7');
        assert_eq!(glyph(1), 'A');
        assert_eq!(glyph(26), 'Z');
        assert_eq!(glyph(0), ' ');
        assert_eq!(glyph(32), ' ');
    }

    #[test]
    fn test_render_after_one_frame() {
        let mut runner = Runner::new(&RunConfig::default());
        runner.step();
        let screen = render_screen(runner.machine());
        let rows: Vec<&str> = screen.lines().collect();
        assert_eq!(rows.len(), 25);
        assert_eq!(rows[12], "          0         0");
        assert_eq!(rows[0], "");
    }

    #[test]
    fn test_idle_paddles_stay_put() {
        let config = RunConfig {
            player1: Controller::Idle,
            player2: Controller::Idle,
            ..RunConfig::default()
        };
        let mut runner = Runner::new(&config);
        let summary = runner.run(10);
        assert_eq!(summary.frames, 10);
        let vic = runner.pong().vic();
        assert_eq!(sprite_at(vic, 1), (15, 127));
        assert_eq!(sprite_at(vic, 2), (255, 127));
        assert_eq!(sprite_at(vic, 0), (137, 137));
    }

    #[test]
    fn test_held_stick_moves_paddle() {
        let config = RunConfig {
            player1: Controller::Up,
            player2: Controller::Down,
            ..RunConfig::default()
        };
        let mut runner = Runner::new(&config);
        runner.run(2);
        let vic = runner.pong().vic();
        assert_eq!(sprite_at(vic, 1), (15, 121));
        assert_eq!(sprite_at(vic, 2), (255, 133));
    }
}
