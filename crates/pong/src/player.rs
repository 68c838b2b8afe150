//! Paddle players

use c64::bus::Bus;
use c64::input::{Joystick, Port};
use c64::reg::Position;

/// Pixels a paddle moves per frame while the stick is held
pub const PADDLE_STEP: i8 = 3;

/// Score glyph before any point is scored
pub const SCORE_ZERO: u8 = b'0';
/// Highest score glyph; further points are not counted
pub const SCORE_MAX: u8 = b'9';

/// Which side a player is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// 1 or 2
    pub const fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Control port the player's joystick is plugged into
    pub const fn port(self) -> Port {
        Port::from_number(self.number())
    }

    /// Hardware sprite showing the player's paddle
    pub const fn sprite(self) -> u8 {
        self.number()
    }
}

/// A paddle bound to a joystick
///
/// The paddle position is not stored here: `position` is a live handle on
/// the sprite registers.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    position: Position,
    score: u8,
}

impl Player {
    /// Create a player and move its paddle to `start`
    pub fn new<B: Bus + ?Sized>(id: PlayerId, position: Position, start: (u8, u8), bus: &mut B) -> Self {
        position.set(bus, start);
        Player { id, position, score: SCORE_ZERO }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Score as a screen glyph, `'0'..='9'`
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Score as a number
    pub fn points(&self) -> u8 {
        self.score - SCORE_ZERO
    }

    /// Move the paddle vertically from the current joystick state
    ///
    /// Horizontal input is ignored.
    pub fn update_position<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        let dy = Joystick::read(bus, self.id.port())
            .direction_vector()
            .scale(PADDLE_STEP)
            .y;
        self.position.y.update(bus, |y| y.wrapping_add_signed(dy));
    }

    /// Award a point; saturates at nine
    pub fn scored(&mut self) {
        if self.score < SCORE_MAX {
            self.score += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use c64::sim::Machine;
    use c64::vic::Vic;

    fn player(vic: &mut Vic<Machine>, id: PlayerId) -> Player {
        let pos = vic.sprite_pos(id.sprite());
        Player::new(id, pos, (15, 127), vic)
    }

    #[test]
    fn test_new_places_paddle() {
        let mut vic = Vic::new(Machine::new());
        let p = player(&mut vic, PlayerId::One);
        assert_eq!(p.position().get(&mut vic), (15, 127));
        assert_eq!(vic.bus().peek(53250), 15);
        assert_eq!(p.score(), b'0');
    }

    #[test]
    fn test_moves_three_per_frame() {
        let mut vic = Vic::new(Machine::new());
        let mut p = player(&mut vic, PlayerId::One);
        vic.bus_mut()
            .set_joystick(Port::One, Joystick { down: true, ..Joystick::RELEASED });
        p.update_position(&mut vic);
        assert_eq!(p.position().get(&mut vic), (15, 130));

        vic.bus_mut()
            .set_joystick(Port::One, Joystick { up: true, ..Joystick::RELEASED });
        p.update_position(&mut vic);
        p.update_position(&mut vic);
        assert_eq!(p.position().get(&mut vic), (15, 124));
    }

    #[test]
    fn test_ignores_horizontal_and_other_port() {
        let mut vic = Vic::new(Machine::new());
        let mut p = player(&mut vic, PlayerId::Two);
        vic.bus_mut()
            .set_joystick(Port::Two, Joystick { left: true, fire: true, ..Joystick::RELEASED });
        vic.bus_mut()
            .set_joystick(Port::One, Joystick { down: true, ..Joystick::RELEASED });
        p.update_position(&mut vic);
        assert_eq!(p.position().get(&mut vic), (15, 127));
    }

    #[test]
    fn test_player_two_uses_port_a() {
        assert_eq!(PlayerId::Two.port(), Port::Two);
        assert_eq!(PlayerId::One.port(), Port::One);
        assert_eq!(PlayerId::Two.sprite(), 2);
    }

    #[test]
    fn test_score_caps_at_nine() {
        let mut vic = Vic::new(Machine::new());
        let mut p = player(&mut vic, PlayerId::One);
        p.scored();
        assert_eq!(p.score(), b'1');
        for _ in 0..20 {
            p.scored();
        }
        assert_eq!(p.score(), b'9');
        assert_eq!(p.points(), 9);
    }
}
