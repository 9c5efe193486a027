//! Per-frame simulation step
//!
//! One tick per rendered frame: move the enemy, then test it against the
//! player. Phase changes are left to the state machine.

use super::collision::overlaps;
use super::state::GameSession;

/// What a frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Not playing; nothing was computed
    Idle,
    /// Enemy moved, no contact
    Advanced,
    /// Enemy moved into the player
    Collided,
}

/// Advance the session by one frame
pub fn tick(session: &mut GameSession) -> FrameOutcome {
    if !session.is_playing() {
        return FrameOutcome::Idle;
    }

    session.time_ticks += 1;
    session.enemy.advance(1);

    if overlaps(&session.player, &session.enemy) {
        FrameOutcome::Collided
    } else {
        FrameOutcome::Advanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;
    use crate::tuning::Tuning;

    #[test]
    fn test_tick_inert_outside_playing() {
        let mut session = GameSession::new(&Tuning::default());
        let before = session.enemy;
        assert_eq!(tick(&mut session), FrameOutcome::Idle);
        assert_eq!(session.enemy, before);
        assert_eq!(session.time_ticks, 0);

        session.phase = GamePhase::GameOver;
        assert_eq!(tick(&mut session), FrameOutcome::Idle);
        assert_eq!(session.enemy, before);
    }

    #[test]
    fn test_tick_moves_then_collides() {
        let mut session = GameSession::new(&Tuning::default());
        session.phase = GamePhase::Playing;
        session.enemy.pos.x = 101.0;
        session.enemy.speed = 0.5;

        // 100.5: still clear of the player's right edge at 100
        assert_eq!(tick(&mut session), FrameOutcome::Advanced);
        // 100.0: touching, not overlapping
        assert_eq!(tick(&mut session), FrameOutcome::Advanced);
        // 99.5: overlap
        assert_eq!(tick(&mut session), FrameOutcome::Collided);
        assert_eq!(session.time_ticks, 3);
    }
}
