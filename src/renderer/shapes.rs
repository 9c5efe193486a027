//! Shape generation for the player and enemy sprites
//!
//! Pure geometry: the painter just walks the list.

use glam::Vec2;

use crate::sim::{Entity, GameSession};

pub const PLAYER_COLOR: &str = "#3498db";
pub const ENEMY_COLOR: &str = "#e74c3c";
const EYE_WHITE: &str = "white";
const PUPIL_BLACK: &str = "black";

/// One 2D primitive in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        pos: Vec2,
        size: Vec2,
        color: &'static str,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: &'static str,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: &'static str,
    },
}

/// Blue square with two white eyes
pub fn player_shapes(player: &Entity) -> Vec<Shape> {
    let p = player.pos;
    vec![
        Shape::Rect {
            pos: p,
            size: player.size,
            color: PLAYER_COLOR,
        },
        Shape::Circle {
            center: p + Vec2::new(15.0, 15.0),
            radius: 5.0,
            color: EYE_WHITE,
        },
        Shape::Circle {
            center: p + Vec2::new(35.0, 15.0),
            radius: 5.0,
            color: EYE_WHITE,
        },
    ]
}

/// Red square with angry brows and small pupils
pub fn enemy_shapes(enemy: &Entity) -> Vec<Shape> {
    let p = enemy.pos;
    vec![
        Shape::Rect {
            pos: p,
            size: enemy.size,
            color: ENEMY_COLOR,
        },
        Shape::Line {
            from: p + Vec2::new(10.0, 15.0),
            to: p + Vec2::new(20.0, 20.0),
            width: 2.0,
            color: EYE_WHITE,
        },
        Shape::Line {
            from: p + Vec2::new(40.0, 15.0),
            to: p + Vec2::new(30.0, 20.0),
            width: 2.0,
            color: EYE_WHITE,
        },
        Shape::Circle {
            center: p + Vec2::new(15.0, 25.0),
            radius: 3.0,
            color: PUPIL_BLACK,
        },
        Shape::Circle {
            center: p + Vec2::new(35.0, 25.0),
            radius: 3.0,
            color: PUPIL_BLACK,
        },
    ]
}

/// Everything to draw this frame. The enemy only exists while playing.
pub fn scene(session: &GameSession) -> Vec<Shape> {
    let mut shapes = player_shapes(&session.player);
    if session.is_playing() {
        shapes.extend(enemy_shapes(&session.enemy));
    }
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;
    use crate::tuning::Tuning;

    #[test]
    fn test_idle_scene_has_only_player() {
        let session = GameSession::new(&Tuning::default());
        let shapes = scene(&session);
        assert_eq!(shapes.len(), 3);
        assert!(shapes.iter().all(|s| !matches!(
            s,
            Shape::Rect {
                color: ENEMY_COLOR,
                ..
            }
        )));
    }

    #[test]
    fn test_playing_scene_follows_enemy() {
        let mut session = GameSession::new(&Tuning::default());
        session.phase = GamePhase::Playing;
        session.enemy.pos.x = 300.0;
        let shapes = scene(&session);
        assert_eq!(shapes.len(), 8);
        assert_eq!(
            shapes[3],
            Shape::Rect {
                pos: Vec2::new(300.0, 175.0),
                size: Vec2::splat(50.0),
                color: ENEMY_COLOR,
            }
        );
        assert_eq!(
            shapes[6],
            Shape::Circle {
                center: Vec2::new(315.0, 200.0),
                radius: 3.0,
                color: PUPIL_BLACK,
            }
        );
    }
}
