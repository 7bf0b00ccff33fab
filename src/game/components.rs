//! Component types for stage combatants.
//!
//! Components are plain data; behavior lives in the simulation systems.

use macroquad::prelude::Vec2;

/// What a combatant is. Matched explicitly wherever behavior differs by
/// variant; there is no dynamic dispatch in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The one controllable combatant at the bottom of the stage. It takes
    /// part in collision pruning like everything else, so it is destructible.
    Player,
    /// A patrolling grid member that occasionally fires downward.
    Adversary,
    /// A shot in flight, friendly or hostile. No team distinction exists.
    Projectile,
}

/// Position and rectangular extent. Every combatant has one; it is both the
/// draw shape and the collision shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Rectangle center in stage coordinates (y grows downward).
    pub center: Vec2,
    /// Full width and height.
    pub size: Vec2,
}

impl Body {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }
}

/// Constant per-tick displacement. Projectiles only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Velocity(pub Vec2);

/// Patrol state for an adversary.
///
/// `offset` accumulates horizontal displacement since spawn and drives the
/// direction reversal: once it leaves [0, span] the sign of `speed_x`
/// flips. The bounds are checked before the move, never clamped, so a
/// single step of overshoot is normal.
#[derive(Debug, Clone, Copy)]
pub struct Patrol {
    pub offset: f32,
    pub speed_x: f32,
}

impl Patrol {
    pub fn new(speed_x: f32) -> Self {
        Self {
            offset: 0.0,
            speed_x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::vec2;

    #[test]
    fn body_edges() {
        let body = Body::new(vec2(100.0, 50.0), vec2(15.0, 15.0));
        assert_eq!(body.left(), 92.5);
        assert_eq!(body.right(), 107.5);
        assert_eq!(body.top(), 42.5);
        assert_eq!(body.bottom(), 57.5);
    }
}
