//! Gameplay tuning constants.
//!
//! Everything here is in stage pixels and pixels per tick (the simulation
//! runs one tick per display frame). Player-facing configuration such as
//! stage dimensions lives in [`crate::config`]; these values define the
//! game's feel and are not meant to be edited at runtime.

/// Player rectangle, full extent.
pub const PLAYER_SIZE: f32 = 15.0;

/// Adversary rectangle, full extent.
pub const ADVERSARY_SIZE: f32 = 15.0;

/// Projectile rectangle, full extent.
pub const PROJECTILE_SIZE: f32 = 3.0;

/// Player horizontal speed while LEFT or RIGHT is held.
pub const PLAYER_SPEED: f32 = 2.0;

/// Upward speed of a player shot.
pub const PLAYER_SHOT_SPEED: f32 = 7.0;

/// Gap between the player's top edge and a freshly spawned shot.
pub const MUZZLE_GAP: f32 = 10.0;

/// Adversary horizontal patrol speed. Sign flips at the patrol bounds.
pub const ADVERSARY_SPEED: f32 = 0.3;

/// Width of the patrol sweep; the direction reverses once the accumulated
/// offset leaves [0, PATROL_SPAN].
pub const PATROL_SPAN: f32 = 30.0;

/// Per-tick probability that an unblocked adversary fires.
pub const FIRE_CHANCE: f32 = 0.005;

/// Downward speed of an adversary shot.
pub const ADVERSARY_SHOT_SPEED: f32 = 2.0;

/// Adversary shots drift horizontally by a uniform value in ±this.
pub const ADVERSARY_SHOT_JITTER: f32 = 0.5;

/// How far past the stage bounds a projectile may travel before it is
/// despawned.
pub const CULL_MARGIN: f32 = 40.0;
