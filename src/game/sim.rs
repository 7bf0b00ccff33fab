//! The simulation: one tick = prune, update, cull.
//!
//! `Sim` owns the world, the tick event queues, and a seedable PRNG. A tick
//! is a pure function of (world, input, rng): all side effects (sound,
//! logging) leave through event queues drained by the driver loop.
//!
//! Tick phases, in order:
//! 1. **Prune** — over a snapshot of the live set, remove every combatant
//!    that overlaps any other combatant. Decisions are made against the
//!    snapshot, so removal is simultaneous: in a chain A-B-C where only
//!    B touches both neighbors, all three go.
//! 2. **Update** — survivors update in slot order: adversaries patrol and
//!    maybe fire, the player steers and fires, projectiles coast.
//!    Projectiles spawned during this phase first move on the next tick.
//! 3. **Cull** — projectiles beyond the stage plus a margin are despawned,
//!    bounding the entity count against shots that never hit anything.

use macroquad::prelude::{vec2, Vec2};

use super::collision;
use super::components::{Kind, Velocity};
use super::entity::Entity;
use super::events::{Destroyed, Events, ShotFired};
use super::world::World;
use crate::config::StageConfig;
use crate::input::{Button, InputState};
use crate::tuning;

/// xorshift32. Deterministic and seedable so tests can script every tick;
/// no process-global RNG state.
struct Rng {
    state: u32,
}

impl Rng {
    fn new(seed: u32) -> Self {
        // xorshift sticks at zero.
        Self { state: seed | 1 }
    }

    fn next_f32(&mut self) -> f32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state as f32 / u32::MAX as f32
    }

    fn chance(&mut self, probability: f32) -> bool {
        self.next_f32() < probability
    }

    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}

pub struct Sim {
    pub world: World,
    pub events: Events,
    /// Stage extent; combatant coordinates live in [0, stage] plus the
    /// cull margin.
    pub stage: Vec2,
    /// Per-tick adversary fire probability. Defaults to the tuned value;
    /// tests pin it to 0.0 (never) or above 1.0 (always).
    pub fire_chance: f32,
    rng: Rng,
}

impl Sim {
    /// Build the opening stage: the adversary grid, then the player at
    /// bottom-center. Grid members occupy the lowest entity slots, so they
    /// update before the player, which updates before any projectile.
    pub fn new(config: &StageConfig, seed: u32) -> Self {
        let mut sim = Self {
            world: World::new(),
            events: Events::new(),
            stage: vec2(config.width, config.height),
            fire_chance: tuning::FIRE_CHANCE,
            rng: Rng::new(seed),
        };
        for row in 0..config.rows {
            for col in 0..config.columns {
                sim.world.spawn_adversary(vec2(
                    config.grid_origin_x + col as f32 * config.spacing,
                    config.grid_origin_y + row as f32 * config.spacing,
                ));
            }
        }
        sim.world.spawn_player(vec2(
            config.width / 2.0,
            config.height - tuning::PLAYER_SIZE * 2.0,
        ));
        sim
    }

    /// Advance the world one tick.
    pub fn tick(&mut self, input: &InputState) {
        self.prune_collisions();

        // Snapshot the roster so combatants spawned mid-update (shots) are
        // not updated until the next tick.
        let roster: Vec<(Entity, Kind)> = self
            .world
            .live()
            .filter_map(|e| self.world.kinds.get(e).map(|&kind| (e, kind)))
            .collect();
        for (entity, kind) in roster {
            match kind {
                Kind::Adversary => self.update_adversary(entity),
                Kind::Player => self.update_player(entity, input),
                Kind::Projectile => self.update_projectile(entity),
            }
        }

        self.cull_offstage();
        self.world.flush_despawns();
    }

    /// Remove every combatant that overlaps another. All decisions use the
    /// pre-prune snapshot; there is no team filtering and the player is as
    /// destructible as anything else.
    fn prune_collisions(&mut self) {
        let snapshot: Vec<_> = self.world.live_bodies().collect();
        for (entity, body) in &snapshot {
            let colliding = snapshot
                .iter()
                .any(|(other, other_body)| other != entity && collision::overlaps(body, other_body));
            if colliding {
                if let Some(&kind) = self.world.kinds.get(*entity) {
                    self.events.destroyed.send(Destroyed {
                        entity: *entity,
                        kind,
                        at: body.center,
                    });
                }
                self.world.despawn(*entity);
            }
        }
        self.world.flush_despawns();
    }

    /// Patrol, maybe fire, then move. The bound check precedes the move and
    /// never clamps, so the sweep can overshoot [0, span] by one step
    /// before turning around.
    fn update_adversary(&mut self, entity: Entity) {
        let Some(mut patrol) = self.world.patrols.get(entity).copied() else {
            return;
        };
        if patrol.offset < 0.0 || patrol.offset > tuning::PATROL_SPAN {
            patrol.speed_x = -patrol.speed_x;
        }

        // Hold fire when a column-mate sits below; its back would catch
        // the shot on the next tick anyway.
        if self.rng.chance(self.fire_chance) && !self.world.adversary_below(entity) {
            if let Some(body) = self.world.bodies.get(entity).copied() {
                let drift = self.rng.range(
                    -tuning::ADVERSARY_SHOT_JITTER,
                    tuning::ADVERSARY_SHOT_JITTER,
                );
                // Just below the shooter: the shot's top edge touches the
                // shooter's bottom edge. Touching is not overlap, so a
                // fresh shot never prunes its own shooter.
                self.world.spawn_projectile(
                    vec2(body.center.x, body.bottom() + tuning::PROJECTILE_SIZE / 2.0),
                    vec2(drift, tuning::ADVERSARY_SHOT_SPEED),
                );
            }
        }

        if let Some(body) = self.world.bodies.get_mut(entity) {
            body.center.x += patrol.speed_x;
        }
        patrol.offset += patrol.speed_x;
        self.world.patrols.insert(entity, patrol);
    }

    /// Steer and fire. LEFT wins over RIGHT; fire is level-triggered, one
    /// shot per tick the button is held.
    fn update_player(&mut self, entity: Entity, input: &InputState) {
        if let Some(body) = self.world.bodies.get_mut(entity) {
            if input.is_down(Button::Left) {
                body.center.x -= tuning::PLAYER_SPEED;
            } else if input.is_down(Button::Right) {
                body.center.x += tuning::PLAYER_SPEED;
            }
        }

        if input.is_down(Button::Fire) {
            if let Some(body) = self.world.bodies.get(entity).copied() {
                let muzzle = vec2(body.center.x, body.top() - tuning::MUZZLE_GAP);
                self.world
                    .spawn_projectile(muzzle, vec2(0.0, -tuning::PLAYER_SHOT_SPEED));
                self.events.shots.send(ShotFired { at: muzzle });
            }
        }
    }

    fn update_projectile(&mut self, entity: Entity) {
        let Some(&Velocity(velocity)) = self.world.velocities.get(entity) else {
            return;
        };
        if let Some(body) = self.world.bodies.get_mut(entity) {
            body.center += velocity;
        }
    }

    /// Despawn projectiles that left the stage. Without this, every shot
    /// that misses would live forever.
    fn cull_offstage(&mut self) {
        let margin = tuning::CULL_MARGIN;
        let strays: Vec<Entity> = self
            .world
            .live()
            .filter(|&e| self.world.kinds.get(e) == Some(&Kind::Projectile))
            .filter(|&e| {
                self.world.bodies.get(e).is_some_and(|body| {
                    body.center.x < -margin
                        || body.center.x > self.stage.x + margin
                        || body.center.y < -margin
                        || body.center.y > self.stage.y + margin
                })
            })
            .collect();
        for entity in strays {
            self.world.despawn(entity);
        }
    }
}
