//! Game foundation.
//!
//! A small compile-time ECS: entities are generational indices, components
//! are plain data in sparse per-type storage, and behavior lives in the
//! simulation's tick systems. Side effects cross the boundary as events.
//!
//! - `entity`: generational ids + allocator
//! - `component`: sparse storage
//! - `components`: Body, Kind, Velocity, Patrol
//! - `world`: the container, spawn/despawn, queries
//! - `collision`: the rectangle overlap predicate
//! - `events`: per-tick event queues
//! - `sim`: the tick itself (prune, update, cull)
//! - `renderer`: one filled rectangle per combatant

// The arena and storage keep a few accessors that only the tests exercise.
#![allow(dead_code)]

pub mod collision;
pub mod component;
pub mod components;
pub mod entity;
pub mod events;
pub mod renderer;
pub mod sim;
pub mod world;

pub use sim::Sim;
