//! Frame rendering.
//!
//! One pass: clear the stage, then draw every live combatant as a filled
//! rectangle. Bodies store centers; macroquad draws from the top-left
//! corner, so each rectangle is offset by its half-extents.

use macroquad::prelude::*;

use super::world::World;

pub fn draw(world: &World) {
    clear_background(BLACK);
    for (_, body) in world.live_bodies() {
        draw_rectangle(body.left(), body.top(), body.size.x, body.size.y, WHITE);
    }
}
