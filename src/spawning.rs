//! Board layout.
//!
//! Scatters nodes over a square area, each with a starting color from the
//! palette. Nodes start out enabled.

use glam::{Vec2, Vec3};
use hecs::{Entity, World};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::components::{Enabled, NodeColor, NodeShape};
use crate::config::BoardConfig;
use crate::constants::NODE_PALETTE;

/// Spawn a single node. It is not enabled; use [`crate::nodes::enable_node`] for that.
pub fn spawn_node(world: &mut World, center: Vec2, radius: f32, color: Vec3) -> Entity {
    world.spawn((NodeShape::new(center, radius), NodeColor::new(color)))
}

/// Random generator for the board, seeded from config when a seed is given
pub fn board_rng(config: &BoardConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Spawn all nodes of a fresh board, already enabled.
/// Returns the spawned entities in spawn order.
pub fn spawn_board(world: &mut World, config: &BoardConfig, rng: &mut impl Rng) -> Vec<Entity> {
    let spread = config.spread;
    (0..config.node_count)
        .map(|_| {
            let center = Vec2::new(
                rng.gen_range(-spread..=spread),
                rng.gen_range(-spread..=spread),
            );
            let color = Vec3::from(NODE_PALETTE[rng.gen_range(0..NODE_PALETTE.len())]);
            world.spawn((
                NodeShape::new(center, config.node_radius),
                NodeColor::new(color),
                Enabled,
            ))
        })
        .collect()
}
