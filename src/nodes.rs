//! Node lifecycle.
//!
//! Enabling or disabling a node flips its [`Enabled`] marker and publishes a
//! [`NodeEvent`] so the camera can reframe. Operations on nodes that are
//! already in the requested state publish nothing.

use glam::Vec2;
use hecs::{Entity, World};

use crate::bounds::Aabb;
use crate::camera_controller::HitTest;
use crate::components::{Enabled, NodeShape};
use crate::events::{EventBus, NodeEvent};

/// Mark a node as enabled and announce it.
/// Returns false if the entity is not a node or was already enabled.
pub fn enable_node(world: &mut World, node: Entity, events: &mut EventBus<NodeEvent>) -> bool {
    let Ok(bounds) = world.get::<&NodeShape>(node).map(|shape| shape.bounds()) else {
        return false;
    };
    if world.get::<&Enabled>(node).is_ok() {
        return false;
    }
    if world.insert_one(node, Enabled).is_err() {
        return false;
    }

    events.publish(NodeEvent::Enabled { node, bounds });
    true
}

/// Clear a node's enabled marker and announce it.
/// Returns false if the node was not enabled.
pub fn disable_node(world: &mut World, node: Entity, events: &mut EventBus<NodeEvent>) -> bool {
    if world.remove_one::<Enabled>(node).is_err() {
        return false;
    }

    events.publish(NodeEvent::Disabled { node });
    true
}

/// Remove a node from the world, announcing the disable first if needed.
pub fn despawn_node(world: &mut World, node: Entity, events: &mut EventBus<NodeEvent>) {
    disable_node(world, node, events);
    if world.despawn(node).is_err() {
        log::debug!("Despawn of {:?} skipped, no such entity", node);
    }
}

/// Every enabled node with its bounds, for registering a board that already exists.
pub fn enabled_nodes(world: &World) -> Vec<(Entity, Aabb)> {
    world
        .query::<(&NodeShape, &Enabled)>()
        .iter()
        .map(|(entity, (shape, _))| (entity, shape.bounds()))
        .collect()
}

/// Every node that is currently disabled.
pub fn disabled_nodes(world: &World) -> Vec<Entity> {
    world
        .query::<&NodeShape>()
        .without::<&Enabled>()
        .iter()
        .map(|(entity, _)| entity)
        .collect()
}

impl HitTest<Entity> for World {
    fn hit_test(&self, node: Entity, point: Vec2) -> bool {
        self.get::<&NodeShape>(node)
            .map(|shape| shape.contains(point))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::NodeColor;
    use glam::Vec3;

    fn spawn_node(world: &mut World, x: f32, y: f32) -> Entity {
        world.spawn((NodeShape::new(Vec2::new(x, y), 0.5), NodeColor::new(Vec3::X)))
    }

    #[test]
    fn test_enable_publishes_bounds_once() {
        let mut world = World::new();
        let mut bus = EventBus::new();
        let sub = bus.subscribe();
        let node = spawn_node(&mut world, 2.0, 1.0);

        assert!(enable_node(&mut world, node, &mut bus));
        assert!(!enable_node(&mut world, node, &mut bus));

        let events: Vec<_> = sub.drain().collect();
        assert_eq!(events.len(), 1);
        match &events[0] {
            NodeEvent::Enabled { node: n, bounds } => {
                assert_eq!(*n, node);
                assert_eq!(*bounds, Aabb::new(Vec2::new(2.0, 1.0), Vec2::splat(0.5)));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_disable_only_announces_enabled_nodes() {
        let mut world = World::new();
        let mut bus = EventBus::new();
        let sub = bus.subscribe();
        let node = spawn_node(&mut world, 0.0, 0.0);

        assert!(!disable_node(&mut world, node, &mut bus));
        enable_node(&mut world, node, &mut bus);
        assert!(disable_node(&mut world, node, &mut bus));

        let events: Vec<_> = sub.drain().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[1], NodeEvent::Disabled { node: n } if n == node));
        assert_eq!(disabled_nodes(&world), vec![node]);
    }

    #[test]
    fn test_despawn_enabled_node_announces_disable() {
        let mut world = World::new();
        let mut bus = EventBus::new();
        let node = spawn_node(&mut world, 0.0, 0.0);
        enable_node(&mut world, node, &mut bus);

        let sub = bus.subscribe();
        despawn_node(&mut world, node, &mut bus);
        assert!(!world.contains(node));
        assert!(matches!(sub.poll(), Some(NodeEvent::Disabled { .. })));

        // Second despawn is harmless
        despawn_node(&mut world, node, &mut bus);
        assert!(sub.poll().is_none());
    }

    #[test]
    fn test_non_node_entity_cannot_be_enabled() {
        let mut world = World::new();
        let mut bus = EventBus::new();
        let other = world.spawn((NodeColor::new(Vec3::ONE),));
        assert!(!enable_node(&mut world, other, &mut bus));
    }

    #[test]
    fn test_hit_test_uses_circle_not_box() {
        let mut world = World::new();
        let node = spawn_node(&mut world, 0.0, 0.0);
        assert!(world.hit_test(node, Vec2::new(0.3, 0.3)));
        // Inside the bounding box corner but outside the circle
        assert!(!world.hit_test(node, Vec2::new(0.45, 0.45)));
    }
}
