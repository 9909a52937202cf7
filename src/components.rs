use glam::{Vec2, Vec3};

use crate::bounds::Aabb;

/// Node placement and interactive circle (world units)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeShape {
    pub center: Vec2,
    pub radius: f32,
}

impl NodeShape {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Box around the circle, what the camera frames
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.center, Vec2::splat(self.radius))
    }

    /// Check if a world point is on the node
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

/// Node color component (RGB)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeColor {
    pub rgb: Vec3,
}

impl NodeColor {
    pub fn new(rgb: Vec3) -> Self {
        Self { rgb }
    }
}

/// Marker for nodes that are part of the playable area
#[derive(Debug, Clone, Copy)]
pub struct Enabled;
