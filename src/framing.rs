//! Allowed camera-center math.
//!
//! The camera may sit anywhere the viewport, grown by the view extension,
//! still covers the active region. When the viewport is wider than the region
//! on an axis the allowed interval on that axis collapses to the region center.

use crate::bounds::Aabb;
use glam::Vec2;

/// Rectangle of camera centers allowed for `region`.
pub fn allowed_area(region: &Aabb, viewport_half: Vec2, margin: f32) -> Aabb {
    Aabb {
        center: region.center,
        extents: (region.extents - viewport_half + Vec2::splat(margin)).max(Vec2::ZERO),
    }
}

/// Where the camera center has to be for the given region.
///
/// With no active region the camera returns to the origin. Otherwise a center
/// already inside the allowed area is kept as is and anything outside is
/// clamped to the nearest allowed point, each axis independently.
pub fn allowed_center(
    region: Option<Aabb>,
    viewport_half: Vec2,
    margin: f32,
    current: Vec2,
) -> Vec2 {
    let Some(region) = region else {
        return Vec2::ZERO;
    };

    let allowed = allowed_area(&region, viewport_half, margin);
    if allowed.contains(current) {
        return current;
    }

    allowed.closest_point(current)
}
