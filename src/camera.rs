//! Orthographic camera and the accessor the framing controller drives.
//!
//! Screen coordinates are pixels with the origin in the bottom-left corner
//! and y pointing up, matching world orientation.

use crate::bounds::Aabb;
use crate::constants::*;
use glam::{Vec2, Vec3};

/// What the framing controller needs to know about the camera each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    /// Camera center in the world plane
    pub center: Vec2,
    /// Orthographic half-height (world units)
    pub half_height: f32,
    /// Viewport width / height
    pub aspect: f32,
    /// Viewport height in pixels
    pub screen_height: f32,
}

impl CameraView {
    /// Half-size of the visible area in world units.
    pub fn half_size(&self) -> Vec2 {
        Vec2::new(self.half_height * self.aspect, self.half_height)
    }

    /// World units covered by one screen pixel.
    ///
    /// Derived from the viewport size, not by projecting through the camera.
    pub fn world_per_pixel(&self) -> f32 {
        if self.screen_height > 0.0 {
            self.half_height * 2.0 / self.screen_height
        } else {
            0.0
        }
    }
}

/// Read/write access to the camera being framed.
pub trait CameraRig {
    /// Current view, or `None` once the camera has been torn down.
    fn view(&self) -> Option<CameraView>;

    /// Move the camera center in the world plane. Depth is left unchanged.
    fn set_center(&mut self, center: Vec2);
}

#[derive(Debug, Clone)]
pub struct Camera {
    /// x/y is the view center, z is a fixed depth
    pub position: Vec3,
    pub half_height: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self::with_half_height(viewport_width, viewport_height, CAMERA_HALF_HEIGHT)
    }

    pub fn with_half_height(viewport_width: f32, viewport_height: f32, half_height: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_DEPTH),
            half_height,
            viewport_width,
            viewport_height,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    pub fn center(&self) -> Vec2 {
        self.position.truncate()
    }

    pub fn aspect(&self) -> f32 {
        if self.viewport_height > 0.0 {
            self.viewport_width / self.viewport_height
        } else {
            1.0
        }
    }

    pub fn half_size(&self) -> Vec2 {
        Vec2::new(self.half_height * self.aspect(), self.half_height)
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        let viewport = Vec2::new(self.viewport_width, self.viewport_height).max(Vec2::ONE);
        let ndc = (screen / viewport) * 2.0 - Vec2::ONE;
        self.center() + ndc * self.half_size()
    }

    /// World-space area currently on screen.
    pub fn visible_area(&self) -> Aabb {
        Aabb::new(self.center(), self.half_size())
    }
}

impl CameraRig for Camera {
    fn view(&self) -> Option<CameraView> {
        Some(CameraView {
            center: self.center(),
            half_height: self.half_height,
            aspect: self.aspect(),
            screen_height: self.viewport_height,
        })
    }

    fn set_center(&mut self, center: Vec2) {
        self.position = center.extend(self.position.z);
    }
}

/// A camera slot that may be emptied while the controller still holds it.
impl CameraRig for Option<Camera> {
    fn view(&self) -> Option<CameraView> {
        self.as_ref().and_then(CameraRig::view)
    }

    fn set_center(&mut self, center: Vec2) {
        if let Some(camera) = self {
            camera.set_center(center);
        }
    }
}
