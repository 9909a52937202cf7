//! Camera framing and inertial drag.
//!
//! The controller keeps the camera inside the area allowed by the active
//! region and moves it with the pointer. Motion is an explicit state machine
//! stepped once per rendered frame:
//!
//! - `Idle`: camera at rest, only region changes move it.
//! - `Dragging`: camera follows the pointer 1:1 in world units while a
//!   smoothed velocity is recorded.
//! - `Coasting`: after release the camera keeps the recorded velocity, which
//!   decays with friction until it drops below the stop speed.
//!
//! A new drag always replaces whatever motion is in flight.

use std::hash::Hash;

use glam::Vec2;
use log::{debug, trace};

use crate::active_region::ActiveRegionTracker;
use crate::bounds::Aabb;
use crate::camera::CameraRig;
use crate::constants::*;
use crate::framing;

/// Answers whether a world point lands on an object's interactive area.
pub trait HitTest<K> {
    fn hit_test(&self, id: K, point: Vec2) -> bool;
}

/// Tuning for framing and motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingSettings {
    /// Slack around the viewport when framing the region (world units)
    pub view_extension: f32,
    /// Coasting velocity decay rate (per second), must be positive
    pub friction: f32,
    /// Drag velocity smoothing rate (per second)
    pub drag_smoothing: f32,
    /// Coasting ends at or below this speed
    pub stop_speed: f32,
}

impl Default for FramingSettings {
    fn default() -> Self {
        Self {
            view_extension: CAMERA_VIEW_EXTENSION,
            friction: CAMERA_FRICTION,
            drag_smoothing: CAMERA_DRAG_SMOOTHING,
            stop_speed: CAMERA_STOP_SPEED,
        }
    }
}

/// Motion phase of the camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        /// Pointer position at the previous sample (screen pixels)
        last_pointer: Vec2,
        /// Smoothed world velocity, `None` until the pointer first moves
        velocity: Option<Vec2>,
    },
    Coasting {
        velocity: Vec2,
    },
}

/// Active region and the margin-grown outline around it, for debug overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingOutline {
    pub region: Aabb,
    pub extended: Aabb,
}

pub struct CameraController<K, R> {
    rig: R,
    tracker: ActiveRegionTracker<K>,
    settings: FramingSettings,
    state: DragState,
}

impl<K: Copy + Eq + Hash, R: CameraRig> CameraController<K, R> {
    /// Take over `rig` and frame it right away (no region yet, so it centers on the origin).
    pub fn new(rig: R, settings: FramingSettings) -> Self {
        let mut controller = Self {
            rig,
            tracker: ActiveRegionTracker::new(),
            settings,
            state: DragState::Idle,
        };
        controller.crop_camera_position();
        controller
    }

    /// Bulk-register objects that were already enabled before the controller existed.
    pub fn register_existing(&mut self, objects: impl IntoIterator<Item = (K, Aabb)>) {
        for (id, bounds) in objects {
            self.tracker.on_object_enabled(id, bounds);
        }
        debug!(
            "Registered {} existing objects, region {:?}",
            self.tracker.len(),
            self.tracker.current_region()
        );
        self.crop_camera_position();
    }

    pub fn on_object_enabled(&mut self, id: K, bounds: Aabb) {
        if !self.tracker.on_object_enabled(id, bounds) {
            return;
        }
        debug!("Active region grew to {:?}", self.tracker.current_region());
        self.crop_camera_position();
    }

    pub fn on_object_disabled(&mut self, id: K) {
        if !self.tracker.on_object_disabled(id) {
            return;
        }
        debug!("Active region rebuilt as {:?}", self.tracker.current_region());
        self.crop_camera_position();
    }

    /// Begin following the pointer.
    ///
    /// Ignored when `point` lands on an active object. Otherwise any drag or
    /// coast in progress is dropped and a fresh drag starts from `pointer_screen`.
    /// Returns true if a drag started.
    pub fn on_drag_start(
        &mut self,
        point: Vec2,
        pointer_screen: Vec2,
        hits: &impl HitTest<K>,
    ) -> bool {
        if self.tracker.ids().any(|id| hits.hit_test(id, point)) {
            debug!("Drag start at {} is on an active object, ignoring", point);
            return false;
        }

        if self.state != DragState::Idle {
            debug!("Drag restarted, discarding {:?}", self.state);
        }

        self.state = DragState::Dragging {
            last_pointer: pointer_screen,
            velocity: None,
        };
        true
    }

    /// Release the drag and let the camera coast on its last velocity.
    pub fn on_drag_end(&mut self, _point: Vec2) {
        let DragState::Dragging { velocity, .. } = self.state else {
            return;
        };

        let velocity = velocity.unwrap_or(Vec2::ZERO);
        self.state = if velocity.length() > self.settings.stop_speed {
            DragState::Coasting { velocity }
        } else {
            DragState::Idle
        };
        debug!("Drag released, now {:?}", self.state);
    }

    /// Advance motion by one frame.
    ///
    /// Does nothing while idle, for a non-positive `dt`, or when the camera
    /// is unavailable (the state is then kept as it was).
    pub fn step(&mut self, dt: f32, pointer_screen: Vec2) {
        puffin::profile_function!();

        if self.state == DragState::Idle || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let Some(view) = self.rig.view() else {
            return;
        };

        match self.state {
            DragState::Idle => {}
            DragState::Dragging {
                last_pointer,
                velocity,
            } => {
                let delta = (pointer_screen - last_pointer) * view.world_per_pixel();

                // Moving the pointer right drags the world right, so the camera goes left
                self.rig.set_center(view.center - delta);
                self.crop_camera_position();

                let sample = delta / dt;
                let velocity = match velocity {
                    // Still frames before the first move do not count as samples
                    None if delta == Vec2::ZERO => None,
                    None => Some(sample),
                    Some(v) => {
                        let blend = (dt * self.settings.drag_smoothing).min(1.0);
                        Some(v + (sample - v) * blend)
                    }
                };
                trace!("Dragging: delta {} velocity {:?}", delta, velocity);

                self.state = DragState::Dragging {
                    last_pointer: pointer_screen,
                    velocity,
                };
            }
            DragState::Coasting { velocity } => {
                self.rig.set_center(view.center - velocity * dt);

                // Decay factor capped at 1: a long frame stops the camera, never reverses it
                let velocity = velocity - velocity * (dt * self.settings.friction).min(1.0);
                self.crop_camera_position();
                trace!("Coasting: velocity {}", velocity);

                if velocity.length() <= self.settings.stop_speed {
                    debug!("Coasting finished");
                    self.state = DragState::Idle;
                } else {
                    self.state = DragState::Coasting { velocity };
                }
            }
        }
    }

    /// Forget every tracked object and register `objects` in their place.
    pub fn reset_objects(&mut self, objects: impl IntoIterator<Item = (K, Aabb)>) {
        self.tracker.clear();
        self.register_existing(objects);
    }

    /// Re-apply the framing clamp, e.g. after the viewport changed size.
    pub fn reframe(&mut self) {
        self.crop_camera_position();
    }

    fn crop_camera_position(&mut self) {
        let Some(view) = self.rig.view() else {
            return;
        };

        let target = framing::allowed_center(
            self.tracker.current_region(),
            view.half_size(),
            self.settings.view_extension,
            view.center,
        );
        if target != view.center {
            self.rig.set_center(target);
        }
    }

    /// Region plus its outline grown by the view extension, if anything is active.
    pub fn framing_outline(&self) -> Option<FramingOutline> {
        let region = self.tracker.current_region()?;
        Some(FramingOutline {
            region,
            extended: region.grown(self.settings.view_extension),
        })
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state == DragState::Idle
    }

    pub fn current_region(&self) -> Option<Aabb> {
        self.tracker.current_region()
    }

    pub fn tracker(&self) -> &ActiveRegionTracker<K> {
        &self.tracker
    }

    pub fn settings(&self) -> &FramingSettings {
        &self.settings
    }

    pub fn rig(&self) -> &R {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut R {
        &mut self.rig
    }

    /// Camera center, if the camera is still around
    pub fn camera_center(&self) -> Option<Vec2> {
        self.rig.view().map(|view| view.center)
    }
}
