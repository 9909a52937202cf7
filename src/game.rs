//! Game state and the per-frame update.
//!
//! Owns the node world, the camera controller and the two event buses the
//! controller listens to. Each frame applies, in order: the click/drag hold
//! timer, pending node lifecycle events (region update and reframe), pending
//! drag signals, then one motion step.

use glam::Vec2;
use hecs::{Entity, World};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::camera::Camera;
use crate::camera_controller::{CameraController, DragState};
use crate::components::NodeShape;
use crate::config::{BoardConfig, GameConfig};
use crate::events::{DragSignal, EventBus, NodeEvent, Subscription};
use crate::input::{ClickHandler, InputState};
use crate::nodes;
use crate::spawning;

pub struct Game {
    pub world: World,
    pub controller: CameraController<Entity, Camera>,
    pub input: InputState,
    click_handler: ClickHandler,
    board_config: BoardConfig,
    node_events: EventBus<NodeEvent>,
    drag_signals: EventBus<DragSignal>,
    node_subscription: Subscription<NodeEvent>,
    drag_subscription: Subscription<DragSignal>,
    rng: StdRng,
}

impl Game {
    /// Lay out a board and frame the camera on it.
    pub fn new(config: &GameConfig, viewport_width: f32, viewport_height: f32) -> Self {
        let mut world = World::new();
        let mut rng = spawning::board_rng(&config.board);
        let board = spawning::spawn_board(&mut world, &config.board, &mut rng);

        let mut camera =
            Camera::with_half_height(viewport_width, viewport_height, config.camera.half_height);
        camera.position.z = config.camera.depth;
        let mut controller = CameraController::new(camera, config.camera.framing_settings());
        controller.register_existing(nodes::enabled_nodes(&world));
        info!(
            "Board ready: {} nodes, active region {:?}",
            board.len(),
            controller.current_region()
        );

        let mut node_events = EventBus::new();
        let node_subscription = node_events.subscribe();
        let mut drag_signals = EventBus::new();
        let drag_subscription = drag_signals.subscribe();

        Self {
            world,
            controller,
            input: InputState::new(),
            click_handler: ClickHandler::new(config.input.click_to_drag_duration),
            board_config: config.board.clone(),
            node_events,
            drag_signals,
            node_subscription,
            drag_subscription,
            rng,
        }
    }

    /// Advance one frame.
    pub fn update(&mut self, dt: f32) {
        puffin::profile_function!();

        self.click_handler.update(dt, &mut self.drag_signals);

        let mut region_changed = false;
        for event in self.node_subscription.drain() {
            match event {
                NodeEvent::Enabled { node, bounds } => {
                    self.controller.on_object_enabled(node, bounds)
                }
                NodeEvent::Disabled { node } => self.controller.on_object_disabled(node),
            }
            region_changed = true;
        }
        if region_changed {
            debug!("Framing outline now {:?}", self.controller.framing_outline());
        }

        for signal in self.drag_subscription.drain() {
            match signal {
                DragSignal::Start(point) => {
                    self.controller.on_drag_start(point, self.input.pointer, &self.world);
                }
                DragSignal::End(point) => self.controller.on_drag_end(point),
            }
        }

        self.controller.step(dt, self.input.pointer);
    }

    /// Cursor moved, position in window coordinates (origin top-left)
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        let height = self.controller.rig().viewport_height;
        self.input.set_pointer_from_window(x, y, height);
    }

    pub fn pointer_pressed(&mut self) {
        let point = self.pointer_world();
        self.click_handler.press(point);
    }

    pub fn pointer_released(&mut self) {
        let point = self.pointer_world();
        self.click_handler.release(point, &mut self.drag_signals);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.controller.rig_mut().resize(width, height);
        self.controller.reframe();
    }

    pub fn enable_node(&mut self, node: Entity) -> bool {
        nodes::enable_node(&mut self.world, node, &mut self.node_events)
    }

    pub fn disable_node(&mut self, node: Entity) -> bool {
        nodes::disable_node(&mut self.world, node, &mut self.node_events)
    }

    /// Enable a random disabled node (or disable a random enabled one).
    /// Returns the node that changed, if there was a candidate.
    pub fn toggle_random_node(&mut self, enable: bool) -> Option<Entity> {
        let candidates = if enable {
            nodes::disabled_nodes(&self.world)
        } else {
            nodes::enabled_nodes(&self.world)
                .into_iter()
                .map(|(node, _)| node)
                .collect()
        };

        let node = *candidates.choose(&mut self.rng)?;
        let changed = if enable {
            self.enable_node(node)
        } else {
            self.disable_node(node)
        };
        changed.then_some(node)
    }

    /// Despawn every node and lay out a fresh board from the same settings.
    /// Returns the number of nodes on the new board.
    pub fn reset_board(&mut self) -> usize {
        let old: Vec<Entity> = self
            .world
            .query::<&NodeShape>()
            .iter()
            .map(|(node, _)| node)
            .collect();
        for node in old {
            nodes::despawn_node(&mut self.world, node, &mut self.node_events);
        }

        let board = spawning::spawn_board(&mut self.world, &self.board_config, &mut self.rng);
        self.controller.reset_objects(nodes::enabled_nodes(&self.world));
        info!(
            "Board reset: {} nodes, active region {:?}",
            board.len(),
            self.controller.current_region()
        );
        board.len()
    }

    pub fn camera(&self) -> &Camera {
        self.controller.rig()
    }

    pub fn drag_state(&self) -> DragState {
        self.controller.state()
    }

    /// Pointer position in world space
    pub fn pointer_world(&self) -> Vec2 {
        self.camera().screen_to_world(self.input.pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Aabb;
    use crate::config::BoardConfig;
    use approx::assert_relative_eq;
    use glam::Vec3;

    /// Empty board, 100x100 px viewport with half-height 5 (0.1 world units per pixel)
    fn empty_game() -> Game {
        let mut config = GameConfig::default();
        config.board = BoardConfig {
            node_count: 0,
            seed: Some(3),
            ..BoardConfig::default()
        };
        config.input.click_to_drag_duration = 0.1;
        Game::new(&config, 100.0, 100.0)
    }

    fn add_node(game: &mut Game, x: f32, y: f32, radius: f32) -> Entity {
        let node = spawning::spawn_node(&mut game.world, Vec2::new(x, y), radius, Vec3::X);
        assert!(game.enable_node(node));
        node
    }

    /// Press at the screen center and hold long enough to start a drag
    fn start_drag(game: &mut Game) {
        game.pointer_moved(50.0, 50.0);
        game.pointer_pressed();
        game.update(0.1);
    }

    #[test]
    fn test_seeded_board_is_framed_on_startup() {
        let mut config = GameConfig::default();
        config.board.seed = Some(11);
        let game = Game::new(&config, 1280.0, 720.0);

        assert_eq!(game.controller.tracker().len(), config.board.node_count);
        let region = game.controller.current_region().unwrap();
        let camera = game.camera().center();
        let settings = game.controller.settings();
        let allowed = crate::framing::allowed_area(
            &region,
            game.camera().half_size(),
            settings.view_extension,
        );
        assert!(allowed.contains(camera));
    }

    #[test]
    fn test_node_events_apply_on_next_update() {
        let mut game = empty_game();
        let node = add_node(&mut game, 30.0, 0.0, 0.5);

        assert!(game.controller.current_region().is_none());
        game.update(0.016);
        assert_eq!(
            game.controller.current_region(),
            Some(Aabb::new(Vec2::new(30.0, 0.0), Vec2::splat(0.5)))
        );
        assert_eq!(game.camera().center(), Vec2::new(30.0, 0.0));

        game.disable_node(node);
        game.update(0.016);
        assert!(game.controller.current_region().is_none());
        assert_eq!(game.camera().center(), Vec2::ZERO);
    }

    #[test]
    fn test_region_update_lands_before_drag_start_in_same_frame() {
        let mut game = empty_game();
        let node = spawning::spawn_node(&mut game.world, Vec2::ZERO, 1.0, Vec3::X);

        game.pointer_moved(50.0, 50.0);
        game.pointer_pressed();
        // Node appears under the pointer in the same frame the drag would start
        game.enable_node(node);
        game.update(0.1);

        assert_eq!(game.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_drag_and_release_coasts_to_rest() {
        let mut game = empty_game();
        add_node(&mut game, -40.0, -40.0, 0.5);
        add_node(&mut game, 40.0, 40.0, 0.5);
        game.update(0.016);

        start_drag(&mut game);
        assert!(matches!(game.drag_state(), DragState::Dragging { .. }));

        // Drag the pointer 100 px right and up over one frame
        game.pointer_moved(150.0, -50.0);
        game.update(0.1);
        let center = game.camera().center();
        assert_relative_eq!(center.x, -10.0, epsilon = 1e-4);
        assert_relative_eq!(center.y, -10.0, epsilon = 1e-4);

        game.pointer_released();
        game.update(0.016);
        assert!(matches!(game.drag_state(), DragState::Coasting { .. }));

        let mut frames = 0;
        while game.drag_state() != DragState::Idle {
            game.update(0.016);
            frames += 1;
            assert!(frames < 10_000);
        }
        // Momentum carried the camera further in the drag direction
        assert!(game.camera().center().x < -10.0);
    }

    #[test]
    fn test_flick_at_60hz_coasts_at_pointer_speed() {
        let mut game = empty_game();
        add_node(&mut game, -40.0, -40.0, 0.5);
        add_node(&mut game, 40.0, 40.0, 0.5);
        game.update(1.0 / 60.0);

        game.pointer_moved(50.0, 50.0);
        game.pointer_pressed();
        for _ in 0..7 {
            game.update(1.0 / 60.0);
        }
        assert!(matches!(game.drag_state(), DragState::Dragging { velocity: None, .. }));

        // 10 px (1 world unit) in a single frame
        game.pointer_moved(60.0, 50.0);
        game.update(1.0 / 60.0);
        let DragState::Dragging { velocity: Some(v), .. } = game.drag_state() else {
            panic!("expected a seeded drag velocity, got {:?}", game.drag_state());
        };
        assert_relative_eq!(v.x, 60.0, epsilon = 1e-2);

        game.pointer_released();
        game.update(1.0 / 60.0);
        let DragState::Coasting { velocity } = game.drag_state() else {
            panic!("expected coasting, got {:?}", game.drag_state());
        };
        // One frame of friction 5 at 60 Hz
        assert_relative_eq!(velocity.x, 55.0, epsilon = 1e-2);
    }

    #[test]
    fn test_reset_board_replaces_every_node() {
        let mut config = GameConfig::default();
        config.board.node_count = 5;
        config.board.seed = Some(21);
        let mut game = Game::new(&config, 100.0, 100.0);
        let old: Vec<Entity> = game.controller.tracker().ids().collect();

        assert_eq!(game.reset_board(), 5);
        assert_eq!(game.controller.tracker().len(), 5);
        assert!(old.iter().all(|node| !game.world.contains(*node)));
        assert!(old.iter().all(|node| !game.controller.tracker().contains(*node)));

        // Disables queued by the despawns are stale and change nothing
        let region = game.controller.current_region();
        game.update(1.0 / 60.0);
        assert_eq!(game.controller.tracker().len(), 5);
        assert_eq!(game.controller.current_region(), region);
    }

    #[test]
    fn test_press_on_node_does_not_drag() {
        let mut game = empty_game();
        add_node(&mut game, 0.0, 0.0, 1.0);
        game.update(0.016);

        start_drag(&mut game);
        assert_eq!(game.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_toggle_random_node_round_trip() {
        let mut game = empty_game();
        assert!(game.toggle_random_node(true).is_none());

        let node = add_node(&mut game, 5.0, 5.0, 0.5);
        game.update(0.016);

        assert_eq!(game.toggle_random_node(false), Some(node));
        game.update(0.016);
        assert!(game.controller.current_region().is_none());

        assert_eq!(game.toggle_random_node(true), Some(node));
        game.update(0.016);
        assert!(game.controller.tracker().contains(node));
    }

    #[test]
    fn test_resize_reframes_camera() {
        let mut game = empty_game();
        add_node(&mut game, -20.0, 0.0, 0.5);
        add_node(&mut game, 20.0, 0.0, 0.5);
        game.update(0.016);

        // Allowed x interval is [-17.5, 17.5] at aspect 1
        game.controller.rig_mut().position.x = 17.0;
        // Aspect 4 widens the view to half-width 20: interval shrinks to [-2.5, 2.5]
        game.resize(400.0, 100.0);
        assert_relative_eq!(game.camera().center().x, 2.5);
    }
}
