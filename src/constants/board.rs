//! Board layout constants.

/// Number of nodes scattered on a fresh board
pub const BOARD_NODE_COUNT: usize = 12;
/// Half-size of the square nodes are scattered in (world units)
pub const BOARD_SPREAD: f32 = 12.0;
/// Radius of a node's interactive circle (world units)
pub const NODE_RADIUS: f32 = 0.5;
/// Palette nodes pick their starting color from
pub const NODE_PALETTE: [[f32; 3]; 3] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];
