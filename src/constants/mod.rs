//! Game constants organized by domain.
//!
//! These are the defaults; most of them can be overridden from the config file.

mod board;
mod camera;
mod input;
mod time;
mod ui;

pub use board::*;
pub use camera::*;
pub use input::*;
pub use time::*;
pub use ui::*;
