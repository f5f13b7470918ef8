//! Reusable UI components for post cards
//!
//! All components render plain class names; the desktop app ships the
//! stylesheet.

mod avatar;
mod button;
mod progress_bar;
mod stat_tile;

pub use avatar::*;
pub use button::*;
pub use progress_bar::*;
pub use stat_tile::*;
