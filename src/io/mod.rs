//! Text collaborators around the engine: seed parsing, listings, viewport.

pub mod listing;
pub mod render;
pub mod seed;

pub use listing::{format_alive_cells, format_life106, parse_life106};
pub use render::Viewport;
pub use seed::{parse_seed_line, read_seed};
