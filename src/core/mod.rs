mod explore;
mod flatten;
mod render;

pub use explore::{DEFAULT_MAX_IN_FLIGHT, MAX_IN_FLIGHT_LIMIT, WalkOptions, Walker};
pub use flatten::flatten;
pub use render::write_flat_list;
