pub mod loader;
pub mod models;

pub use loader::load_roster;
pub use models::{RosterEntry, RosterFile};
