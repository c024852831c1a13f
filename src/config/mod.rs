pub mod positions;
pub mod settings;
