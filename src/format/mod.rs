pub mod figures;
pub mod height;
pub mod position;

pub use figures::{round_figure, round_figure_value};
pub use height::{HeightOption, format_height, generate_height_options};
pub use position::PositionAbbreviator;
