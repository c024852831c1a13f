use colored::Colorize;

use crate::config::positions::get_positions;
use crate::format::height::generate_height_options;

/// Print every selectable player height
pub fn print_height_options() {
    println!("{}", format!("{:<8} {}", "VALUE", "LABEL").bold());
    for option in generate_height_options() {
        println!("{:<8} {}", option.value, option.label);
    }
}

/// Print the position abbreviation table
pub fn print_position_table() {
    println!("{}", format!("{:<16} {}", "POSITION", "ABBR").bold());
    for position in get_positions() {
        println!("{:<16} {}", position.full_name, position.abbreviation);
    }
}
