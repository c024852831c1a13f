pub mod listing;
pub mod report;
