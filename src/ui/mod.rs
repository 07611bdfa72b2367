pub mod messages;
pub mod panel;
pub mod progress;
pub mod style;
pub mod summary;
