pub mod progress;
pub mod theme;

pub use progress::Spinner;
pub use theme::{theme, Theme};
