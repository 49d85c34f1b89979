pub mod document;
pub mod feedback;
pub mod snapshot;

pub use document::{Document, Element, MemoryDocument};
pub use feedback::{
    UnitToggle, bind_unit_toggle, clear_error, set_theme, show_error, weather_icon_html,
};
