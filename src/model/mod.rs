//! Domain model.
//!
//! Pure value types (no FFI dependencies): presentation flags, geometry,
//! display identities, colours and the constants they are built from.
//!
//! The OS-backed counterparts live in `platform::macos`.

pub mod color;
pub mod constants;
pub mod display;
pub mod geometry;
pub mod presentation;

pub use color::{parse_hex_color, RgbaColor};
pub use constants::*;
pub use display::{Display, DisplayId, WindowEntry, WindowNumber};
pub use geometry::{center_origin, window_belongs_to_display, Point, Rect, Size};
pub use presentation::PresentationOptions;
