//! Helper routines for the LG Switch macOS app.
//!
//! Everything outside `platform` is free of macOS FFI so tests can run as
//! normal integration tests against fake OS capabilities:
//!
//! - [`presentation`]: dock / menu-bar auto-hide
//! - [`screen`]: display holding the focused window
//! - [`click`]: synthetic left click
//! - [`version`]: About-label version text
//!
//! `platform::macos` implements the capability traits on AppKit and Quartz
//! and exposes the ready-to-call entry points.

pub mod click;
pub mod error;
pub mod logging;
pub mod model;
pub mod platform;
pub mod presentation;
pub mod screen;
pub mod version;

// Re-export the operations and their capability traits for convenience
pub use click::{perform_click, EventPoster, MouseEventKind};
pub use error::{HelperError, HelperResult};
pub use model::{Display, DisplayId, Point, PresentationOptions, Rect};
pub use presentation::{hide, is_hidden, toggle, unhide, PresentationHost};
pub use screen::{find_screen_for_active_window, WindowServer};
pub use version::{fetch_version_number, format_version, BundleInfo};
