//! macOS implementation using AppKit via objc2 and Quartz via core-graphics.
//!
//! This module contains:
//! - FFI glue (objc2 re-exports, Quartz window-list bindings)
//! - Capability implementations (application, window server, events, bundle)
//! - The stateless helper entry points

pub mod application;
pub mod bundle;
pub mod events;
pub mod ffi;
pub mod helpers;
pub mod window_server;

// Re-export commonly used items
pub use application::AppKitPresentation;
pub use bundle::MainBundle;
pub use events::AppKitEventPoster;
pub use helpers::*;
pub use window_server::QuartzWindowServer;
