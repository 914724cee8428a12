//! FFI bindings for macOS frameworks.
//!
//! `bridge` gathers the objc2 items the helpers message AppKit with;
//! `coregraphics` wraps the Quartz window list.

pub mod bridge;
pub mod coregraphics;

// Re-exports for convenient access
pub use bridge::*;
pub use coregraphics::*;
