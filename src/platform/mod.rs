//! Platform-specific implementations.
//!
//! Only macOS is supported. The submodule implements the capability traits
//! (`PresentationHost`, `WindowServer`, `EventPoster`, `BundleInfo`) on top of
//! AppKit and Quartz, plus the stateless entry points the app calls.

#[cfg(target_os = "macos")]
pub mod macos;

// Re-export the current platform's modules for convenience
#[cfg(target_os = "macos")]
pub use macos::*;
