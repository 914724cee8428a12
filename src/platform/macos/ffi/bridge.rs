//! objc2 re-exports and small AppKit helpers.

// ============================================================================
// Core objc2 re-exports
// ============================================================================

pub use objc2::rc::{autoreleasepool, Retained};
pub use objc2::runtime::AnyObject;
pub use objc2::{class, msg_send, MainThreadMarker};

// ============================================================================
// Foundation / AppKit
// ============================================================================

pub use objc2_app_kit::{NSApplication, NSEvent};
pub use objc2_foundation::{NSPoint, NSString};

use crate::error::{HelperError, HelperResult};

/// Main-thread marker, or `NotOnMainThread` when called from elsewhere.
#[inline]
pub fn main_thread() -> HelperResult<MainThreadMarker> {
    MainThreadMarker::new().ok_or(HelperError::NotOnMainThread)
}

/// The shared `NSApplication` instance.
#[inline]
pub fn shared_application(mtm: MainThreadMarker) -> Retained<NSApplication> {
    NSApplication::sharedApplication(mtm)
}

/// Create an NSString from a Rust string slice.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}
