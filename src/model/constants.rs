//! Configuration constants.
//!
//! This module contains product branding, Info.plist and window-list keys,
//! and the raw AppKit / Quartz values the helpers depend on.

// === Branding ===

/// Text placed before the version number in the About label.
pub const PRODUCT_VERSION_PREFIX: &str = "LG Switch V";

/// Text placed after the version number in the About label.
pub const COPYRIGHT_NOTICE: &str = "Copyright 2022-2032 LG Electronics Inc.";

// === Bundle Keys ===

/// Info.plist key holding the marketing version ("1.2.3").
pub const INFO_KEY_SHORT_VERSION: &str = "CFBundleShortVersionString";

// === Presentation Options (NSApplicationPresentationOptions) ===

/// `NSApplicationPresentationAutoHideDock`.
pub const PRESENTATION_AUTO_HIDE_DOCK: usize = 1 << 0;

/// `NSApplicationPresentationAutoHideMenuBar`.
pub const PRESENTATION_AUTO_HIDE_MENU_BAR: usize = 1 << 2;

// === Window List Dictionary Keys ===

/// Window id entry of a `CGWindowListCopyWindowInfo` row.
pub const WINDOW_KEY_NUMBER: &str = "kCGWindowNumber";

/// Owning process id entry of a `CGWindowListCopyWindowInfo` row.
pub const WINDOW_KEY_OWNER_PID: &str = "kCGWindowOwnerPID";

/// Bounds entry (a CGRect dictionary) of a `CGWindowListCopyWindowInfo` row.
pub const WINDOW_KEY_BOUNDS: &str = "kCGWindowBounds";

// === Synthetic Mouse Events ===

/// Click count stamped on synthesized mouse events.
pub const CLICK_COUNT: isize = 1;

/// Pressure stamped on synthesized mouse events.
pub const CLICK_PRESSURE: f32 = 1.0;
