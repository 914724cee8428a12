//! Application presentation options (pure Rust, no FFI).
//!
//! Mirrors the bits of `NSApplicationPresentationOptions` so the toggle logic
//! can run against a fake host in tests.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use super::constants::{PRESENTATION_AUTO_HIDE_DOCK, PRESENTATION_AUTO_HIDE_MENU_BAR};

/// Set of presentation flags owned by the OS application object.
///
/// Bits that are not named here are carried through untouched when read
/// from the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PresentationOptions(usize);

impl PresentationOptions {
    /// No auto-hide flags.
    pub const NONE: Self = Self(0);

    /// Dock stays off-screen until the pointer reaches its edge.
    pub const AUTO_HIDE_DOCK: Self = Self(PRESENTATION_AUTO_HIDE_DOCK);

    /// Menu bar stays off-screen until the pointer reaches the top edge.
    pub const AUTO_HIDE_MENU_BAR: Self = Self(PRESENTATION_AUTO_HIDE_MENU_BAR);

    /// Wraps raw `NSApplicationPresentationOptions` bits.
    pub const fn from_bits(bits: usize) -> Self {
        Self(bits)
    }

    /// Raw bits, suitable for handing back to AppKit.
    pub const fn bits(self) -> usize {
        self.0
    }

    /// True if every flag in `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for PresentationOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PresentationOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for PresentationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.contains(Self::AUTO_HIDE_DOCK) {
            names.push("autoHideDock");
        }
        if self.contains(Self::AUTO_HIDE_MENU_BAR) {
            names.push("autoHideMenuBar");
        }
        if names.is_empty() {
            write!(f, "[] (0x{:x})", self.0)
        } else {
            write!(f, "[{}] (0x{:x})", names.join(", "), self.0)
        }
    }
}
