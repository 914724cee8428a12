//! Display and window identities resolved from the window server.

use std::fmt;

use super::geometry::Rect;

/// OS-assigned display identifier (`CGDirectDisplayID`).
///
/// Stable across Space switches and sleep/wake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayId(pub u32);

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One physical display and its bounds in global coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Display {
    pub id: DisplayId,
    pub bounds: Rect,
    /// Display holding the menu bar (`CGMainDisplayID`).
    pub is_primary: bool,
}

/// Window server id of a window (`CGWindowID`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowNumber(pub u32);

impl fmt::Display for WindowNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A row of the on-screen window list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowEntry {
    pub number: WindowNumber,
    pub owner_pid: i32,
}
