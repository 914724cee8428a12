//! Which display holds the focused application's window.
//!
//! # Algorithm
//!
//! ```text
//! frontmost pid → on-screen windows → owned by pid → bounds → first display hit
//!                                                         ↘ otherwise primary display
//! ```
//!
//! Windows whose bounds cannot be resolved are skipped. A failed window list
//! degrades to the primary display instead of failing the call.

use tracing::{debug, warn};

use crate::error::{HelperError, HelperResult};
use crate::model::{window_belongs_to_display, Display, Rect, WindowEntry, WindowNumber};

/// Read-only view of the window server.
pub trait WindowServer {
    /// Process id of the application that owns keyboard focus.
    fn frontmost_pid(&self) -> HelperResult<i32>;

    /// On-screen windows without desktop elements, front to back.
    fn on_screen_windows(&self) -> HelperResult<Vec<WindowEntry>>;

    /// Current bounds of one window, `None` if it can no longer be resolved.
    fn window_bounds(&self, number: WindowNumber) -> Option<Rect>;

    /// Active displays in window-server order.
    fn displays(&self) -> Vec<Display>;

    fn primary_display(&self) -> Option<Display>;
}

/// Resolve the display that shows the frontmost application's window.
///
/// # Errors
///
/// `NoFrontmostApplication` when focus cannot be attributed to a process,
/// `NoDisplay` when nothing matched and no primary display exists.
pub fn find_screen_for_active_window<S: WindowServer + ?Sized>(
    server: &S,
) -> HelperResult<Display> {
    let pid = server.frontmost_pid()?;

    let windows = server.on_screen_windows().unwrap_or_else(|err| {
        warn!(
            event = "helper.screen.window_list_failed",
            error = %err,
            error_code = err.error_code()
        );
        Vec::new()
    });

    if let Some(display) = match_display(server, &windows, pid) {
        return Ok(display);
    }

    debug!(event = "helper.screen.fallback_primary", pid = pid);
    server.primary_display().ok_or(HelperError::NoDisplay)
}

fn match_display<S: WindowServer + ?Sized>(
    server: &S,
    windows: &[WindowEntry],
    pid: i32,
) -> Option<Display> {
    let displays = server.displays();

    for entry in windows.iter().filter(|w| w.owner_pid == pid) {
        let Some(bounds) = server.window_bounds(entry.number) else {
            debug!(
                event = "helper.screen.window_skipped",
                window = %entry.number
            );
            continue;
        };

        if let Some(matched) = displays
            .iter()
            .find(|d| window_belongs_to_display(&bounds, &d.bounds))
        {
            debug!(
                event = "helper.screen.matched",
                window = %entry.number,
                display = %matched.id
            );
            return Some(*matched);
        }
    }

    None
}
