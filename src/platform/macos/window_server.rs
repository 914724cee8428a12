//! Live [`WindowServer`] backed by NSWorkspace and Quartz.

use tracing::debug;

use crate::error::{HelperError, HelperResult};
use crate::model::{Display, Rect, WindowEntry, WindowNumber};
use crate::screen::WindowServer;

use super::ffi::bridge::{class, msg_send, AnyObject, Retained};
use super::ffi::coregraphics::{
    active_displays, main_display, on_screen_window_list, window_bounds as row_bounds,
    window_entry, window_info,
};

/// Stateless handle on the system window server.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuartzWindowServer;

impl QuartzWindowServer {
    pub const fn new() -> Self {
        Self
    }
}

impl WindowServer for QuartzWindowServer {
    fn frontmost_pid(&self) -> HelperResult<i32> {
        let workspace: Option<Retained<AnyObject>> =
            unsafe { msg_send![class!(NSWorkspace), sharedWorkspace] };
        let workspace = workspace.ok_or(HelperError::NoFrontmostApplication)?;

        let app: Option<Retained<AnyObject>> =
            unsafe { msg_send![&*workspace, frontmostApplication] };
        let app = app.ok_or(HelperError::NoFrontmostApplication)?;

        let pid: i32 = unsafe { msg_send![&*app, processIdentifier] };
        // -1 when the process has no pid (not launched from a bundle)
        if pid <= 0 {
            return Err(HelperError::NoFrontmostApplication);
        }
        Ok(pid)
    }

    fn on_screen_windows(&self) -> HelperResult<Vec<WindowEntry>> {
        let list = on_screen_window_list().ok_or(HelperError::WindowListUnavailable)?;
        let entries: Vec<WindowEntry> = list.iter().filter_map(|row| window_entry(&row)).collect();
        debug!(
            event = "helper.screen.window_list",
            rows = list.len(),
            entries = entries.len()
        );
        Ok(entries)
    }

    fn window_bounds(&self, number: WindowNumber) -> Option<Rect> {
        window_info(number).and_then(|row| row_bounds(&row))
    }

    fn displays(&self) -> Vec<Display> {
        active_displays()
    }

    fn primary_display(&self) -> Option<Display> {
        main_display()
    }
}
