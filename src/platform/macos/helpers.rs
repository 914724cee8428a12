//! Stateless entry points for the app's menu actions, shortcuts and labels.
//!
//! Each function builds the live capability it needs and runs the shared
//! logic from the crate root. AppKit-backed calls must run on the main
//! thread.

use crate::click;
use crate::error::HelperResult;
use crate::model::Display;
use crate::presentation;
use crate::screen;
use crate::version;

use super::application::AppKitPresentation;
use super::bundle::MainBundle;
use super::events::AppKitEventPoster;
use super::ffi::bridge::autoreleasepool;
use super::window_server::QuartzWindowServer;

/// True when the menu bar is set to auto-hide.
pub fn is_dock_and_menu_bar_hidden() -> HelperResult<bool> {
    let host = AppKitPresentation::new()?;
    Ok(presentation::is_hidden(&host))
}

/// Auto-hide dock and menu bar, or show both when already hidden.
pub fn toggle_menu_and_dock() -> HelperResult<()> {
    let mut host = AppKitPresentation::new()?;
    presentation::toggle(&mut host);
    Ok(())
}

/// Auto-hide the dock.
pub fn hide_menu_and_dock() -> HelperResult<()> {
    let mut host = AppKitPresentation::new()?;
    presentation::hide(&mut host);
    Ok(())
}

/// Clear every auto-hide option.
pub fn unhide_menu_and_dock() -> HelperResult<()> {
    let mut host = AppKitPresentation::new()?;
    presentation::unhide(&mut host);
    Ok(())
}

/// Display showing the frontmost application's window, primary display
/// when no window matches.
pub fn find_screen_for_active_window() -> HelperResult<Display> {
    autoreleasepool(|_| screen::find_screen_for_active_window(&QuartzWindowServer::new()))
}

/// Left click at `(x, y)`, read by AppKit as screen coordinates since the
/// events carry no window number.
pub fn perform_mouse_click(x: f64, y: f64) -> HelperResult<()> {
    click::perform_click(&AppKitEventPoster::new(), x, y)
}

/// About-label text, empty when the bundle has no short version.
pub fn fetch_version_number() -> String {
    autoreleasepool(|_| version::fetch_version_number(&MainBundle::new()))
}
