//! Dock and menu-bar auto-hide.
//!
//! The OS application object owns the presentation options; this module only
//! reads and writes them through [`PresentationHost`], so the rules below can
//! be exercised against a fake.

use tracing::debug;

use crate::model::PresentationOptions;

/// Read/write access to the application's presentation options.
pub trait PresentationHost {
    fn presentation_options(&self) -> PresentationOptions;

    fn set_presentation_options(&mut self, options: PresentationOptions);
}

/// True when the menu bar is set to auto-hide. The dock flag is ignored.
pub fn is_hidden<H: PresentationHost + ?Sized>(host: &H) -> bool {
    host.presentation_options()
        .contains(PresentationOptions::AUTO_HIDE_MENU_BAR)
}

/// Flip between "dock and menu bar auto-hidden" and "nothing hidden".
pub fn toggle<H: PresentationHost + ?Sized>(host: &mut H) {
    let next = if is_hidden(host) {
        PresentationOptions::NONE
    } else {
        PresentationOptions::AUTO_HIDE_DOCK | PresentationOptions::AUTO_HIDE_MENU_BAR
    };
    apply(host, next, "helper.presentation.toggle");
}

/// Auto-hide the dock only.
///
/// Unlike the hiding branch of [`toggle`], the menu bar flag is not set.
pub fn hide<H: PresentationHost + ?Sized>(host: &mut H) {
    apply(
        host,
        PresentationOptions::AUTO_HIDE_DOCK,
        "helper.presentation.hide",
    );
}

/// Clear every auto-hide flag.
pub fn unhide<H: PresentationHost + ?Sized>(host: &mut H) {
    apply(host, PresentationOptions::NONE, "helper.presentation.unhide");
}

fn apply<H: PresentationHost + ?Sized>(host: &mut H, next: PresentationOptions, event: &str) {
    let previous = host.presentation_options();
    host.set_presentation_options(next);
    debug!(
        event,
        previous = %previous,
        next = %next,
        "presentation options updated"
    );
}
