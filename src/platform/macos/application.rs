//! `NSApplication.presentationOptions` as a [`PresentationHost`].

use crate::error::HelperResult;
use crate::model::PresentationOptions;
use crate::presentation::PresentationHost;

use super::ffi::bridge::{main_thread, msg_send, shared_application, NSApplication, Retained};

/// Presentation options of the shared application object.
///
/// Holds the main-thread-only `NSApplication`, so it cannot leave the main
/// thread once built.
pub struct AppKitPresentation {
    app: Retained<NSApplication>,
}

impl AppKitPresentation {
    /// # Errors
    ///
    /// `NotOnMainThread` when called off the main thread.
    pub fn new() -> HelperResult<Self> {
        let mtm = main_thread()?;
        Ok(Self {
            app: shared_application(mtm),
        })
    }
}

impl PresentationHost for AppKitPresentation {
    fn presentation_options(&self) -> PresentationOptions {
        // NSApplicationPresentationOptions is an NSUInteger bit set
        let bits: usize = unsafe { msg_send![&*self.app, presentationOptions] };
        PresentationOptions::from_bits(bits)
    }

    fn set_presentation_options(&mut self, options: PresentationOptions) {
        let bits = options.bits();
        let _: () = unsafe { msg_send![&*self.app, setPresentationOptions: bits] };
    }
}
