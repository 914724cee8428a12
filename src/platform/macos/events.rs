//! Posting synthesized `NSEvent`s to the application's event queue.

use std::ptr;

use tracing::debug;

use crate::click::{EventPoster, MouseEventKind};
use crate::error::{HelperError, HelperResult};
use crate::model::{Point, CLICK_COUNT, CLICK_PRESSURE};

use super::ffi::bridge::{
    class, main_thread, msg_send, shared_application, AnyObject, NSEvent, NSPoint, Retained,
};

// NSEventType raw values
const NS_EVENT_TYPE_LEFT_MOUSE_DOWN: usize = 1;
const NS_EVENT_TYPE_LEFT_MOUSE_UP: usize = 2;

fn event_type(kind: MouseEventKind) -> usize {
    match kind {
        MouseEventKind::LeftMouseDown => NS_EVENT_TYPE_LEFT_MOUSE_DOWN,
        MouseEventKind::LeftMouseUp => NS_EVENT_TYPE_LEFT_MOUSE_UP,
    }
}

/// Posts mouse events with `-[NSApplication postEvent:atStart:YES]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AppKitEventPoster;

impl AppKitEventPoster {
    pub const fn new() -> Self {
        Self
    }
}

impl EventPoster for AppKitEventPoster {
    fn post_mouse_event(&self, kind: MouseEventKind, location: Point) -> HelperResult<()> {
        let mtm = main_thread()?;
        let app = shared_application(mtm);

        let point = NSPoint::new(location.x, location.y);
        let context: *mut AnyObject = ptr::null_mut();
        let event: Option<Retained<NSEvent>> = unsafe {
            msg_send![
                class!(NSEvent),
                mouseEventWithType: event_type(kind),
                location: point,
                modifierFlags: 0usize,
                timestamp: 0.0f64,
                windowNumber: 0isize,
                context: context,
                eventNumber: 0isize,
                clickCount: CLICK_COUNT,
                pressure: CLICK_PRESSURE
            ]
        };
        let event = event.ok_or(HelperError::MouseEventUnavailable {
            x: location.x,
            y: location.y,
        })?;

        let _: () = unsafe { msg_send![&*app, postEvent: &*event, atStart: true] };
        debug!(event = "helper.click.event_posted", kind = ?kind);
        Ok(())
    }
}
