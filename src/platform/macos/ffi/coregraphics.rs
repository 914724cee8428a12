//! Quartz Window Services and display bindings.
//!
//! Wraps `CGWindowListCopyWindowInfo` rows into typed values and reads
//! display geometry through `CGDisplay`.

use std::ffi::c_void;

use core_foundation::array::CFArray;
use core_foundation::base::{CFType, TCFType};
use core_foundation::dictionary::CFDictionary;
use core_foundation::number::CFNumber;
use core_foundation::string::CFString;
use core_graphics::display::CGDisplay;
use core_graphics::geometry::CGRect;
use core_graphics::window::{
    kCGNullWindowID, kCGWindowListExcludeDesktopElements, kCGWindowListOptionIncludingWindow,
    kCGWindowListOptionOnScreenOnly, CGWindowID, CGWindowListCopyWindowInfo, CGWindowListOption,
};

use crate::model::{
    Display, DisplayId, Rect, WindowEntry, WindowNumber, WINDOW_KEY_BOUNDS, WINDOW_KEY_NUMBER,
    WINDOW_KEY_OWNER_PID,
};

// === FFI Declarations - CoreGraphics ===

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    fn CGRectMakeWithDictionaryRepresentation(dict: *const c_void, rect: *mut CGRect) -> bool;
}

/// A window-list row as returned by Quartz.
pub type WindowInfo = CFDictionary<CFString, CFType>;

/// Copy the window list for `option`, `None` if Quartz returned NULL.
pub fn copy_window_list(
    option: CGWindowListOption,
    relative_to: CGWindowID,
) -> Option<CFArray<WindowInfo>> {
    let list = unsafe { CGWindowListCopyWindowInfo(option, relative_to) };
    if list.is_null() {
        return None;
    }
    // SAFETY: non-null and returned by a Copy function, so we own it
    Some(unsafe { CFArray::wrap_under_create_rule(list) })
}

/// On-screen windows, desktop elements excluded, front to back.
pub fn on_screen_window_list() -> Option<CFArray<WindowInfo>> {
    copy_window_list(
        kCGWindowListOptionOnScreenOnly | kCGWindowListExcludeDesktopElements,
        kCGNullWindowID,
    )
}

/// Row for a single window id.
pub fn window_info(number: WindowNumber) -> Option<WindowInfo> {
    let list = copy_window_list(kCGWindowListOptionIncludingWindow, number.0)?;
    let row = list.iter().next().map(|row| (*row).clone());
    row
}

fn number_value(dict: &WindowInfo, key: &str) -> Option<i64> {
    let key_cf = CFString::new(key);
    dict.find(&key_cf)
        .and_then(|value| value.downcast::<CFNumber>())
        .and_then(|num| num.to_i64())
}

/// Window id and owner pid of a row. Rows missing either, or carrying a
/// non-positive pid, are dropped.
pub fn window_entry(dict: &WindowInfo) -> Option<WindowEntry> {
    let number = u32::try_from(number_value(dict, WINDOW_KEY_NUMBER)?).ok()?;
    let owner_pid = i32::try_from(number_value(dict, WINDOW_KEY_OWNER_PID)?)
        .ok()
        .filter(|pid| *pid > 0)?;
    Some(WindowEntry {
        number: WindowNumber(number),
        owner_pid,
    })
}

/// `kCGWindowBounds` of a row, in global Quartz coordinates.
pub fn window_bounds(dict: &WindowInfo) -> Option<Rect> {
    let key_cf = CFString::new(WINDOW_KEY_BOUNDS);
    let value = dict.find(&key_cf)?;

    let mut rect = CGRect::default();
    let ok = unsafe {
        CGRectMakeWithDictionaryRepresentation(value.as_CFTypeRef(), &mut rect as *mut CGRect)
    };
    ok.then(|| rect_from_cg(&rect))
}

pub fn rect_from_cg(rect: &CGRect) -> Rect {
    Rect::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)
}

/// Active displays with their bounds.
///
/// An error from `CGGetActiveDisplayList` yields an empty list.
pub fn active_displays() -> Vec<Display> {
    let main_id = CGDisplay::main().id;
    CGDisplay::active_displays()
        .map(|ids| {
            ids.into_iter()
                .map(|id| display_for_id(id, main_id))
                .collect()
        })
        .unwrap_or_default()
}

/// The display holding the menu bar, `None` when Quartz reports
/// `kCGNullDirectDisplay` (no display attached).
pub fn main_display() -> Option<Display> {
    let main_id = CGDisplay::main().id;
    (main_id != 0).then(|| display_for_id(main_id, main_id))
}

fn display_for_id(id: u32, main_id: u32) -> Display {
    Display {
        id: DisplayId(id),
        bounds: rect_from_cg(&CGDisplay::new(id).bounds()),
        is_primary: id == main_id,
    }
}
