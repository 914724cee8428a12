//! Fake OS capabilities shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use switch_helper::model::{Display, DisplayId, Point, Rect, WindowEntry, WindowNumber};
use switch_helper::{
    BundleInfo, EventPoster, HelperError, HelperResult, MouseEventKind, PresentationHost,
    PresentationOptions, WindowServer,
};

// === Presentation ===

#[derive(Debug, Default)]
pub struct FakeApplication {
    pub options: PresentationOptions,
    pub writes: usize,
}

impl FakeApplication {
    pub fn with(options: PresentationOptions) -> Self {
        Self { options, writes: 0 }
    }
}

impl PresentationHost for FakeApplication {
    fn presentation_options(&self) -> PresentationOptions {
        self.options
    }

    fn set_presentation_options(&mut self, options: PresentationOptions) {
        self.options = options;
        self.writes += 1;
    }
}

// === Window server ===

pub fn display(id: u32, x: f64, y: f64, w: f64, h: f64, primary: bool) -> Display {
    Display {
        id: DisplayId(id),
        bounds: Rect::new(x, y, w, h),
        is_primary: primary,
    }
}

/// Built-in 1440x900 panel plus a 1920x1080 monitor to its right.
pub fn two_displays() -> Vec<Display> {
    vec![
        display(1, 0.0, 0.0, 1440.0, 900.0, true),
        display(2, 1440.0, 0.0, 1920.0, 1080.0, false),
    ]
}

#[derive(Debug, Default)]
pub struct FakeWindowServer {
    pub frontmost: Option<i32>,
    pub list_fails: bool,
    pub windows: Vec<WindowEntry>,
    pub bounds: HashMap<u32, Rect>,
    pub displays: Vec<Display>,
    pub bounds_queries: RefCell<Vec<u32>>,
}

impl FakeWindowServer {
    pub fn new(frontmost: i32, displays: Vec<Display>) -> Self {
        Self {
            frontmost: Some(frontmost),
            displays,
            ..Self::default()
        }
    }

    /// Register an on-screen window; `bounds = None` makes it unresolvable.
    pub fn window(mut self, number: u32, pid: i32, bounds: Option<Rect>) -> Self {
        self.windows.push(WindowEntry {
            number: WindowNumber(number),
            owner_pid: pid,
        });
        if let Some(b) = bounds {
            self.bounds.insert(number, b);
        }
        self
    }
}

impl WindowServer for FakeWindowServer {
    fn frontmost_pid(&self) -> HelperResult<i32> {
        self.frontmost.ok_or(HelperError::NoFrontmostApplication)
    }

    fn on_screen_windows(&self) -> HelperResult<Vec<WindowEntry>> {
        if self.list_fails {
            return Err(HelperError::WindowListUnavailable);
        }
        Ok(self.windows.clone())
    }

    fn window_bounds(&self, number: WindowNumber) -> Option<Rect> {
        self.bounds_queries.borrow_mut().push(number.0);
        self.bounds.get(&number.0).copied()
    }

    fn displays(&self) -> Vec<Display> {
        self.displays.clone()
    }

    fn primary_display(&self) -> Option<Display> {
        self.displays.iter().find(|d| d.is_primary).copied()
    }
}

// === Events ===

#[derive(Debug, Default)]
pub struct RecordingPoster {
    pub posted: RefCell<Vec<(MouseEventKind, Point)>>,
    pub fail_on: Option<MouseEventKind>,
}

impl EventPoster for RecordingPoster {
    fn post_mouse_event(&self, kind: MouseEventKind, location: Point) -> HelperResult<()> {
        if self.fail_on == Some(kind) {
            return Err(HelperError::MouseEventUnavailable {
                x: location.x,
                y: location.y,
            });
        }
        self.posted.borrow_mut().push((kind, location));
        Ok(())
    }
}

// === Bundle ===

#[derive(Debug, Default)]
pub struct FakeBundle {
    pub short_version: Option<String>,
}

impl FakeBundle {
    pub fn with_version(v: &str) -> Self {
        Self {
            short_version: Some(v.to_string()),
        }
    }
}

impl BundleInfo for FakeBundle {
    fn short_version(&self) -> Option<String> {
        self.short_version.clone()
    }
}
