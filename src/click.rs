//! Synthetic left click.

use tracing::debug;

use crate::error::HelperResult;
use crate::model::Point;

/// Mouse events the helpers synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    LeftMouseDown,
    LeftMouseUp,
}

/// Injects events at the head of the application's event queue.
pub trait EventPoster {
    fn post_mouse_event(&self, kind: MouseEventKind, location: Point) -> HelperResult<()>;
}

/// Post a left press followed by a left release at `(x, y)`.
///
/// Fire-and-forget: delivery is not verified. If the press cannot be built,
/// the release is not posted.
pub fn perform_click<P: EventPoster + ?Sized>(poster: &P, x: f64, y: f64) -> HelperResult<()> {
    let location = Point::new(x, y);
    poster.post_mouse_event(MouseEventKind::LeftMouseDown, location)?;
    poster.post_mouse_event(MouseEventKind::LeftMouseUp, location)?;
    debug!(event = "helper.click.posted", x = x, y = y);
    Ok(())
}
