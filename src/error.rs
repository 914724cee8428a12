//! Errors surfaced by the helpers.

/// Result type for helper operations.
pub type HelperResult<T> = Result<T, HelperError>;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum HelperError {
    #[error("AppKit must be accessed from the main thread")]
    NotOnMainThread,

    #[error("No frontmost application is available")]
    NoFrontmostApplication,

    #[error("The window server returned no window list")]
    WindowListUnavailable,

    #[error("No display is available")]
    NoDisplay,

    #[error("Failed to create mouse event at ({x}, {y})")]
    MouseEventUnavailable { x: f64, y: f64 },
}

impl HelperError {
    /// Stable machine-readable code, for log fields.
    pub fn error_code(&self) -> &'static str {
        match self {
            HelperError::NotOnMainThread => "NOT_ON_MAIN_THREAD",
            HelperError::NoFrontmostApplication => "NO_FRONTMOST_APPLICATION",
            HelperError::WindowListUnavailable => "WINDOW_LIST_UNAVAILABLE",
            HelperError::NoDisplay => "NO_DISPLAY",
            HelperError::MouseEventUnavailable { .. } => "MOUSE_EVENT_UNAVAILABLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_event_error_names_coordinates() {
        let err = HelperError::MouseEventUnavailable { x: 10.5, y: -3.0 };
        assert_eq!(err.to_string(), "Failed to create mouse event at (10.5, -3)");
        assert_eq!(err.error_code(), "MOUSE_EVENT_UNAVAILABLE");
    }

    #[test]
    fn frontmost_error_message() {
        assert_eq!(
            HelperError::NoFrontmostApplication.to_string(),
            "No frontmost application is available"
        );
    }
}
