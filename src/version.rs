//! About-label version text.

use tracing::debug;

use crate::model::{COPYRIGHT_NOTICE, PRODUCT_VERSION_PREFIX};

/// Lookup into the application bundle's info dictionary.
pub trait BundleInfo {
    /// `CFBundleShortVersionString`, `None` if missing or not a string.
    fn short_version(&self) -> Option<String>;
}

/// `"LG Switch V <version> Copyright 2022-2032 LG Electronics Inc."`
pub fn format_version(version: &str) -> String {
    format!("{PRODUCT_VERSION_PREFIX} {version} {COPYRIGHT_NOTICE}")
}

/// Formatted version text, or an empty string when the bundle has no
/// short version.
pub fn fetch_version_number<B: BundleInfo + ?Sized>(bundle: &B) -> String {
    match bundle.short_version() {
        Some(version) => format_version(&version),
        None => {
            debug!(event = "helper.version.missing");
            String::new()
        }
    }
}
