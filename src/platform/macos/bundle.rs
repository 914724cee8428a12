//! Info dictionary lookups on `NSBundle.mainBundle`.

use crate::model::INFO_KEY_SHORT_VERSION;
use crate::version::BundleInfo;

use super::ffi::bridge::{class, msg_send, nsstring, AnyObject, NSString, Retained};

/// The running application's main bundle.
#[derive(Debug, Default, Clone, Copy)]
pub struct MainBundle;

impl MainBundle {
    pub const fn new() -> Self {
        Self
    }

    /// String value for `key`, `None` if absent or of another type.
    pub fn info_string(&self, key: &str) -> Option<String> {
        let bundle: Option<Retained<AnyObject>> =
            unsafe { msg_send![class!(NSBundle), mainBundle] };
        let bundle = bundle?;

        let key = nsstring(key);
        let value: Option<Retained<AnyObject>> =
            unsafe { msg_send![&*bundle, objectForInfoDictionaryKey: &*key] };

        value?
            .downcast_ref::<NSString>()
            .map(|s| s.to_string())
    }
}

impl BundleInfo for MainBundle {
    fn short_version(&self) -> Option<String> {
        self.info_string(INFO_KEY_SHORT_VERSION)
    }
}
