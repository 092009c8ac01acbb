//! Wall-clock milliseconds for minting user ids.

/// Milliseconds since the Unix epoch.
///
/// Uses `Date.now()` in the browser, where `SystemTime` is unavailable.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}
