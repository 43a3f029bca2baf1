use tracing::{info, warn};

/// Locale used when the configured one has no translations
pub const FALLBACK_LOCALE: &str = "en";

/// Switch the locale for page strings, falling back to English when the
/// requested locale is unknown
pub fn set_locale(locale: &str) {
    let available = rust_i18n::available_locales!();
    if available.iter().any(|l| *l == locale) {
        rust_i18n::set_locale(locale);
        info!("Setting locale to {}", locale);
    } else {
        warn!(
            "Unknown locale {}, falling back to {} (available: {:?})",
            locale, FALLBACK_LOCALE, available
        );
        rust_i18n::set_locale(FALLBACK_LOCALE);
    }
}
