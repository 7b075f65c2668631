//! Internationalization (i18n) support for `keyscore-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   pt-BR/keyscore-ui.ftl   (fallback/reference)
//!   en-US/keyscore-ui.ftl   (additional locale)
//! ```
//!
//! Launchers call `i18n::init()` once at app start; components only look
//! strings up:
//! ```ignore
//! use crate::t;
//! let title = t!("admin-title");
//! ```
//!
//! Tests call `init_fallback()` instead so output never depends on the
//! machine's locale.
//!
//! Public API surface:
//! - `init()` – load bundles for the user's requested languages (idempotent).
//! - `init_fallback()` – load only the fallback bundle (idempotent).
//! - `set_language(tag: &str)` – switch language at runtime.
//! - `current_language()` – tag the loader is serving right now.
//! - `available_languages()` – discover embedded language tags (for a picker).
//! - `fl` macro re-export and the `t!` wrapper.
//! - `LOADER` – global `FluentLanguageLoader` consumed by `t!`.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("admin-title")
///     t!("admin-count", count = 3)
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "keyscore-ui";

/// Locale the dashboard is written in; every other locale is checked against it.
pub const FALLBACK_LANGUAGE: &str = "pt-BR";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    FluentLanguageLoader::new(DOMAIN, fallback_language())
});

static INIT: Once = Once::new();

fn fallback_language() -> LanguageIdentifier {
    FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier")
}

/// Initialize i18n from the user's requested languages (idempotent).
pub fn init() {
    init_with(requested_languages);
}

/// Initialize i18n with the fallback locale only (idempotent).
pub fn init_fallback() {
    init_with(|| vec![fallback_language()]);
}

fn init_with(requested: impl FnOnce() -> Vec<LanguageIdentifier>) {
    INIT.call_once(|| {
        let requested = requested();
        if let Err(err) = select(&requested) {
            tracing::warn!(error = %err, "failed selecting languages; continuing with fallback");
        }
    });
}

fn select(languages: &[LanguageIdentifier]) -> Result<(), I18nEmbedError> {
    i18n_embed::select(&*LOADER, &Localizations, languages)?;
    // Bundles are rebuilt on every selection, so isolation has to be turned off again.
    LOADER.set_use_isolating(false);
    Ok(())
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    select(&[lang])
}

/// Tag of the language the loader currently serves first; the fallback
/// before any selection has happened.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
