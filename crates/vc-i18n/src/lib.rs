#![forbid(unsafe_code)]

//! Internationalization for the VClasses landing site.
//!
//! Provides the two supported locales with their text direction, a
//! key-based string catalog with locale fallback and named placeholder
//! interpolation, and the embedded English/Arabic message bundles.
//!
//! # How it fits in the system
//! Every other crate that needs a direction or a translated string
//! depends on this one. It has no rendering or runtime dependencies, so
//! lookups stay deterministic and easy to test.
//!
//! # Degradation
//! Lookups never fail hard. [`StringCatalog::get`] returns `None` for a
//! missing key; [`Translator::t`] turns that into an empty string and a
//! `warn` log so a page still renders.

pub mod bundle;
pub mod catalog;
pub mod locale;
pub mod translator;

pub use bundle::{BundleError, bundled};
pub use catalog::{CoverageReport, LocaleCoverage, LocaleStrings, StringCatalog, interpolate};
pub use locale::{Direction, Locale};
pub use translator::Translator;
