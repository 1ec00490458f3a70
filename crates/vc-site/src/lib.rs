#![forbid(unsafe_code)]

//! Static renderer for the VClasses landing site.
//!
//! Each enabled locale is rendered to `<out>/<locale>/index.html` from the
//! bundled message catalog, with carousel first-paint state from
//! `vc-carousel`, entrance animations from `vc-motion` as `data-motion-*`
//! attributes and class lists from `vc-style`.

pub mod build;
pub mod check;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod html;
pub mod page;
pub mod routing;
pub mod sections;
pub mod util;

pub use cli::run_from_env;
pub use error::{Result, SiteError};
pub use page::Site;
