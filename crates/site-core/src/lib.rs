//! Browser-independent interaction logic for the business-card site.
//!
//! Nothing here touches `web-sys`; each widget is a small state store plus a
//! pure render function, so the whole crate runs under host `cargo test`.

pub mod card;
pub mod config;
pub mod cycler;
pub mod lifecycle;
pub mod navbar;
pub mod reveal;

pub use card::*;
pub use config::*;
pub use cycler::*;
pub use lifecycle::Lifecycle;
pub use navbar::*;
pub use reveal::{ParseError, Reveal};
