//! Page state machines and static content, shared by the server and the
//! hydrated client

mod accordion;
#[cfg(feature = "ssr")]
pub mod config;
mod content;
mod count_up;
mod demo;
#[cfg(feature = "ssr")]
pub mod error;
mod navigation;
mod pricing;
pub mod reveal;
pub mod seo;
#[cfg(test)]
mod tests;

pub use accordion::*;
pub use content::*;
pub use count_up::*;
pub use demo::*;
pub use navigation::*;
pub use pricing::*;
pub use reveal::{Reveal, RevealOptions};
