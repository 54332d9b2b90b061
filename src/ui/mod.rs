pub mod count_up;
pub mod icon;
pub mod pages;
pub mod reveal;
pub mod scroll;
pub mod sections;

pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage};
pub use reveal::FadeInUp;
