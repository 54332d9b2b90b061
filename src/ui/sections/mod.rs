//! Landing page sections, in page order

mod demo;
mod faq;
mod features;
mod final_cta;
mod footer;
mod header;
mod hero;
mod pricing;
mod resources;
mod showcase;
mod testimonials;
mod trust_bar;

pub use demo::InteractiveDemo;
pub use faq::FaqSection;
pub use features::FeaturesSection;
pub use final_cta::FinalCta;
pub use footer::Footer;
pub use header::{Header, Logo};
pub use hero::HeroSection;
pub use pricing::PricingSection;
pub use resources::ResourcesSection;
pub use showcase::WhatYouCanCreate;
pub use testimonials::TestimonialsSection;
pub use trust_bar::TrustBar;
