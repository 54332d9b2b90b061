//! Landing page component
//!
//! The Webly AI marketing page, rendered top to bottom in a fixed order:
//! - SEO meta tags and JSON-LD structured data
//! - Header with in-page navigation
//! - Hero, trust bar with animated counters, "create anything" grid
//! - Feature bento grid and the interactive generation demo
//! - Resources, pricing with billing switch, testimonials
//! - FAQ accordion, final call-to-action and footer

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::seo::{SITE_DESCRIPTION, SITE_TITLE, SiteUrl, structured_data};
use crate::ui::sections::{
    FaqSection, FeaturesSection, FinalCta, Footer, Header, HeroSection, InteractiveDemo,
    PricingSection, ResourcesSection, TestimonialsSection, TrustBar, WhatYouCanCreate,
};

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen bg-[#0F1212] mobile-safe-container overflow-x-hidden">
            <div class="grain-overlay" aria-hidden="true"></div>
            <Header />
            <main>
                <HeroSection />
                <TrustBar />
                <WhatYouCanCreate />
                <FeaturesSection />
                <InteractiveDemo />
                <ResourcesSection />
                <PricingSection />
                <TestimonialsSection />
                <FaqSection />
                <FinalCta />
            </main>
            <Footer />

            // CSS animations
            <LandingStyles />
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    // Provided by the server from SITE_URL; the client falls back to the default
    let site = use_context::<SiteUrl>().unwrap_or_default();
    let canonical = site.canonical();
    let og_image = site.og_image();
    let json_ld = structured_data(&site);

    view! {
        <Title text=SITE_TITLE />

        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta name="keywords" content="конструктор сайтов, AI, создание сайтов, лендинг, без кода, нейросеть" />
        <Meta name="theme-color" content="#0F1212" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=canonical.clone() />
        <Meta property="og:title" content=SITE_TITLE />
        <Meta property="og:description" content=SITE_DESCRIPTION />
        <Meta property="og:image" content=og_image.clone() />
        <Meta property="og:locale" content="ru_RU" />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=SITE_TITLE />
        <Meta name="twitter:description" content=SITE_DESCRIPTION />
        <Meta name="twitter:image" content=og_image />

        <Link rel="canonical" href=canonical />

        <script type="application/ld+json" inner_html=json_ld></script>
    }
}

/// CSS for the page's custom animations; layout and colours come from Tailwind
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html { scroll-behavior: smooth; }

            .mobile-safe-container {
                padding-left: env(safe-area-inset-left);
                padding-right: env(safe-area-inset-right);
            }

            /* Film grain over the whole page */
            .grain-overlay {
                position: fixed;
                inset: 0;
                z-index: 60;
                pointer-events: none;
                opacity: 0.04;
                background-image: url("data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='160' height='160'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.8' numOctaves='3'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23n)'/%3E%3C/svg%3E");
            }

            .gradient-mesh {
                background:
                    radial-gradient(at 20% 30%, rgba(37, 63, 246, 0.35) 0, transparent 50%),
                    radial-gradient(at 80% 20%, rgba(225, 255, 1, 0.12) 0, transparent 45%),
                    radial-gradient(at 50% 80%, rgba(37, 63, 246, 0.25) 0, transparent 50%),
                    #0F1212;
            }

            @keyframes landing-gradient {
                0%, 100% { background-position: 0% 50%; }
                50% { background-position: 100% 50%; }
            }
            .animate-gradient { animation: landing-gradient 15s ease infinite; }

            @keyframes landing-float {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-12px); }
            }
            .animate-float { animation: landing-float 6s ease-in-out infinite; }
            .animate-float-delayed { animation: landing-float 6s ease-in-out 3s infinite; }

            @keyframes landing-drift {
                0%, 100% { transform: translateY(0) scale(1); }
                50% { transform: translateY(-30px) scale(1.1); }
            }
            @keyframes landing-drift-reverse {
                0%, 100% { transform: translateY(0) scale(1); }
                50% { transform: translateY(20px) scale(0.9); }
            }
            .animate-drift { animation: landing-drift 8s ease-in-out infinite; }
            .animate-drift-slow { animation: landing-drift-reverse 10s ease-in-out 2s infinite; }

            /* Entrance animations */
            @keyframes landing-fade-in-up {
                from { opacity: 0; transform: translateY(30px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .landing-fade-in-up { animation: landing-fade-in-up 0.8s ease-out both; }
            .landing-delay-500 { animation-delay: 0.5s; }

            @keyframes landing-slide-in-right {
                from { opacity: 0; translate: 50px 0; }
                to { opacity: 1; translate: 0 0; }
            }
            @keyframes landing-slide-in-left {
                from { opacity: 0; translate: -50px 0; }
                to { opacity: 1; translate: 0 0; }
            }
            .landing-slide-in-right { animation: landing-slide-in-right 0.8s ease-out 1s both, landing-float 6s ease-in-out infinite; }
            .landing-slide-in-left { animation: landing-slide-in-left 0.8s ease-out 1.3s both, landing-float 6s ease-in-out 3s infinite; }

            @keyframes landing-fade-in {
                from { opacity: 0; }
                to { opacity: 1; }
            }
            .landing-fade-in { animation: landing-fade-in 0.3s ease-out both; }

            @keyframes landing-pop-in {
                from { opacity: 0; transform: scale(0.9); }
                to { opacity: 1; transform: scale(1); }
            }
            .landing-pop-in { animation: landing-pop-in 0.4s ease-out both; }

            .landing-press { transition: transform 0.2s ease, background-color 0.2s ease, border-color 0.2s ease; }
            .landing-press:hover { transform: scale(1.05); }
            .landing-press:active { transform: scale(0.95); }

            /* Scroll reveal, toggled by FadeInUp */
            .reveal {
                opacity: 0;
                transform: translateY(40px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .reveal.visible {
                opacity: 1;
                transform: translateY(0);
            }

            @media (prefers-reduced-motion: reduce) {
                .reveal { opacity: 1; transform: none; transition: none; }
                .animate-gradient, .animate-float, .animate-float-delayed,
                .animate-drift, .animate-drift-slow { animation: none; }
            }
            "#
        </style>
    }
}
