use leptos::prelude::*;

/// Inline stroke icon. Colour follows `currentColor`, so text colour
/// classes apply.
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=icons::markup(name)
        ></svg>
    }
}

/// Icon names used on the page
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const BOOK_OPEN: &str = "book-open";
    pub const BOX: &str = "box";
    pub const BRIEFCASE: &str = "briefcase";
    pub const CHECK: &str = "check";
    pub const GITHUB: &str = "github";
    pub const LAYOUT_GRID: &str = "layout-grid";
    pub const LINKEDIN: &str = "linkedin";
    pub const MENU: &str = "menu";
    pub const MONITOR: &str = "monitor";
    pub const PLAY: &str = "play";
    pub const PLUS: &str = "plus";
    pub const ROCKET: &str = "rocket";
    pub const SERVER: &str = "server";
    pub const SHOPPING_CART: &str = "shopping-cart";
    pub const SMARTPHONE: &str = "smartphone";
    pub const SPARKLES: &str = "sparkles";
    pub const STAR: &str = "star";
    pub const TWITTER: &str = "twitter";
    pub const USERS: &str = "users";
    pub const X: &str = "x";
    pub const ZAP: &str = "zap";

    /// SVG body for `name`. Unknown names render a small circle so a typo
    /// shows up visually instead of collapsing the layout.
    pub fn markup(name: &str) -> &'static str {
        match name {
            ARROW_RIGHT => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            BOOK_OPEN => {
                r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/><path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>"#
            }
            BOX => {
                r#"<path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z"/><path d="m3.3 7 8.7 5 8.7-5"/><path d="M12 22V12"/>"#
            }
            BRIEFCASE => {
                r#"<rect width="20" height="14" x="2" y="7" rx="2"/><path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#
            }
            CHECK => r#"<path d="M20 6 9 17l-5-5"/>"#,
            GITHUB => {
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
            }
            LAYOUT_GRID => {
                r#"<rect width="7" height="7" x="3" y="3" rx="1"/><rect width="7" height="7" x="14" y="3" rx="1"/><rect width="7" height="7" x="14" y="14" rx="1"/><rect width="7" height="7" x="3" y="14" rx="1"/>"#
            }
            LINKEDIN => {
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#
            }
            MENU => r#"<path d="M4 6h16"/><path d="M4 12h16"/><path d="M4 18h16"/>"#,
            MONITOR => {
                r#"<rect width="20" height="14" x="2" y="3" rx="2"/><path d="M8 21h8"/><path d="M12 17v4"/>"#
            }
            PLAY => r#"<path d="m6 3 14 9-14 9z"/>"#,
            PLUS => r#"<path d="M5 12h14"/><path d="M12 5v14"/>"#,
            ROCKET => {
                r#"<path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z"/><path d="m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z"/><path d="M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0"/><path d="M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"/>"#
            }
            SERVER => {
                r#"<rect width="20" height="8" x="2" y="2" rx="2"/><rect width="20" height="8" x="2" y="14" rx="2"/><path d="M6 6h.01"/><path d="M6 18h.01"/>"#
            }
            SHOPPING_CART => {
                r#"<circle cx="8" cy="21" r="1"/><circle cx="19" cy="21" r="1"/><path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"/>"#
            }
            SMARTPHONE => {
                r#"<rect width="14" height="20" x="5" y="2" rx="2"/><path d="M12 18h.01"/>"#
            }
            SPARKLES => {
                r#"<path d="M9.94 14.06 8 20l-1.94-5.94L0 12l6.06-1.94L8 4l1.94 6.06L16 12z" transform="translate(2 0) scale(0.9)"/><path d="M20 3v4"/><path d="M22 5h-4"/>"#
            }
            STAR => {
                r#"<path d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z"/>"#
            }
            TWITTER => {
                r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#
            }
            USERS => {
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#
            }
            X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            ZAP => r#"<path d="M13 2 3 14h9l-1 8 10-12h-9z"/>"#,
            _ => r#"<circle cx="12" cy="12" r="4"/>"#,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::icons;

    #[test]
    fn test_content_icons_are_known() {
        use crate::core::{CREATE_ITEMS, FEATURES, RESOURCES, SOCIAL_LINKS};

        let fallback = icons::markup("definitely-not-an-icon");
        let names = CREATE_ITEMS
            .iter()
            .chain(FEATURES)
            .map(|card| card.icon)
            .chain(RESOURCES.iter().map(|r| r.card.icon))
            .chain(SOCIAL_LINKS.iter().copied());

        for name in names {
            assert_ne!(icons::markup(name), fallback, "missing icon {name}");
        }
    }
}
