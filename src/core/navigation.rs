//! In-page navigation links and header scroll behaviour.

/// Scroll offset past which the header gets its solid background.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Element id of the target section, without the leading `#`.
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Возможности",
        anchor: "features",
    },
    NavLink {
        label: "Демо",
        anchor: "demo",
    },
    NavLink {
        label: "Тарифы",
        anchor: "pricing",
    },
    NavLink {
        label: "FAQ",
        anchor: "faq",
    },
];

/// Whether the header switches to its solid, blurred style.
pub fn is_scrolled(offset_px: f64) -> bool {
    offset_px > SCROLL_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href() {
        assert_eq!(NAV_LINKS[0].href(), "#features");
        assert_eq!(NAV_LINKS[3].href(), "#faq");
    }

    #[test]
    fn test_anchor_order() {
        let anchors: Vec<_> = NAV_LINKS.iter().map(|l| l.anchor).collect();
        assert_eq!(anchors, ["features", "demo", "pricing", "faq"]);
    }
}
