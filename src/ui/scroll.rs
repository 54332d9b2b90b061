//! Smooth scrolling to in-page anchors

/// Smoothly scroll the element with id `anchor` into view.
///
/// A missing element only logs a warning.
pub fn scroll_to_anchor(anchor: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(anchor))
        else {
            leptos::logging::warn!("No section with id {anchor:?}");
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(feature = "ssr")]
    {
        let _ = anchor;
    }
}

/// Current vertical scroll offset of the window, 0 when unavailable.
pub fn window_scroll_offset() -> f64 {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(feature = "ssr")]
    {
        0.0
    }
}
