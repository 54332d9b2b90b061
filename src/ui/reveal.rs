//! Scroll-triggered fade-in wrapper
//!
//! Elements start hidden (`.reveal`) and receive `.visible` the first time
//! they intersect the viewport. The transition itself lives in CSS, see
//! `LandingStyles`.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::{Reveal, RevealOptions};

/// Fade children in and up the first time they scroll into view
#[component]
pub fn FadeInUp(
    children: Children,
    /// Transition delay, used to stagger grid items
    #[prop(default = 0)]
    delay_ms: u32,
    /// Extra classes for the wrapper element
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let options = RevealOptions::with_delay(delay_ms);
    let reveal = RwSignal::new(Reveal::default());
    let node_ref = NodeRef::<Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        let observer = StoredValue::new_local(None::<VisibilityObserver>);

        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };
            let mark_visible = move || {
                reveal.try_update(|r| {
                    r.observe(true);
                });
            };
            match on_first_visible(&element, &options.root_margin(), mark_visible) {
                Some(handle) => observer.set_value(Some(handle)),
                // Without an observer the content must not stay hidden
                None => mark_visible(),
            }
        });

        on_cleanup(move || observer.dispose());
    }

    view! {
        <div
            node_ref=node_ref
            class=format!("reveal {class}")
            class=("visible", move || reveal.get().is_visible())
            style=options.transition_style()
        >
            {children()}
        </div>
    }
}

/// Live IntersectionObserver together with the JS callback it invokes.
///
/// Dropping it disconnects the observer before the callback is freed.
#[cfg(not(feature = "ssr"))]
pub(crate) struct VisibilityObserver {
    observer: web_sys::IntersectionObserver,
    _callback: wasm_bindgen::closure::Closure<
        dyn FnMut(js_sys::Array, web_sys::IntersectionObserver),
    >,
}

#[cfg(not(feature = "ssr"))]
impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Run `on_visible` once, the first time `element` intersects the viewport
/// shrunk by `root_margin`. Returns `None` if no observer could be created.
/// The observer stays active for as long as the returned handle lives.
#[cfg(not(feature = "ssr"))]
pub(crate) fn on_first_visible(
    element: &web_sys::Element,
    root_margin: &str,
    on_visible: impl FnOnce() + 'static,
) -> Option<VisibilityObserver> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let mut on_visible = Some(on_visible);
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<web_sys::IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if intersecting {
                observer.disconnect();
                if let Some(on_visible) = on_visible.take() {
                    on_visible();
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_root_margin(root_margin);

    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
    {
        Ok(observer) => {
            observer.observe(element);
            Some(VisibilityObserver {
                observer,
                _callback: callback,
            })
        }
        Err(err) => {
            leptos::logging::warn!("IntersectionObserver unavailable: {:?}", err);
            None
        }
    }
}
