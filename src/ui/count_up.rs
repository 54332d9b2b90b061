use leptos::html::Div;
use leptos::prelude::*;

use crate::core::format_grouped;
#[cfg(not(feature = "ssr"))]
use crate::core::CountUp;

/// Number that counts up from zero once it scrolls into view.
///
/// Frames are driven by `requestAnimationFrame` and sampled against
/// `performance.now()`, so slow frames skip ahead instead of slowing down.
#[component]
pub fn CountUpNumber(
    target: u32,
    duration_ms: u32,
    /// Appended after the formatted number
    #[prop(default = "")]
    suffix: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let value = RwSignal::new(0u32);
    let node_ref = NodeRef::<Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::reveal::{VisibilityObserver, on_first_visible};

        let counter = RwSignal::new(CountUp::new(target, duration_ms));
        let observer = StoredValue::new_local(None::<VisibilityObserver>);

        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };
            match on_first_visible(&element, "0px", move || start(counter, value)) {
                Some(handle) => observer.set_value(Some(handle)),
                None => value.set(target),
            }
        });

        on_cleanup(move || observer.dispose());
    }
    #[cfg(feature = "ssr")]
    let _ = (target, duration_ms);

    view! {
        <div node_ref=node_ref class=class>
            {move || format_grouped(value.get())}
            {suffix}
        </div>
    }
}

#[cfg(not(feature = "ssr"))]
fn now_ms() -> Option<f64> {
    web_sys::window()?.performance().map(|p| p.now())
}

#[cfg(not(feature = "ssr"))]
fn start(counter: RwSignal<CountUp>, value: RwSignal<u32>) {
    let Some(now) = now_ms() else {
        // No clock to animate against; jump straight to the end
        if let Some(target) = counter.try_with_untracked(|c| c.target()) {
            value.set(target);
        }
        return;
    };
    if counter.try_update(|c| c.start(now)).unwrap_or(false) {
        next_frame(counter, value);
    }
}

#[cfg(not(feature = "ssr"))]
fn next_frame(counter: RwSignal<CountUp>, value: RwSignal<u32>) {
    request_animation_frame(move || {
        let now = now_ms().unwrap_or(f64::INFINITY);
        // Stops quietly if the component was unmounted mid-animation
        let Some((sample, finished)) =
            counter.try_with_untracked(|c| (c.sample(now), c.is_finished(now)))
        else {
            return;
        };
        value.set(sample);
        if !finished {
            next_frame(counter, value);
        }
    });
}
