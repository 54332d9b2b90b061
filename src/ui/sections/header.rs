use leptos::prelude::*;

use crate::core::{NAV_LINKS, NavLink, is_scrolled};
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::scroll_to_anchor;

const HEADER_BASE: &str = "fixed top-0 left-0 right-0 z-50 transition-all duration-300";

/// Fixed navigation bar with a mobile menu
#[component]
pub fn Header() -> impl IntoView {
    let scroll_offset = RwSignal::new(0.0_f64);
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::scroll::window_scroll_offset;
        use leptos::ev::scroll;

        // Pages restored mid-scroll need the solid header right away
        Effect::new(move |_| scroll_offset.set(window_scroll_offset()));
        let handle_scroll = window_event_listener(scroll, move |_| {
            scroll_offset.set(window_scroll_offset());
        });

        on_cleanup(move || drop(handle_scroll));
    }

    let header_class = move || {
        if is_scrolled(scroll_offset.get()) {
            format!(
                "{HEADER_BASE} bg-[#0F1212]/90 backdrop-blur-md border-b border-[#253FF6]/20"
            )
        } else {
            format!("{HEADER_BASE} bg-transparent")
        }
    };

    view! {
        <header class=header_class>
            <div class="container mx-auto px-4 md:px-6 py-4">
                <div class="flex items-center justify-between">
                    <a href="#" class="flex items-center gap-2">
                        <Logo />
                        <span class="text-white font-bold text-xl hidden sm:block">"Webly AI"</span>
                    </a>

                    // Desktop navigation
                    <nav class="hidden md:flex items-center gap-8">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <NavAnchor
                                        link=*link
                                        class="text-gray-300 hover:text-[#E1FF01] transition-colors text-sm font-medium"
                                    />
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="flex items-center gap-4">
                        <button class="hidden sm:block text-white hover:text-[#E1FF01] transition-colors text-sm font-medium">
                            "Войти"
                        </button>
                        <button class="bg-[#E1FF01] hover:bg-[#d4f200] text-[#0F1212] px-5 py-2.5 rounded-lg font-semibold text-sm transition-all transform hover:scale-105">
                            "Начать"
                        </button>
                        <button
                            class="md:hidden text-white p-2"
                            on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                            aria-label="Toggle mobile menu"
                            aria-expanded=move || mobile_menu_open.get().to_string()
                        >
                            {move || {
                                if mobile_menu_open.get() {
                                    view! { <Icon name=icons::X class="w-6 h-6" /> }
                                } else {
                                    view! { <Icon name=icons::MENU class="w-6 h-6" /> }
                                }
                            }}
                        </button>
                    </div>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:opacity-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <nav class="flex flex-col gap-4 mt-4 pt-4 pb-4 border-t border-[#253FF6]/20">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <NavAnchor
                                        link=*link
                                        class="text-gray-300 hover:text-[#E1FF01] transition-colors text-base font-medium"
                                        on_navigate=Callback::new(move |_| set_mobile_menu_open.set(false))
                                    />
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}

/// Anchor that smooth-scrolls to its section instead of jumping
#[component]
fn NavAnchor(
    link: NavLink,
    class: &'static str,
    /// Called before scrolling, e.g. to close the mobile menu
    #[prop(optional)]
    on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <a
            href=link.href()
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                if let Some(on_navigate) = on_navigate {
                    on_navigate.run(());
                }
                scroll_to_anchor(link.anchor);
            }
        >
            {link.label}
        </a>
    }
}

/// Square "W" brand mark
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-[#E1FF01] rounded-lg flex items-center justify-center">
            <span class="text-[#0F1212] font-black text-xl">"W"</span>
        </div>
    }
}
