//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::sections::Logo;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Страница не найдена — Webly AI" />

        <div class="min-h-screen bg-[#0F1212] flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="flex justify-center mb-6">
                    <Logo />
                </div>

                // Error code
                <h1 class="text-6xl font-black text-[#E1FF01] mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-white mb-2">"Страница не найдена"</h2>

                <p class="text-gray-400 mb-8 max-w-md mx-auto">
                    "Такой страницы нет или она была перемещена."
                </p>

                <A
                    href="/"
                    attr:class="inline-block px-6 py-3 bg-[#E1FF01] hover:bg-[#d4f200] text-[#0F1212] font-semibold rounded-lg transition-colors"
                >
                    "На главную"
                </A>
            </div>

            // Footer
            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-500">"© 2024 Webly AI"</p>
            </div>
        </div>
    }
}
