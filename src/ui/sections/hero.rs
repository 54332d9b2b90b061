use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::scroll_to_anchor;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden pt-20">
            // Animated gradient background
            <div class="absolute inset-0 gradient-mesh animate-gradient" style="background-size: 400% 400%"></div>

            // Floating decoration
            <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
                <div class="absolute top-1/4 left-1/4 w-64 h-64 bg-[#253FF6]/20 rounded-full blur-3xl animate-drift"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-[#E1FF01]/10 rounded-full blur-3xl animate-drift-slow"></div>

                <FloatingBadge
                    class="top-1/3 right-10 md:right-20 border-[#253FF6]/30 animate-float landing-slide-in-right"
                    icon=icons::ZAP
                    icon_class="bg-[#E1FF01] text-[#0F1212]"
                    caption="Сайт создан"
                    value="за 3 минуты"
                />
                <FloatingBadge
                    class="bottom-1/3 left-10 md:left-20 border-[#E1FF01]/30 animate-float-delayed landing-slide-in-left"
                    icon=icons::SPARKLES
                    icon_class="bg-[#253FF6] text-white"
                    caption="AI Генерация"
                    value="Активна"
                />
            </div>

            <div class="container mx-auto px-4 md:px-6 relative z-10">
                <div class="max-w-4xl mx-auto text-center landing-fade-in-up">
                    <div class="inline-flex items-center gap-2 bg-[#253FF6]/20 border border-[#253FF6]/40 rounded-full px-4 py-2 mb-8">
                        <span class="w-2 h-2 bg-[#E1FF01] rounded-full animate-pulse"></span>
                        <span class="text-sm text-gray-300">"Новое: AI генерация изображений"</span>
                    </div>

                    <h1 class="text-5xl sm:text-6xl md:text-7xl lg:text-8xl font-black text-white mb-6 leading-tight tracking-tight">
                        "Создавайте сайты"
                        <br />
                        <span class="text-[#E1FF01]">"силой AI."</span>
                        " Мгновенно."
                    </h1>

                    <p class="text-lg md:text-xl text-gray-400 mb-10 max-w-2xl mx-auto leading-relaxed">
                        "Превратите идею в готовый веб-сайт за минуты. Без кода, без сложностей — только чистая магия искусственного интеллекта."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                        <button class="landing-press w-full sm:w-auto bg-[#E1FF01] hover:bg-[#d4f200] text-[#0F1212] px-8 py-4 rounded-xl font-bold text-lg flex items-center justify-center gap-2">
                            <Icon name=icons::ROCKET />
                            "Начать создавать"
                        </button>
                        <button
                            class="landing-press w-full sm:w-auto bg-transparent border border-[#253FF6] hover:border-[#E1FF01] text-white px-8 py-4 rounded-xl font-semibold text-lg flex items-center justify-center gap-2 group"
                            on:click=move |_| scroll_to_anchor("demo")
                        >
                            <Icon name=icons::PLAY class="w-5 h-5 group-hover:text-[#E1FF01]" />
                            "Смотреть демо"
                        </button>
                    </div>

                    <p class="text-sm text-gray-500 mt-4">"Кредитная карта не требуется"</p>
                </div>

                // Brand mark
                <div class="mt-16 flex justify-center landing-fade-in-up landing-delay-500">
                    <div class="relative">
                        <div class="absolute inset-0 bg-[#253FF6]/30 blur-3xl rounded-full"></div>
                        <img
                            src="/webly-logo.svg"
                            alt="Webly AI Logo"
                            class="relative w-32 h-32 md:w-48 md:h-48 drop-shadow-2xl"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Glassy status card floating beside the hero copy (large screens only)
#[component]
fn FloatingBadge(
    class: &'static str,
    icon: &'static str,
    icon_class: &'static str,
    caption: &'static str,
    value: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "absolute bg-[#0F1212]/80 backdrop-blur-md border rounded-xl p-4 hidden lg:block {class}"
        )>
            <div class="flex items-center gap-3">
                <div class=format!("w-8 h-8 rounded-full flex items-center justify-center {icon_class}")>
                    <Icon name=icon class="w-4 h-4" />
                </div>
                <div>
                    <div class="text-xs text-gray-400">{caption}</div>
                    <div class="text-sm font-semibold text-white">{value}</div>
                </div>
            </div>
        </div>
    }
}
