//! "Try it live" section: prompt box on the left, mock preview on the right.

use leptos::prelude::*;

use crate::core::DemoState;
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::FadeInUp;

#[component]
pub fn InteractiveDemo() -> impl IntoView {
    let (prompt, set_prompt) = signal(String::new());
    let state = RwSignal::new(DemoState::default());

    let can_generate = move || prompt.with(|p| state.get().can_trigger(p));

    let on_generate = move |_| {
        let Some(delay_ms) = prompt.with_untracked(|p| state.try_update(|s| s.trigger(p)).flatten())
        else {
            return;
        };
        leptos::logging::log!("Demo generation started, result in {}ms", delay_ms);

        #[cfg(not(feature = "ssr"))]
        {
            gloo_timers::callback::Timeout::new(delay_ms, move || {
                if state.try_update(|s| s.complete()).unwrap_or(false) {
                    leptos::logging::log!("Demo result shown");
                }
            })
            .forget();
        }
    };

    view! {
        <section id="demo" class="py-20 md:py-32 bg-[#0F1212]">
            <div class="container mx-auto px-4 md:px-6">
                <FadeInUp>
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-black text-white text-center mb-6">
                        "Попробуйте "
                        <span class="text-[#E1FF01]">"вживую"</span>
                    </h2>
                    <p class="text-gray-400 text-center max-w-2xl mx-auto mb-12">
                        "Введите описание вашего сайта и посмотрите, как AI создаёт его в реальном времени"
                    </p>
                </FadeInUp>

                <FadeInUp delay_ms=200>
                    <div class="max-w-5xl mx-auto bg-[#0F1212] border border-[#253FF6]/30 rounded-3xl overflow-hidden">
                        <div class="grid md:grid-cols-2">
                            // Input side
                            <div class="p-6 md:p-8 border-b md:border-b-0 md:border-r border-[#253FF6]/30">
                                <div class="flex items-center gap-2 mb-4" aria-hidden="true">
                                    <div class="w-3 h-3 rounded-full bg-red-500"></div>
                                    <div class="w-3 h-3 rounded-full bg-yellow-500"></div>
                                    <div class="w-3 h-3 rounded-full bg-green-500"></div>
                                </div>
                                <label for="demo-prompt" class="text-sm text-gray-400 mb-2 block">
                                    "Опишите ваш сайт"
                                </label>
                                <textarea
                                    id="demo-prompt"
                                    class="w-full h-40 bg-[#0F1212] border border-[#253FF6]/30 rounded-xl p-4 text-white placeholder-gray-600 focus:border-[#E1FF01] focus:outline-none transition-colors resize-none"
                                    placeholder="Современный лендинг для стартапа в сфере финтех с синей темой..."
                                    prop:value=move || prompt.get()
                                    on:input=move |ev| set_prompt.set(event_target_value(&ev))
                                ></textarea>
                                <button
                                    class="w-full mt-4 bg-[#253FF6] hover:bg-[#1a2fd4] disabled:bg-gray-700 disabled:cursor-not-allowed text-white py-3 rounded-xl font-semibold transition-all flex items-center justify-center gap-2"
                                    disabled=move || !can_generate()
                                    on:click=on_generate
                                >
                                    {move || {
                                        if state.get().is_generating() {
                                            view! {
                                                <div class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></div>
                                                "Генерация..."
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <Icon name=icons::SPARKLES class="w-[18px] h-[18px]" />
                                                "Сгенерировать"
                                            }
                                                .into_any()
                                        }
                                    }}
                                </button>
                            </div>

                            // Result side
                            <div class="p-6 md:p-8 bg-[#0F1212] min-h-[300px] flex items-center justify-center relative overflow-hidden">
                                {move || {
                                    if state.get().shows_result() {
                                        view! { <MockResult /> }.into_any()
                                    } else {
                                        view! { <ResultPlaceholder /> }.into_any()
                                    }
                                }}

                                <Show when=move || state.get().is_generating()>
                                    <div class="absolute bottom-4 left-4 flex items-center gap-2">
                                        <span class="w-2 h-4 bg-[#E1FF01] animate-pulse"></span>
                                        <span class="text-[#E1FF01] text-sm">"AI пишет код..."</span>
                                    </div>
                                </Show>
                            </div>
                        </div>
                    </div>
                </FadeInUp>
            </div>
        </section>
    }
}

#[component]
fn ResultPlaceholder() -> impl IntoView {
    view! {
        <div class="text-center landing-fade-in">
            <div class="w-20 h-20 bg-[#253FF6]/20 rounded-full flex items-center justify-center mx-auto mb-4">
                <Icon name=icons::BOX class="w-8 h-8 text-[#253FF6]" />
            </div>
            <p class="text-gray-500">"Здесь появится результат"</p>
        </div>
    }
}

/// Fixed wireframe of a "generated" site. The prompt never affects it.
#[component]
fn MockResult() -> impl IntoView {
    view! {
        <div class="w-full landing-pop-in">
            <div class="bg-white rounded-xl p-4 shadow-2xl">
                <div class="h-4 bg-gray-200 rounded w-3/4 mb-3"></div>
                <div class="h-3 bg-gray-100 rounded w-full mb-2"></div>
                <div class="h-3 bg-gray-100 rounded w-5/6 mb-2"></div>
                <div class="h-3 bg-gray-100 rounded w-4/6 mb-4"></div>
                <div class="grid grid-cols-2 gap-2">
                    <div class="h-20 bg-[#253FF6]/10 rounded"></div>
                    <div class="h-20 bg-[#E1FF01]/20 rounded"></div>
                </div>
                <div class="mt-3 flex items-center gap-2">
                    <div class="h-8 w-24 bg-[#E1FF01] rounded"></div>
                    <div class="h-8 w-8 bg-gray-200 rounded-full"></div>
                </div>
            </div>
            <p class="text-center text-[#E1FF01] mt-4 text-sm font-medium">"✨ Сайт готов!"</p>
        </div>
    }
}
