use leptos::prelude::*;

use crate::core::reveal::{FAQ_STAGGER_MS, stagger};
use crate::core::{Accordion, FAQS, FaqEntry};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::FadeInUp;

/// FAQ section; opening a question closes the previous one
#[component]
pub fn FaqSection() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::default());

    view! {
        <section id="faq" class="py-20 md:py-32 bg-[#0F1212]">
            <div class="container mx-auto px-4 md:px-6 max-w-3xl">
                <FadeInUp>
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-black text-white text-center mb-6">
                        "Вопросы? "
                        <span class="text-[#E1FF01]">"Ответы здесь."</span>
                    </h2>
                </FadeInUp>

                <div class="mt-16 space-y-4">
                    {FAQS
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! {
                                <FadeInUp delay_ms=stagger(index, FAQ_STAGGER_MS)>
                                    <FaqItem entry=*entry index=index accordion=accordion />
                                </FadeInUp>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// FAQ accordion row
#[component]
fn FaqItem(entry: FaqEntry, index: usize, accordion: RwSignal<Accordion>) -> impl IntoView {
    let is_open = move || accordion.get().is_open(index);
    let answer_id = format!("faq-answer-{index}");

    view! {
        <div class="border-b border-[#253FF6]/20">
            <button
                class="w-full py-6 flex items-center justify-between text-left group"
                on:click=move |_| accordion.update(|a| a.toggle(index))
                aria-expanded=move || is_open().to_string()
                aria-controls=answer_id.clone()
            >
                <span class="text-lg font-semibold text-white group-hover:text-[#E1FF01] transition-colors pr-4">
                    {entry.question}
                </span>
                <div
                    class="flex-shrink-0 transition-transform duration-200"
                    class=("rotate-45", is_open)
                >
                    <Icon name=icons::PLUS class="w-5 h-5 text-[#E1FF01]" />
                </div>
            </button>
            <div
                id=answer_id
                class="overflow-hidden transition-all duration-300"
                class:max-h-0=move || !is_open()
                class:opacity-0=move || !is_open()
                class:max-h-96=is_open
            >
                <p class="pb-6 text-gray-400 leading-relaxed">{entry.answer}</p>
            </div>
        </div>
    }
}
