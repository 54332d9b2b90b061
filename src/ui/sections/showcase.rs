use leptos::prelude::*;

use crate::core::reveal::{CARD_STAGGER_MS, stagger};
use crate::core::{CREATE_ITEMS, Card};
use crate::ui::icon::Icon;
use crate::ui::reveal::FadeInUp;

/// "Create anything" grid of site types
#[component]
pub fn WhatYouCanCreate() -> impl IntoView {
    view! {
        <section class="py-20 md:py-32 bg-white">
            <div class="container mx-auto px-4 md:px-6">
                <FadeInUp>
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-black text-[#0F1212] text-center mb-6">
                        "Создавайте что угодно."
                        <br />
                        <span class="text-[#253FF6]">"Без ограничений."</span>
                    </h2>
                </FadeInUp>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6 mt-16">
                    {CREATE_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(index, card)| {
                            view! {
                                <FadeInUp delay_ms=stagger(index, CARD_STAGGER_MS)>
                                    <CreateCard card=*card />
                                </FadeInUp>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CreateCard(card: Card) -> impl IntoView {
    view! {
        <div class="group bg-[#0F1212] rounded-2xl p-6 md:p-8 border border-transparent hover:border-[#E1FF01]
                    transition-all duration-300 cursor-pointer hover:-translate-y-2 hover:scale-[1.02]">
            <div class="w-14 h-14 bg-[#253FF6]/20 rounded-xl flex items-center justify-center mb-6 group-hover:bg-[#E1FF01]/20 transition-colors">
                <Icon name=card.icon class="w-7 h-7 text-[#E1FF01]" />
            </div>
            <h3 class="text-xl font-bold text-white mb-2">{card.title}</h3>
            <p class="text-gray-400 text-sm">{card.description}</p>
        </div>
    }
}
