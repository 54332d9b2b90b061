use leptos::prelude::*;

use crate::core::reveal::{CARD_STAGGER_MS, stagger};
use crate::core::{Card, CardSize, FEATURES};
use crate::ui::icon::Icon;
use crate::ui::reveal::FadeInUp;

/// Bento grid of product features
#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="py-20 md:py-32 bg-[#0F1212]">
            <div class="container mx-auto px-4 md:px-6">
                <FadeInUp>
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-black text-white text-center mb-6">
                        "AI, который "
                        <span class="text-[#E1FF01]">"действительно"</span>
                        <br />
                        "понимает"
                    </h2>
                </FadeInUp>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mt-16 max-w-5xl mx-auto">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, card)| {
                            view! {
                                <FadeInUp delay_ms=stagger(index, CARD_STAGGER_MS)>
                                    <FeatureCard card=*card />
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
fn FeatureCard(card: Card) -> impl IntoView {
    let size_class = match card.size {
        CardSize::Large => "md:col-span-1",
        CardSize::Small => "",
    };

    view! {
        <div class=format!(
            "bg-[#0F1212] border border-[#253FF6]/30 rounded-3xl p-8 hover:border-[#E1FF01]/50 transition-all duration-300 hover:scale-[1.02] group {size_class}"
        )>
            <div class="w-12 h-12 bg-[#253FF6]/20 rounded-xl flex items-center justify-center mb-6 group-hover:bg-[#E1FF01]/20 transition-colors">
                <Icon name=card.icon class="w-6 h-6 text-[#E1FF01]" />
            </div>
            <h3 class="text-2xl font-bold text-white mb-3">{card.title}</h3>
            <p class="text-gray-400 leading-relaxed">{card.description}</p>

            // Visual placeholder
            <div class="mt-6 h-32 bg-gradient-to-br from-[#253FF6]/10 to-[#E1FF01]/5 rounded-xl border border-[#253FF6]/20"></div>
        </div>
    }
}
