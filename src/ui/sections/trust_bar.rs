use leptos::prelude::*;

use crate::core::{TRUST_RATING, TRUST_RATING_STARS, TRUST_STATS, TrustStat};
use crate::ui::count_up::CountUpNumber;
use crate::ui::icon::{Icon, icons};

/// Number styling per animated statistic, in `TRUST_STATS` order
const STAT_NUMBER_CLASSES: [&str; 2] = [
    "text-4xl md:text-5xl font-black mb-1 text-[#E1FF01]",
    "text-4xl md:text-5xl font-black mb-1 text-[#253FF6]",
];

#[component]
pub fn TrustBar() -> impl IntoView {
    view! {
        <section class="py-12 border-y border-[#253FF6]/10 bg-[#0F1212]/50">
            <div class="container mx-auto px-4 md:px-6">
                <div class="flex flex-col md:flex-row items-center justify-center gap-8 md:gap-16">
                    {TRUST_STATS
                        .iter()
                        .zip(STAT_NUMBER_CLASSES)
                        .map(|(stat, number_class)| {
                            view! {
                                <Stat stat=*stat number_class=number_class />
                                <Divider />
                            }
                        })
                        .collect_view()}

                    <div class="text-center">
                        <div class="text-4xl md:text-5xl font-black text-white mb-1">{TRUST_RATING}</div>
                        <div class="flex items-center justify-center gap-1 mb-1">
                            {(0..TRUST_RATING_STARS)
                                .map(|_| view! { <Icon name=icons::STAR class="w-4 h-4 text-[#E1FF01] fill-[#E1FF01]" /> })
                                .collect_view()}
                        </div>
                        <div class="text-sm text-gray-400 uppercase tracking-wider">"Рейтинг"</div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stat(stat: TrustStat, number_class: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <CountUpNumber
                target=stat.target
                duration_ms=stat.duration_ms
                suffix="+"
                class=number_class
            />
            <div class="text-sm text-gray-400 uppercase tracking-wider">{stat.label}</div>
        </div>
    }
}

#[component]
fn Divider() -> impl IntoView {
    view! { <div class="hidden md:block w-px h-12 bg-[#253FF6]/30"></div> }
}
