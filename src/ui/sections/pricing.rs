use leptos::prelude::*;

use crate::core::reveal::{CARD_STAGGER_MS, stagger};
use crate::core::{BillingPeriod, PLANS, Plan, YEARLY_DISCOUNT_LABEL, format_grouped};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::FadeInUp;

/// Pricing section with the monthly/yearly switch
#[component]
pub fn PricingSection() -> impl IntoView {
    let period = RwSignal::new(BillingPeriod::default());
    let is_yearly = move || period.get().is_yearly();

    view! {
        <section id="pricing" class="py-20 md:py-32 bg-[#0F1212]">
            <div class="container mx-auto px-4 md:px-6">
                <FadeInUp>
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-black text-white text-center mb-6">
                        "Простые, "
                        <span class="text-[#E1FF01]">"прозрачные"</span>
                        " тарифы"
                    </h2>

                    <div class="flex items-center justify-center gap-4 mt-8">
                        <span
                            class="text-sm font-medium"
                            class=("text-white", move || !is_yearly())
                            class=("text-gray-500", is_yearly)
                        >
                            "Месяц"
                        </span>
                        <button
                            class="relative w-14 h-7 bg-[#253FF6] rounded-full transition-colors"
                            role="switch"
                            aria-checked=move || is_yearly().to_string()
                            aria-label="Годовая оплата"
                            on:click=move |_| period.update(BillingPeriod::toggle)
                        >
                            <span
                                class="absolute top-1 left-1 w-5 h-5 bg-[#E1FF01] rounded-full transition-transform duration-200"
                                class=("translate-x-7", is_yearly)
                            ></span>
                        </button>
                        <span
                            class="text-sm font-medium"
                            class=("text-white", is_yearly)
                            class=("text-gray-500", move || !is_yearly())
                        >
                            "Год "
                            <span class="text-[#E1FF01] text-xs">{YEARLY_DISCOUNT_LABEL}</span>
                        </span>
                    </div>
                </FadeInUp>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-16 max-w-6xl mx-auto items-center">
                    {PLANS
                        .iter()
                        .enumerate()
                        .map(|(index, plan)| {
                            view! {
                                <FadeInUp delay_ms=stagger(index, CARD_STAGGER_MS)>
                                    <PricingCard plan=*plan period=period />
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
fn PricingCard(plan: Plan, period: RwSignal<BillingPeriod>) -> impl IntoView {
    let card_class = if plan.highlighted {
        "relative bg-[#0F1212] rounded-3xl p-8 border transition-all duration-300 hover:-translate-y-1 border-[#E1FF01] shadow-lg shadow-[#E1FF01]/20 md:scale-105"
    } else {
        "relative bg-[#0F1212] rounded-3xl p-8 border transition-all duration-300 hover:-translate-y-1 border-[#253FF6]/30 hover:border-[#253FF6]"
    };
    // Only prices the billing switch changes are announced and re-animated
    let varies = plan.price.varies_by_period();
    let amount_class = if varies {
        "text-4xl font-black text-white landing-pop-in"
    } else {
        "text-4xl font-black text-white"
    };
    let cta_class = if plan.highlighted {
        "w-full py-3 rounded-xl font-semibold transition-all bg-[#E1FF01] text-[#0F1212] hover:bg-[#d4f200]"
    } else {
        "w-full py-3 rounded-xl font-semibold transition-all border border-[#253FF6] text-white hover:bg-[#253FF6]/20"
    };

    view! {
        <div class=card_class>
            {plan.highlighted.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2 bg-[#E1FF01] text-[#0F1212] px-4 py-1 rounded-full text-sm font-bold">
                    "ПОПУЛЯРНЫЙ"
                </div>
            })}

            <h3 class="text-xl font-bold text-white mb-2">{plan.name}</h3>
            <div class="flex items-baseline gap-1 mb-2" aria-live=varies.then_some("polite")>
                {move || match plan.displayed_price(period.get()) {
                    Some(amount) => view! {
                        <span class=amount_class>{format_grouped(amount)}</span>
                        <span class="text-gray-400">{plan.period_label}</span>
                    }
                        .into_any(),
                    None => view! {
                        <span class="text-2xl font-bold text-white">{plan.period_label}</span>
                    }
                        .into_any(),
                }}
            </div>
            <p class="text-gray-400 text-sm mb-6">{plan.description}</p>

            <ul class="space-y-3 mb-8">
                {plan
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="flex items-center gap-3 text-gray-300">
                                <Icon name=icons::CHECK class="w-[18px] h-[18px] text-[#253FF6] flex-shrink-0" />
                                <span class="text-sm">{*feature}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <button class=cta_class>{plan.cta}</button>
        </div>
    }
}
