use leptos::prelude::*;

use crate::core::reveal::{CARD_STAGGER_MS, stagger};
use crate::core::{TESTIMONIALS, Testimonial};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::FadeInUp;

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <section class="py-20 md:py-32 bg-white">
            <div class="container mx-auto px-4 md:px-6">
                <FadeInUp>
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-black text-[#0F1212] text-center mb-6">
                        "Истории "
                        <span class="text-[#253FF6]">"успеха"</span>
                    </h2>
                </FadeInUp>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-16 max-w-5xl mx-auto">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(index, testimonial)| {
                            view! {
                                <FadeInUp delay_ms=stagger(index, CARD_STAGGER_MS) class="h-full">
                                    <TestimonialCard testimonial=*testimonial />
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
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <figure class="bg-gray-50 rounded-2xl p-6 md:p-8 border border-gray-100 h-full transition-transform duration-300 hover:-translate-y-1">
            <div class="flex items-center gap-1 mb-4" aria-label=format!("Оценка {} из 5", testimonial.rating)>
                {(0..testimonial.rating)
                    .map(|_| view! { <Icon name=icons::STAR class="w-4 h-4 text-[#E1FF01] fill-[#E1FF01]" /> })
                    .collect_view()}
            </div>
            <blockquote class="text-[#0F1212] text-lg mb-6 leading-relaxed">
                {format!("\"{}\"", testimonial.quote)}
            </blockquote>
            <figcaption class="flex items-center gap-4">
                <div class="w-12 h-12 bg-[#253FF6] rounded-full flex items-center justify-center text-white font-bold">
                    {testimonial.initial()}
                </div>
                <div>
                    <div class="font-bold text-[#0F1212]">{testimonial.author}</div>
                    <div class="text-sm text-gray-500">{testimonial.role}</div>
                </div>
            </figcaption>
            <div class="mt-4 pt-4 border-t border-gray-200">
                <span class="text-[#253FF6] font-semibold text-sm">{testimonial.metric}</span>
            </div>
        </figure>
    }
}
