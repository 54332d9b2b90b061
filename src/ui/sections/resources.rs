use leptos::prelude::*;

use crate::core::reveal::{CARD_STAGGER_MS, stagger};
use crate::core::{RESOURCES, Resource};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::FadeInUp;

#[component]
pub fn ResourcesSection() -> impl IntoView {
    view! {
        <section class="py-20 md:py-32 bg-white">
            <div class="container mx-auto px-4 md:px-6">
                <FadeInUp>
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-black text-[#0F1212] text-center mb-6">
                        "Учитесь. Создавайте."
                        <br />
                        <span class="text-[#253FF6]">"Масштабируйтесь."</span>
                    </h2>
                </FadeInUp>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-16 max-w-5xl mx-auto">
                    {RESOURCES
                        .iter()
                        .enumerate()
                        .map(|(index, resource)| {
                            view! {
                                <FadeInUp delay_ms=stagger(index, CARD_STAGGER_MS) class="h-full">
                                    <ResourceCard resource=*resource />
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
fn ResourceCard(resource: Resource) -> impl IntoView {
    let card = resource.card;

    view! {
        <div
            data-resource=resource.slug
            class="group block bg-[#0F1212] rounded-2xl p-8 border border-transparent hover:border-[#E1FF01]
                   transition-all duration-300 cursor-pointer h-full hover:-translate-y-1"
        >
            <div class="w-16 h-16 bg-[#253FF6]/20 rounded-2xl flex items-center justify-center mb-6 group-hover:bg-[#E1FF01]/20 transition-colors">
                <Icon name=card.icon class="w-8 h-8 text-[#E1FF01]" />
            </div>
            <h3 class="text-2xl font-bold text-white mb-3">{card.title}</h3>
            <p class="text-gray-400 mb-6">{card.description}</p>
            <div class="flex items-center gap-2 text-[#E1FF01] font-semibold group-hover:gap-3 transition-all">
                "Подробнее"
                <Icon name=icons::ARROW_RIGHT class="w-[18px] h-[18px]" />
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render_section() -> String {
        Owner::new().with(|| view! { <ResourcesSection /> }.to_html())
    }

    #[test]
    fn test_cards_do_not_link_to_hash_targets() {
        let html = render_section();
        for resource in RESOURCES {
            assert!(html.contains(&format!("data-resource=\"{}\"", resource.slug)));
            assert!(!html.contains(&format!("href=\"#{}\"", resource.slug)));
        }
        assert!(!html.contains("<a "));
    }
}
