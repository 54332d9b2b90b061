use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::FadeInUp;

#[component]
pub fn FinalCta() -> impl IntoView {
    view! {
        <section class="py-20 md:py-32 relative overflow-hidden">
            <div class="absolute inset-0 gradient-mesh"></div>
            <div class="container mx-auto px-4 md:px-6 relative z-10">
                <div class="max-w-3xl mx-auto text-center">
                    <FadeInUp>
                        <h2 class="text-4xl md:text-5xl lg:text-6xl font-black text-white mb-6">
                            "Готовы создавать "
                            <span class="text-[#E1FF01]">"будущее?"</span>
                        </h2>
                        <p class="text-xl text-gray-300 mb-10">"Присоединяйтесь к тысячам создателей с AI"</p>
                        <button class="landing-press bg-[#E1FF01] hover:bg-[#d4f200] text-[#0F1212] px-10 py-5 rounded-xl font-bold text-lg inline-flex items-center gap-3">
                            <Icon name=icons::ROCKET class="w-6 h-6" />
                            "Начать создавать бесплатно"
                        </button>
                        <p class="text-sm text-gray-400 mt-4">"Кредитная карта не требуется"</p>
                    </FadeInUp>
                </div>
            </div>
        </section>
    }
}
