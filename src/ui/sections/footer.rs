use leptos::prelude::*;

use crate::core::{FOOTER_COLUMNS, LEGAL_LINKS, SOCIAL_LINKS};
use crate::ui::icon::Icon;
use crate::ui::sections::header::Logo;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-[#0F1212] border-t border-[#253FF6]/20 pt-16 pb-8">
            <div class="container mx-auto px-4 md:px-6">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 md:gap-12 mb-12">
                    // Brand
                    <div>
                        <div class="flex items-center gap-2 mb-4">
                            <Logo />
                            <span class="text-white font-bold text-xl">"Webly AI"</span>
                        </div>
                        <p class="text-gray-400 text-sm mb-6">
                            "Создавайте сайты силой искусственного интеллекта. Быстро, просто, красиво."
                        </p>
                        <div class="flex gap-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href="#"
                                            class="w-10 h-10 bg-[#253FF6]/20 rounded-lg flex items-center justify-center hover:bg-[#E1FF01]/20 transition-colors group"
                                            aria-label=*social
                                        >
                                            <Icon name=*social class="w-[18px] h-[18px] text-gray-400 group-hover:text-[#E1FF01]" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| {
                            view! {
                                <div>
                                    <h4 class="text-white font-semibold mb-4">{column.title}</h4>
                                    <ul class="space-y-3">
                                        {column
                                            .links
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <a href="#" class="text-gray-400 hover:text-[#E1FF01] transition-colors text-sm">
                                                            {*link}
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // Bottom bar
                <div class="border-t border-[#253FF6]/10 pt-8 flex flex-col md:flex-row items-center justify-between gap-4">
                    <p class="text-gray-500 text-sm">"© 2024 Webly AI. Все права защищены."</p>
                    <div class="flex gap-6">
                        {LEGAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a href="#" class="text-gray-500 hover:text-[#E1FF01] text-sm transition-colors">
                                        {*link}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
