use leptos::prelude::*;

use crate::components::scroll_to_section;
use crate::models::content::{current_year, years_since_founding, FOUNDED};
use crate::models::Section;
use crate::reveal::Reveal;

const IMAGE: &str = "/image/indalecio.jpeg";

#[component]
pub fn Hero() -> impl IntoView {
    let years = years_since_founding(current_year());

    view! {
        <section id=Section::Home.id() class="relative min-h-screen bg-gray-50 overflow-hidden">
            <div class="absolute inset-0">
                <div class="absolute inset-0 bg-gradient-to-br from-blue-50 via-gray-50 to-white"></div>
                <div class="absolute inset-0 opacity-30">
                    <div class="absolute top-0 -left-1/4 w-1/2 h-1/2 bg-blue-100 rounded-full blur-3xl"></div>
                    <div class="absolute bottom-0 -right-1/4 w-1/2 h-1/2 bg-blue-100 rounded-full blur-3xl"></div>
                </div>
            </div>

            <div class="relative container mx-auto px-4 sm:px-6 lg:px-8 h-screen flex items-center">
                <div class="w-full grid lg:grid-cols-2 gap-12 items-center">
                    <div>
                        <Reveal class="mb-6" delay_ms=300>
                            <span class="inline-block px-4 py-2 bg-blue-100 text-blue-700 rounded-full text-sm font-medium border border-blue-200">
                                "Comunicação Visual desde " {FOUNDED}
                            </span>
                        </Reveal>

                        <Reveal delay_ms=500>
                            <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold text-blue-900 mb-6">
                                "Conectando " <br/>
                                <span class="text-blue-600">"Marcas"</span> " e "
                                <span class="text-blue-600">"Pessoas"</span>
                            </h1>
                        </Reveal>

                        <Reveal delay_ms=700>
                            <p class="text-lg text-gray-600 mb-8 max-w-xl">
                                "Há mais de " {years}
                                " anos criando soluções visuais impactantes que transformam a maneira como sua marca se comunica com o mundo."
                            </p>
                        </Reveal>

                        <Reveal class="flex flex-col sm:flex-row gap-4" delay_ms=900>
                            <button
                                class="px-8 py-4 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-semibold transition-all duration-300 shadow-lg shadow-blue-600/20 hover:shadow-blue-600/30"
                                on:click=move |_| scroll_to_section(Section::Contact)
                            >
                                "Fale Conosco"
                            </button>
                            <button
                                class="px-8 py-4 bg-white hover:bg-gray-100 text-blue-600 rounded-lg font-semibold transition-all duration-300 border border-blue-200 shadow-sm hover:shadow-md"
                                on:click=move |_| scroll_to_section(Section::Portfolio)
                            >
                                "Ver Portfólio"
                            </button>
                        </Reveal>
                    </div>

                    <Reveal class="relative hidden lg:block" delay_ms=1100>
                        <div class="absolute -top-4 -left-4 w-24 h-24 bg-blue-100 rounded-lg z-0"></div>
                        <div class="absolute -bottom-4 -right-4 w-32 h-32 bg-blue-200 rounded-lg z-0"></div>
                        <div class="relative grid grid-cols-12 grid-rows-6 gap-4 z-10">
                            <div class="col-span-8 row-span-6 rounded-2xl overflow-hidden shadow-xl">
                                <img src=IMAGE alt="Outdoor advertising" class="w-full h-auto object-cover"/>
                            </div>
                            <div class="col-span-4 row-span-3 rounded-xl overflow-hidden shadow-lg">
                                <img src=IMAGE alt="Digital billboard" class="w-full h-full object-cover"/>
                            </div>
                            <div class="col-span-4 row-span-3 rounded-xl overflow-hidden shadow-lg">
                                <img src=IMAGE alt="Event display" class="w-full h-full object-cover"/>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>

            <button
                class="absolute bottom-8 left-1/2 transform -translate-x-1/2 text-blue-600 hover:text-blue-700 transition-colors text-3xl animate-bounce"
                aria-label="Sobre"
                on:click=move |_| scroll_to_section(Section::About)
            >
                "↓"
            </button>
        </section>
    }
}
