use leptos::prelude::*;

use crate::models::content::{Card, OUTDOOR_HIGHLIGHTS, SERVICES};
use crate::models::Section;
use crate::reveal::Reveal;

#[component]
fn ServiceCard(card: Card) -> impl IntoView {
    view! {
        <Reveal
            class="bg-white rounded-lg shadow-lg p-6 hover:shadow-xl border border-gray-100"
            delay_ms=card.delay_ms
        >
            <div class="bg-blue-100 rounded-full p-3 inline-block mb-4">
                <div class="text-blue-600 text-2xl leading-none">{card.icon}</div>
            </div>
            <h3 class="text-xl font-bold text-blue-900 mb-2">{card.title}</h3>
            <p class="text-gray-600">{card.description}</p>
        </Reveal>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id=Section::Services.id() class="py-20 bg-white">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal class="max-w-3xl mx-auto text-center mb-16" hidden="opacity-0" shown="opacity-100">
                    <h2 class="text-3xl md:text-4xl font-bold text-blue-900 mb-4">"Nossos Serviços"</h2>
                    <p class="text-gray-600">
                        "Comunicação visual estratégica para conectar sua marca ao público"
                    </p>
                </Reveal>

                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SERVICES.iter().map(|card| view! { <ServiceCard card=*card/> }).collect_view()}
                </div>

                <Reveal class="mt-20 bg-blue-50 rounded-xl p-8 md:p-12" delay_ms=500>
                    <div class="grid md:grid-cols-2 gap-8 items-center">
                        <div>
                            <h3 class="text-2xl font-bold text-blue-900 mb-4">"Mídia Exterior Estratégica"</h3>
                            <p class="text-gray-700 mb-6">
                                "Nossos painéis publicitários são posicionados em pontos estratégicos de alta visibilidade, garantindo que sua mensagem alcance o público certo. Combinamos localização, design e mensagem para criar impacto duradouro."
                            </p>
                            <ul class="space-y-3">
                                {OUTDOOR_HIGHLIGHTS
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <li class="flex items-start">
                                                <span class="text-blue-600 mr-2 mt-1">"✓"</span>
                                                <span class="text-gray-700">{*item}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div class="rounded-lg overflow-hidden shadow-xl">
                            <img
                                src="/image/indalecio.jpeg"
                                alt="Billboard advertising"
                                class="w-full h-full object-cover"
                            />
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
