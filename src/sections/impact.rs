use leptos::prelude::*;

use crate::components::scroll_to_section;
use crate::models::content::{Card, IMPACT};
use crate::models::Section;
use crate::reveal::Reveal;

#[component]
fn ImpactCard(card: Card) -> impl IntoView {
    view! {
        <Reveal
            class="bg-white rounded-lg shadow-lg p-6 border-t-4"
            delay_ms=card.delay_ms
            style=format!("border-color: {}", card.color)
        >
            <div
                class="rounded-full p-3 inline-block mb-4"
                style=format!("background-color: {}20", card.color)
            >
                <div class="text-2xl leading-none" style=format!("color: {}", card.color)>
                    {card.icon}
                </div>
            </div>
            <h3 class="text-xl font-bold text-blue-900 mb-2">{card.title}</h3>
            <p class="text-gray-600">{card.description}</p>
        </Reveal>
    }
}

#[component]
pub fn Impact() -> impl IntoView {
    view! {
        <section id=Section::Impact.id() class="py-20 bg-gradient-to-b from-blue-50 to-white">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal class="max-w-3xl mx-auto text-center mb-16" hidden="opacity-0" shown="opacity-100">
                    <h2 class="text-3xl md:text-4xl font-bold text-blue-900 mb-4">"Nosso Impacto Social"</h2>
                    <p class="text-gray-600">
                        "Acreditamos que a comunicação visual pode educar, transformar e inspirar. Nossa missão vai além da publicidade: buscamos gerar impacto positivo."
                    </p>
                </Reveal>

                <div class="grid md:grid-cols-3 gap-8">
                    {IMPACT.iter().map(|card| view! { <ImpactCard card=*card/> }).collect_view()}
                </div>

                <Reveal class="mt-16 text-center" delay_ms=500 hidden="opacity-0" shown="opacity-100">
                    <h3 class="text-2xl font-bold text-blue-900 mb-4">"Juntos, Causamos Um Impacto Maior"</h3>
                    <p class="text-gray-700 mb-8 max-w-2xl mx-auto">
                        "Trabalhamos com nossos clientes para integrar mensagens de valor social às suas campanhas publicitárias, gerando retorno para a marca e impacto positivo para a sociedade."
                    </p>
                    <button
                        class="bg-blue-600 text-white hover:bg-blue-700 px-8 py-3 rounded-md font-medium transition-colors inline-flex items-center"
                        on:click=move |_| scroll_to_section(Section::Contact)
                    >
                        "Faça Parte Dessa Transformação"
                    </button>
                </Reveal>
            </div>
        </section>
    }
}
