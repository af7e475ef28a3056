use leptos::prelude::*;

use crate::models::content::{current_year, years_since_founding, AGENCY, SATISFIED_CLIENTS};
use crate::models::Section;
use crate::reveal::Reveal;

#[component]
pub fn About() -> impl IntoView {
    let years = years_since_founding(current_year());

    view! {
        <section id=Section::About.id() class="py-20 bg-gray-50">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="max-w-3xl mx-auto text-center mb-12">
                    <Reveal>
                        <h2 class="text-3xl md:text-4xl font-bold text-blue-900 mb-4">"Nossa História"</h2>
                    </Reveal>
                    <Reveal delay_ms=200>
                        <p class="text-gray-600">"Mais de " {years} " anos conectando marcas e pessoas."</p>
                    </Reveal>
                </div>

                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <Reveal class="relative" hidden="opacity-0 -translate-x-5" shown="opacity-100 translate-x-0">
                        <div class="absolute -top-4 -left-4 w-24 h-24 bg-blue-100 rounded-lg"></div>
                        <div class="absolute -bottom-4 -right-4 w-32 h-32 bg-blue-200 rounded-lg"></div>
                        <div class="relative rounded-lg overflow-hidden shadow-xl aspect-[4/3]">
                            <img
                                src="/image/indalecio.png"
                                alt="Outdoor advertising billboard"
                                class="w-full h-full object-cover"
                            />
                        </div>
                    </Reveal>

                    <Reveal delay_ms=200 hidden="opacity-0 translate-x-5" shown="opacity-100 translate-x-0">
                        <h3 class="text-2xl font-bold text-blue-900 mb-4">{AGENCY}</h3>
                        <p class="text-gray-700 mb-4">
                            "Fundada em 1999, a R&A Comunicação Visual traz mais de " {years}
                            " anos de experiência em mídias exteriores e eventos. Nossa jornada começou com o compromisso de oferecer soluções visuais impactantes que conectam marcas ao seu público."
                        </p>
                        <p class="text-gray-700 mb-6">
                            "Ao longo dos anos, nos especializamos em painéis publicitários estrategicamente posicionados, promovendo não apenas nossos clientes, mas também valores educacionais, ambientais e sociais importantes para a comunidade."
                        </p>
                        <div class="grid grid-cols-2 gap-4 mt-6">
                            <Reveal class="bg-white p-4 rounded-lg shadow-md" delay_ms=300>
                                <div class="text-blue-600 font-bold text-3xl mb-1">{years} "+"</div>
                                <div class="text-gray-600 text-sm">"Anos de experiência"</div>
                            </Reveal>
                            <Reveal class="bg-white p-4 rounded-lg shadow-md" delay_ms=400>
                                <div class="text-blue-600 font-bold text-3xl mb-1">{SATISFIED_CLIENTS} "+"</div>
                                <div class="text-gray-600 text-sm">"Clientes satisfeitos"</div>
                            </Reveal>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
