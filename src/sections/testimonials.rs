use leptos::prelude::*;

use crate::models::content::{MAX_RATING, TESTIMONIALS};
use crate::models::{Carousel, Direction};
use crate::reveal::Reveal;

#[component]
pub fn Testimonials() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));

    let slide_class = move || {
        let from = match carousel.with(Carousel::direction) {
            Direction::Right => "slide-from-right",
            Direction::Left => "slide-from-left",
        };
        format!("bg-gray-50 rounded-xl p-8 md:p-12 shadow-lg {from}")
    };

    view! {
        <section class="py-20 bg-white-50">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal class="max-w-3xl mx-auto text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-bold text-blue-900 mb-4">"O Que Nossos Clientes Dizem"</h2>
                    <p class="text-gray-600">"Conheça as experiências de quem já trabalhou conosco."</p>
                </Reveal>

                <Reveal class="max-w-4xl mx-auto" delay_ms=200>
                    <div class="relative overflow-hidden">
                        {move || {
                            let testimonial = TESTIMONIALS.get(carousel.with(Carousel::active))?;
                            let stars = (0..MAX_RATING)
                                .map(|i| {
                                    let class = if i < testimonial.rating {
                                        "text-yellow-400"
                                    } else {
                                        "text-gray-300"
                                    };
                                    view! { <span class=class>"★"</span> }
                                })
                                .collect_view();
                            Some(view! {
                                <div class=slide_class>
                                    <div class="text-blue-200 text-6xl leading-none mb-4">"“"</div>
                                    <p class="text-gray-700 text-lg italic mb-6">{testimonial.text}</p>
                                    <div class="flex items-center justify-between">
                                        <div>
                                            <p class="font-bold text-blue-900">{testimonial.name}</p>
                                            <p class="text-gray-600 text-sm">
                                                {testimonial.position} ", " {testimonial.company}
                                            </p>
                                        </div>
                                        <div class="flex gap-1 text-xl">{stars}</div>
                                    </div>
                                </div>
                            })
                        }}
                    </div>

                    <div class="flex items-center justify-center gap-4 mt-8">
                        <button
                            class="p-2 rounded-full bg-blue-100 text-blue-600 hover:bg-blue-200 transition-colors"
                            aria-label="Depoimento anterior"
                            on:click=move |_| carousel.update(Carousel::prev)
                        >
                            "‹"
                        </button>
                        {(0..TESTIMONIALS.len())
                            .map(|index| {
                                view! {
                                    <button
                                        class=move || {
                                            if carousel.with(Carousel::active) == index {
                                                "w-3 h-3 rounded-full bg-blue-600"
                                            } else {
                                                "w-3 h-3 rounded-full bg-blue-200"
                                            }
                                        }
                                        aria-label=format!("Depoimento {}", index + 1)
                                        on:click=move |_| carousel.update(|c| c.go_to(index))
                                    ></button>
                                }
                            })
                            .collect_view()}
                        <button
                            class="p-2 rounded-full bg-blue-100 text-blue-600 hover:bg-blue-200 transition-colors"
                            aria-label="Próximo depoimento"
                            on:click=move |_| carousel.update(Carousel::next)
                        >
                            "›"
                        </button>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
