use leptos::prelude::*;

use crate::models::content::{projects_in, Project};
use crate::models::{Category, Section};
use crate::reveal::Reveal;

const STAGGER_MS: u64 = 100;

#[component]
fn ProjectCard(project: &'static Project, delay_ms: u64) -> impl IntoView {
    view! {
        <Reveal class="group relative overflow-hidden rounded-lg shadow-lg aspect-[4/3]" delay_ms=delay_ms>
            <img
                src=project.image
                alt=project.title
                class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
            />
            <div class="absolute inset-0 bg-gradient-to-t from-blue-900/80 to-transparent flex items-end p-6">
                <div>
                    <span class="text-blue-200 text-sm">{project.category.label()}</span>
                    <h3 class="text-white font-bold">{project.title}</h3>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
pub fn Portfolio() -> impl IntoView {
    let (active, set_active) = signal(Category::default());

    view! {
        <section id=Section::Portfolio.id() class="py-20 bg-gray-50">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal class="max-w-3xl mx-auto text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-bold text-blue-900 mb-4">"Nosso Portfólio"</h2>
                    <p class="text-gray-600">
                        "Conheça alguns de nossos projetos e campanhas de comunicação visual."
                    </p>
                </Reveal>

                <div class="flex flex-wrap justify-center gap-4 mb-12">
                    {Category::ALL
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    class=move || {
                                        if active.get() == category {
                                            "px-6 py-2 rounded-full transition-colors bg-blue-600 text-white"
                                        } else {
                                            "px-6 py-2 rounded-full transition-colors bg-white text-gray-700 hover:bg-blue-50"
                                        }
                                    }
                                    on:click=move |_| set_active.set(category)
                                >
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        projects_in(active.get())
                            .into_iter()
                            .enumerate()
                            .map(|(index, project)| {
                                let delay_ms = index as u64 * STAGGER_MS;
                                view! { <ProjectCard project=project delay_ms=delay_ms/> }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
