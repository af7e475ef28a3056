use leptos::prelude::*;

use super::scroll_to_section;
use crate::models::content::{
    current_year, years_since_founding, ADDRESS, AGENCY, EMAIL, FOOTER_LINKS, OPENING_HOURS, PHONE,
};

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();
    let years = years_since_founding(year);

    view! {
        <footer class="bg-gray-50 border-t border-gray-200">
            <div class="container mx-auto px-4 py-12">
                <div class="grid md:grid-cols-3 gap-8">
                    <div>
                        <div class="mb-4">
                            <div class="text-3xl font-bold text-blue-900">
                                "R&" <span class="text-blue-600">"A"</span>
                            </div>
                            <div class="text-sm text-blue-600">"Comunicação Visual"</div>
                        </div>
                        <p class="text-gray-600 mb-4">
                            "Com " {years}
                            " anos de experiência, oferecemos soluções em mídia exterior e eventos que conectam marcas a pessoas com impacto visual e social."
                        </p>
                        <p class="text-gray-500 text-sm">
                            "© " {year} " " {AGENCY} ". Todos os direitos reservados."
                        </p>
                    </div>

                    <div>
                        <h3 class="text-xl font-bold mb-4 text-blue-900">"Links Rápidos"</h3>
                        <ul class="space-y-2">
                            {FOOTER_LINKS
                                .iter()
                                .map(|link| {
                                    let section = link.section;
                                    view! {
                                        <li>
                                            <button
                                                class="text-gray-600 hover:text-blue-600 transition-colors"
                                                on:click=move |_| scroll_to_section(section)
                                            >
                                                {link.label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-xl font-bold mb-4 text-blue-900">"Contato"</h3>
                        <ul class="space-y-3 text-gray-600">
                            <li>
                                <a href=format!("mailto:{EMAIL}") class="hover:text-blue-600 transition-colors">
                                    {EMAIL}
                                </a>
                            </li>
                            <li>{PHONE}</li>
                            <li>{ADDRESS}</li>
                        </ul>
                        <div class="mt-4">
                            <h4 class="font-bold mb-2 text-blue-900">"Horário de Atendimento"</h4>
                            <p class="text-gray-600 text-sm">{OPENING_HOURS}</p>
                        </div>
                    </div>
                </div>

                <div class="border-t border-gray-200 mt-8 pt-8 text-center text-gray-500 text-sm">
                    <p>"Site desenvolvido por Lucas Barros Simon para " {AGENCY}</p>
                </div>
            </div>
        </footer>
    }
}
