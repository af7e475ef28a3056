use std::sync::Arc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::contact::{ContactFormSubmitter, FormSnapshot, ReqwestTransport, SubmissionState};
use crate::models::content::{ADDRESS, EMAIL, OPENING_HOURS, PHONE};
use crate::models::{Field, Section};
use crate::reveal::Reveal;
use crate::scheduler::BrowserScheduler;

const INPUT: &str = "w-full px-3 sm:px-4 py-2 sm:py-3 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 text-sm sm:text-base disabled:bg-gray-100";

fn input_class(snapshot: RwSignal<FormSnapshot>, field: Field) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        let border = if snapshot.with(|s| s.field_errors.contains(field)) {
            "border-red-500"
        } else {
            "border-gray-300"
        };
        format!("{INPUT} {border}")
    }
}

#[component]
fn FieldError(snapshot: RwSignal<FormSnapshot>, field: Field) -> impl IntoView {
    move || {
        snapshot.with(|s| {
            s.field_errors
                .get(field)
                .map(|message| view! { <p class="text-red-500 text-xs sm:text-sm mt-1">{message.to_string()}</p> })
        })
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-6 sm:p-8 shadow-lg border border-gray-100">
            <h3 class="text-xl sm:text-2xl font-bold text-blue-900 mb-4 sm:mb-6">"Informações de Contato"</h3>
            <div class="space-y-4 sm:space-y-6">
                <div>
                    <h4 class="font-medium text-gray-900 mb-1 text-sm sm:text-base">"Email"</h4>
                    <a
                        href=format!("mailto:{EMAIL}")
                        class="text-gray-600 hover:text-blue-600 transition-colors text-sm sm:text-base"
                    >
                        {EMAIL}
                    </a>
                </div>
                <div>
                    <h4 class="font-medium text-gray-900 mb-1 text-sm sm:text-base">"Telefone"</h4>
                    <p class="text-gray-600 text-sm sm:text-base">{PHONE}</p>
                </div>
                <div>
                    <h4 class="font-medium text-gray-900 mb-1 text-sm sm:text-base">"Endereço"</h4>
                    <p class="text-gray-600 text-sm sm:text-base">{ADDRESS}</p>
                </div>
            </div>

            <div class="mt-6 sm:mt-8 bg-gray-50 rounded-lg p-4 sm:p-6">
                <h4 class="font-bold text-gray-900 mb-2 text-sm sm:text-base">"Horário de Atendimento"</h4>
                <p class="text-gray-600 mb-3 text-sm sm:text-base">{OPENING_HOURS}</p>
                <p class="text-xs sm:text-sm text-gray-500">
                    "Entre em contato para agendar uma consulta e discutir seu projeto."
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let snapshot = RwSignal::new(FormSnapshot::default());

    let submitter = ContactFormSubmitter::new(
        &config,
        Arc::new(ReqwestTransport::default()),
        Arc::new(BrowserScheduler::default()),
    )
    .with_sink(move |next| {
        let _ = snapshot.try_set(next.clone());
    });

    let on_unmount = submitter.clone();
    on_cleanup(move || on_unmount.teardown());
    let form = StoredValue::new(submitter);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.with_value(|form| form.submit_draft()) {
            Ok(send) => leptos::task::spawn_local(async move {
                let settled = send.await;
                tracing::debug!(?settled, "contact form settled");
            }),
            Err(err) => tracing::debug!(%err, "contact form not sent"),
        }
    };
    let edit = move |field: Field, value: String| form.with_value(|form| form.set_field(field, value));

    let value = move |field: Field| move || snapshot.with(|s| s.record.get(field).to_string());
    let locked = move || snapshot.with(FormSnapshot::inputs_disabled);
    let succeeded = move || snapshot.with(|s| s.state == SubmissionState::Succeeded);

    view! {
        <section id=Section::Contact.id() class="py-12 md:py-20 bg-gray-50">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal class="max-w-3xl mx-auto text-center mb-8 md:mb-12" hidden="opacity-0" shown="opacity-100">
                    <h2 class="text-2xl sm:text-3xl md:text-4xl font-bold text-blue-900 mb-3 md:mb-4">
                        "Entre em Contato"
                    </h2>
                    <p class="text-sm sm:text-base text-gray-600 px-2 sm:px-0">
                        "Estamos prontos para ajudar a transformar sua visão em comunicação visual impactante."
                    </p>
                </Reveal>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 md:gap-12 items-start">
                    <Reveal class="w-full" delay_ms=200 hidden="opacity-0" shown="opacity-100">
                        <ContactDetails/>
                    </Reveal>

                    <Reveal class="w-full" delay_ms=400 hidden="opacity-0" shown="opacity-100">
                        <div class="bg-white rounded-xl p-6 sm:p-8 shadow-lg border border-gray-100">
                            <h3 class="text-xl sm:text-2xl font-bold text-blue-900 mb-4 sm:mb-6">
                                "Envie sua Mensagem"
                            </h3>

                            <Show
                                when=succeeded
                                fallback=move || {
                                    view! {
                                        <form on:submit=on_submit novalidate=true>
                                            {move || {
                                                snapshot
                                                    .with(|s| s.error.clone())
                                                    .map(|error| {
                                                        view! {
                                                            <div class="bg-red-50 text-red-700 p-3 rounded-lg mb-4 text-sm" role="alert">
                                                                {error}
                                                            </div>
                                                        }
                                                    })
                                            }}

                                            <div class="mb-3 sm:mb-4">
                                                <label for="name" class="block text-gray-700 font-medium mb-1 sm:mb-2 text-sm sm:text-base">
                                                    "Nome"
                                                </label>
                                                <input
                                                    type="text"
                                                    id="name"
                                                    class=input_class(snapshot, Field::Name)
                                                    placeholder="Seu nome completo"
                                                    prop:value=value(Field::Name)
                                                    prop:disabled=locked
                                                    on:input=move |ev| edit(Field::Name, event_target_value(&ev))
                                                />
                                                <FieldError snapshot=snapshot field=Field::Name/>
                                            </div>

                                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-3 sm:gap-4 mb-3 sm:mb-4">
                                                <div>
                                                    <label for="email" class="block text-gray-700 font-medium mb-1 sm:mb-2 text-sm sm:text-base">
                                                        "Email"
                                                    </label>
                                                    <input
                                                        type="email"
                                                        id="email"
                                                        class=input_class(snapshot, Field::Email)
                                                        placeholder="seu.email@exemplo.com"
                                                        prop:value=value(Field::Email)
                                                        prop:disabled=locked
                                                        on:input=move |ev| edit(Field::Email, event_target_value(&ev))
                                                    />
                                                    <FieldError snapshot=snapshot field=Field::Email/>
                                                </div>
                                                <div>
                                                    <label for="phone" class="block text-gray-700 font-medium mb-1 sm:mb-2 text-sm sm:text-base">
                                                        "Telefone (opcional)"
                                                    </label>
                                                    <input
                                                        type="tel"
                                                        id="phone"
                                                        class=format!("{INPUT} border-gray-300")
                                                        placeholder="(99) 99999-9999"
                                                        prop:value=value(Field::Phone)
                                                        prop:disabled=locked
                                                        on:input=move |ev| edit(Field::Phone, event_target_value(&ev))
                                                    />
                                                </div>
                                            </div>

                                            <div class="mb-4 sm:mb-6">
                                                <label for="message" class="block text-gray-700 font-medium mb-1 sm:mb-2 text-sm sm:text-base">
                                                    "Mensagem"
                                                </label>
                                                <textarea
                                                    id="message"
                                                    rows="4"
                                                    class=input_class(snapshot, Field::Message)
                                                    placeholder="Descreva seu projeto ou dúvida..."
                                                    prop:value=value(Field::Message)
                                                    prop:disabled=locked
                                                    on:input=move |ev| edit(Field::Message, event_target_value(&ev))
                                                ></textarea>
                                                <FieldError snapshot=snapshot field=Field::Message/>
                                            </div>

                                            <button
                                                type="submit"
                                                prop:disabled=locked
                                                class=move || {
                                                    let busy = if locked() { "opacity-70 cursor-not-allowed" } else { "" };
                                                    format!("w-full bg-blue-600 hover:bg-blue-700 text-white font-medium py-2 sm:py-3 rounded-lg transition-colors flex items-center justify-center text-sm sm:text-base {busy}")
                                                }
                                            >
                                                <Show
                                                    when=locked
                                                    fallback=|| view! { "Enviar Mensagem ➤" }
                                                >
                                                    <span class="flex items-center">
                                                        <span class="animate-spin w-4 h-4 sm:w-5 sm:h-5 border-2 border-white border-t-transparent rounded-full mr-2 sm:mr-3"></span>
                                                        "Enviando..."
                                                    </span>
                                                </Show>
                                            </button>
                                        </form>
                                    }
                                }
                            >
                                <div class="bg-green-50 text-green-700 p-4 sm:p-6 rounded-lg text-center" role="status">
                                    <h4 class="text-lg sm:text-xl font-bold mb-1 sm:mb-2">"Mensagem Enviada!"</h4>
                                    <p class="text-sm sm:text-base">"Agradecemos o seu contato. Retornaremos em breve."</p>
                                </div>
                            </Show>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
