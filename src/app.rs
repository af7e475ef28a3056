use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{Footer, Navbar};
use crate::config::SiteConfig;
use crate::pages::*;
use crate::reveal::provide_reveal_controller;

/// Config handed down by the server, or the compiled-in one in the browser.
fn site_config() -> SiteConfig {
    if let Some(config) = use_context::<SiteConfig>() {
        return config;
    }
    SiteConfig::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "invalid site config, using defaults");
        SiteConfig::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(site_config());

    let reveal = provide_reveal_controller();
    on_cleanup(move || reveal.teardown());

    view! {
        <Stylesheet id="leptos" href="/pkg/ra_visual.css"/>
        <Title text="R&A Comunicação Visual - Mídia Exterior e Eventos desde 1999"/>
        <Meta
            name="description"
            content="Painéis publicitários, comunicação visual para eventos e campanhas de impacto social em São Vicente - SP."
        />

        <Router>
            <div class="min-h-screen">
                <Navbar/>
                <main>
                    <Routes fallback=|| view! { <h1>"404 - Página não encontrada"</h1> }>
                        <Route path=path!("/") view=HomePage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
