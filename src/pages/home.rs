use leptos::prelude::*;

use crate::sections::{About, Contact, Hero, Impact, Portfolio, Services, Testimonials};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero/>
        <About/>
        <Services/>
        <Impact/>
        <Portfolio/>
        <Testimonials/>
        <Contact/>
    }
}
