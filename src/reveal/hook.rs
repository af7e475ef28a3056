use std::sync::Arc;

use leptos::html::Div;
use leptos::prelude::*;

use super::{RevealController, RevealOptions, TargetId, Unobservable};
use crate::config::SiteConfig;
use crate::scheduler::BrowserScheduler;

/// Creates the page-wide controller and puts it in context.
///
/// In the browser it watches the real viewport; without intersection support
/// (and during server rendering) every element shows as soon as it mounts.
pub fn provide_reveal_controller() -> RevealController {
    let scheduler = Arc::new(BrowserScheduler::default());

    #[cfg(feature = "hydrate")]
    match super::DomViewport::install() {
        Ok(dom) => {
            let controller = RevealController::new(Arc::new(dom), scheduler);
            dom.connect(&controller);
            provide_context(dom);
            provide_context(controller.clone());
            return controller;
        }
        Err(err) => tracing::warn!(%err, "viewport observation unavailable"),
    }

    let controller = RevealController::new(Arc::new(Unobservable), scheduler);
    provide_context(controller.clone());
    controller
}

/// Registers the element behind the returned node ref for reveal.
///
/// The signal turns `true` once the element has been revealed. Registration
/// happens after mount and is undone when the owning component is cleaned up.
pub fn use_reveal(options: RevealOptions) -> (NodeRef<Div>, RwSignal<bool>) {
    let node_ref = NodeRef::<Div>::new();
    let revealed = RwSignal::new(false);

    let Some(controller) = use_context::<RevealController>() else {
        revealed.set(true);
        return (node_ref, revealed);
    };
    #[cfg(feature = "hydrate")]
    let dom = use_context::<super::DomViewport>();

    let target = TargetId::next();
    let registrar = controller.clone();
    Effect::new(move |registered: Option<bool>| {
        if registered == Some(true) {
            return true;
        }
        let Some(element) = node_ref.get() else {
            return false;
        };
        #[cfg(feature = "hydrate")]
        if let Some(dom) = dom {
            dom.attach(target, element.into());
        }
        #[cfg(not(feature = "hydrate"))]
        drop(element);

        let on_reveal = move || {
            let _ = revealed.try_set(true);
        };
        if let Err(err) = registrar.register(target, options, on_reveal) {
            tracing::warn!(%err, %target, "reveal options rejected, showing element");
            revealed.set(true);
        }
        true
    });

    on_cleanup(move || controller.unregister(target));

    (node_ref, revealed)
}

const HIDDEN: &str = "opacity-0 translate-y-10";
const SHOWN: &str = "opacity-100 translate-y-0";

/// Wraps `children` in a `div` that fades and slides in when scrolled to.
///
/// `hidden` and `shown` replace the default slide-up classes, e.g. a plain
/// fade uses `hidden="opacity-0" shown="opacity-100"`.
#[component]
pub fn Reveal(
    #[prop(optional)] class: &'static str,
    #[prop(optional)] delay_ms: u64,
    #[prop(optional)] hidden: Option<&'static str>,
    #[prop(optional)] shown: Option<&'static str>,
    #[prop(optional, into)] style: String,
    children: Children,
) -> impl IntoView {
    let threshold = use_context::<SiteConfig>()
        .map(|config| config.reveal_threshold)
        .unwrap_or(super::DEFAULT_THRESHOLD);
    let options = RevealOptions::default()
        .with_threshold(threshold)
        .with_delay_ms(delay_ms);
    let (node_ref, revealed) = use_reveal(options);
    let hidden = hidden.unwrap_or(HIDDEN);
    let shown = shown.unwrap_or(SHOWN);

    view! {
        <div
            node_ref=node_ref
            class=move || {
                let phase = if revealed.get() { shown } else { hidden };
                format!("{class} transition-all duration-1000 {phase}")
            }
            style=style
        >
            {children()}
        </div>
    }
}
