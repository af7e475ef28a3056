use crate::models::Section;

/// Smoothly scrolls the page so `section` is in view.
///
/// Nothing to scroll during server rendering, so this is a no-op there.
pub fn scroll_to_section(section: Section) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::document;
        use leptos::web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        let Some(element) = document().get_element_by_id(section.id()) else {
            tracing::debug!(id = section.id(), "scroll target not on the page");
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = section;
}
