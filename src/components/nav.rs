use leptos::prelude::*;

use super::scroll_to_section;
use crate::models::content::NAV_LINKS;
use crate::models::Section;

const SCROLLED_AFTER_PX: f64 = 20.0;

/// Whether the header should switch to its solid, compact style.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER_PX
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);

    // Track the window scroll position (browser only)
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = window().scroll_y().unwrap_or_default();
            set_scrolled.set(is_scrolled(y));
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_scrolled;

    let go = move |section: Section| {
        scroll_to_section(section);
        set_menu_open.set(false);
    };

    view! {
        <header class=move || {
            let style = if scrolled.get() {
                "bg-white/95 shadow-md py-3"
            } else {
                "bg-transparent py-5"
            };
            format!("fixed top-0 left-0 right-0 z-50 transition-all duration-300 {style}")
        }>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between">
                    <div class="flex items-center">
                        <div class="text-2xl font-bold text-blue-900">
                            "R&" <span class="text-blue-600">"A"</span>
                        </div>
                        <span class="ml-2 hidden md:inline-block text-sm font-medium text-gray-600">
                            "Comunicação Visual"
                        </span>
                    </div>

                    <nav class="hidden md:flex items-center gap-8">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                let section = link.section;
                                view! {
                                    <button
                                        class="text-gray-700 hover:text-blue-600 transition-colors"
                                        on:click=move |_| go(section)
                                    >
                                        {link.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <button
                        class="hidden md:flex items-center gap-1 bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-md transition-colors"
                        on:click=move |_| go(Section::Contact)
                    >
                        "Fale Conosco →"
                    </button>

                    <button
                        class="md:hidden text-gray-700 text-2xl"
                        aria-label="Menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-white shadow-lg absolute top-full left-0 right-0">
                    <div class="container mx-auto px-4 py-4 flex flex-col space-y-4">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                let section = link.section;
                                view! {
                                    <button
                                        class="text-gray-700 hover:text-blue-600 py-2 transition-colors"
                                        on:click=move |_| go(section)
                                    >
                                        {link.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <button
                            class="flex items-center justify-center gap-1 bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-md transition-colors"
                            on:click=move |_| go(Section::Contact)
                        >
                            "Fale Conosco →"
                        </button>
                    </div>
                </div>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_turns_solid_past_twenty_pixels() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
        assert!(is_scrolled(800.0));
    }
}
