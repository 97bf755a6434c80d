use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::use_window_scroll;

use crate::content::{active_section, Section, NAV_PROBE, OWNER, SCROLL_THRESHOLD};

#[component]
pub fn Header() -> impl IntoView {
    // the scroll listener lives exactly as long as the header
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Signal::derive(move || scroll_y.get() > SCROLL_THRESHOLD);
    let (active, set_active) = signal(Section::Home);
    let (menu_open, set_menu_open) = signal(false);

    Effect::new(move |_| {
        scroll_y.track();
        let bounds = Section::ALL.into_iter().filter_map(|section| {
            let el = document().get_element_by_id(section.id())?;
            let rect = el.get_bounding_client_rect();
            Some((section, rect.top(), rect.bottom()))
        });
        // between sections keep the last one highlighted
        if let Some(section) = active_section(bounds, NAV_PROBE) {
            set_active(section);
        }
    });

    let close_menu = move |_: MouseEvent| set_menu_open(false);

    let desktop_link = move |section: Section| {
        view! {
            <a
                href=section.href()
                class="relative text-white/80 hover:text-purple-400 transition-colors font-medium"
            >
                {section.label()}
                <Show when=move || active.get() == section>
                    <span class="absolute -bottom-1 left-0 right-0 h-0.5 bg-purple-400 rounded-full"></span>
                </Show>
            </a>
        }
    };

    let mobile_link = move |section: Section| {
        view! {
            <a
                href=section.href()
                on:click=close_menu
                class=move || {
                    if active.get() == section {
                        "text-purple-400 text-lg"
                    } else {
                        "text-white/80 hover:text-purple-400 text-lg transition-colors"
                    }
                }
            >
                {section.label()}
            </a>
        }
    };

    view! {
        <header class=move || {
            if scrolled.get() {
                "fixed top-0 inset-x-0 z-50 transition-all duration-300 bg-black/80 backdrop-blur-lg border-b border-purple-500/20 shadow-lg"
            } else {
                "fixed top-0 inset-x-0 z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <nav class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href=Section::Home.href() on:click=close_menu class="flex items-center gap-2 group">
                    <div class="w-10 h-10 bg-gradient-to-br from-purple-600 to-pink-600 rounded-xl flex items-center justify-center shadow-lg shadow-purple-500/30">
                        <span class="font-bold text-lg">{&OWNER[..1]}</span>
                    </div>
                    <div class="hidden sm:block">
                        <div class="text-xl font-bold bg-gradient-to-r from-purple-400 to-pink-500 bg-clip-text text-transparent">
                            {OWNER}
                        </div>
                        <div class="text-xs text-gray-400 -mt-1">"Freelance Developer"</div>
                    </div>
                </a>

                <div class="hidden md:flex items-center gap-8">
                    {Section::ALL.into_iter().map(desktop_link).collect_view()}
                </div>

                <a
                    href=Section::Contact.href()
                    class="hidden md:block px-6 py-2 bg-gradient-to-r from-purple-600 to-pink-600 rounded-full font-semibold shadow-lg shadow-purple-500/30 hover:shadow-purple-500/50 transition-shadow"
                >
                    "💼 Hire Me"
                </a>

                <button
                    class="md:hidden w-10 h-10 flex items-center justify-center text-2xl rounded-lg hover:bg-white/10"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </nav>

            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-black/90 backdrop-blur-lg border-t border-purple-500/10">
                    <div class="flex flex-col items-center space-y-6 py-6">
                        {Section::ALL.into_iter().map(mobile_link).collect_view()}
                        <a
                            href=Section::Contact.href()
                            on:click=close_menu
                            class="px-8 py-2 bg-gradient-to-r from-purple-600 to-pink-600 rounded-full font-semibold"
                        >
                            "💼 Hire Me"
                        </a>
                    </div>
                </div>
            </Show>
        </header>
    }
}
