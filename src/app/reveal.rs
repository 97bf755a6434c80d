use leptos::{html, prelude::*};
use leptos_use::use_intersection_observer;

/// Fades its children in the first time they scroll into view.
///
/// Once revealed the content stays visible; scrolling back out does not hide
/// it again. The observer is released when the component is dropped.
#[component]
pub fn Reveal(
    #[prop(optional, into)] class: String,
    /// Stagger applied to the transition, for lists.
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);

    use_intersection_observer(target, move |entries, _| {
        if entries.iter().any(|entry| entry.is_intersecting()) {
            set_revealed(true);
        }
    });

    view! {
        <div
            node_ref=target
            class=move || {
                if revealed.get() {
                    format!("reveal reveal-visible {class}")
                } else {
                    format!("reveal {class}")
                }
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}

/// Gradient title with the underline bar shared by every section.
#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <Reveal class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl mb-4 bg-gradient-to-r from-purple-400 to-pink-600 bg-clip-text text-transparent">
                {title}
            </h2>
            <div class="w-20 h-1 bg-gradient-to-r from-purple-400 to-pink-600 mx-auto mb-6" />
            {subtitle.map(|s| view! { <p class="text-gray-400 text-lg max-w-2xl mx-auto">{s}</p> })}
        </Reveal>
    }
}
