use leptos::prelude::*;

use crate::notice::{Notice, Toast, ToastQueue, TOAST_TTL};

/// Handle to the page-wide toast queue, provided once by `App`.
#[derive(Debug, Clone, Copy)]
pub struct Toasts(RwSignal<ToastQueue>);

impl Toasts {
    pub fn new() -> Self {
        Self(RwSignal::new(ToastQueue::default()))
    }

    pub fn is_empty(self) -> bool {
        self.0.with(ToastQueue::is_empty)
    }

    /// Shows a notice and schedules its removal.
    pub fn push(self, notice: Notice) {
        let queue = self.0;
        let Some(id) = queue.try_update(|q| q.push(notice)) else {
            return;
        };
        set_timeout(
            move || {
                queue.try_update(|q| q.dismiss(id));
            },
            TOAST_TTL,
        );
    }

    fn dismiss(self, id: u64) {
        self.0.update(|q| {
            q.dismiss(id);
        });
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() {
    provide_context(Toasts::new());
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed top-4 right-4 z-[100] flex flex-col gap-2 w-80" aria-live="polite">
            <For
                each=move || toasts.0.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let (icon, tone) = if toast.notice.is_error() {
                        ("✕", "border-red-500/40 text-red-300")
                    } else {
                        ("✓", "border-green-500/40 text-green-300")
                    };
                    view! {
                        <div
                            role="status"
                            class=format!(
                                "fade-in flex items-start gap-3 px-4 py-3 rounded-lg bg-gray-900/95 border shadow-lg cursor-pointer {tone}",
                            )
                            on:click=move |_| toasts.dismiss(toast.id)
                        >
                            <span>{icon}</span>
                            <span class="text-sm text-gray-200">{toast.notice.text()}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
