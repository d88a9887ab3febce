//! Top-center toast stack.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Queue a toast and schedule its auto-dismissal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, title: &str, description: Option<&str>) {
    let Some(id) = toasts.try_update(|t| t.push(kind, title, description)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(crate::state::toast::TOAST_TTL_MS, move || {
            toasts.try_update(|t| t.dismiss(id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class>
                            <div class="toast__body">
                                <p class="toast__title">{toast.title}</p>
                                {toast.description.map(|d| view! { <p class="toast__description">{d}</p> })}
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
