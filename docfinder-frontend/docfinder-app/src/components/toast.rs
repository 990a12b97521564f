use crate::global_state::toasts::{use_toast, Toast, ToastLevel};
use icondata as i;
use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use leptos_icons::Icon;

#[component]
pub fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = use_toast().expect("Toast context not found");
    let is_exiting = RwSignal::new(false);

    let base_class = "flex items-center gap-3 w-full max-w-sm p-4 rounded-lg shadow-lg border text-sm";
    let color_class = match toast.level {
        ToastLevel::Info => "bg-white border-gray-200 text-gray-800",
        ToastLevel::Warning => "bg-yellow-50 border-yellow-400 text-yellow-700",
        ToastLevel::Error => "bg-red-50 border-red-400 text-red-700",
    };

    let icon = match toast.level {
        ToastLevel::Info => i::BsInfoCircle,
        ToastLevel::Warning => i::BsExclamationTriangle,
        ToastLevel::Error => i::BsExclamationCircle,
    };

    let exit_class = move || {
        if is_exiting.get() {
            "opacity-0 transition-opacity duration-300"
        } else {
            ""
        }
    };

    let message = toast.message.clone();
    let id = toast.id;

    view! {
        <div
            class=move || format!("{} {} {}", base_class, color_class, exit_class())
            role="alert"
        >
            <Icon icon />
            <div class="flex-1">{message}</div>
            <button
                class="opacity-70 hover:opacity-100 transition-opacity"
                aria-label="Close"
                on:click=move |_| {
                    is_exiting.set(true);
                    set_timeout(move || {
                        toasts.remove(id);
                    }, std::time::Duration::from_millis(300));
                }
            >
                <Icon icon=i::BsX />
            </button>
        </div>
    }
}

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="fixed bottom-0 right-0 p-4 sm:p-6 z-[100] flex flex-col gap-2 pointer-events-none">
            <div class="flex flex-col gap-2 items-end pointer-events-auto">
                {move || {
                    toasts.map(|toasts| {
                        view! {
                            <For
                                each=move || toasts.0.get()
                                key=|toast| toast.id
                                children=|toast| view! { <ToastItem toast /> }
                            />
                        }
                    })
                }}
            </div>
        </div>
    }
}
