// web_app/components/common.rs - Reusable UI components
//
// Small, stateless components shared by every source page.
// Philosophy: pure components that receive all data via props.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-emerald-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Generic error panel
///
/// Renders any non-subscription failure: transport, provider, decode.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Search Failed"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Subscription upsell panel
///
/// Shown when a provider answers 403 with a subscription error. This is
/// a distinct UI state, never the generic error panel.
#[component]
pub fn SubscriptionPanel(
    /// The provider's message, displayed beneath the headline
    message: String,
) -> impl IntoView {
    view! {
        <div class="bg-amber-50 border border-amber-200 rounded-xl p-8 text-center">
            <div class="text-4xl mb-3">"🔒"</div>
            <h3 class="text-amber-900 font-bold text-lg mb-2">"Subscription Required"</h3>
            <p class="text-amber-700 text-sm mb-6">{message}</p>
            <a
                href="/pricing"
                class="inline-block px-6 py-3 bg-amber-600 text-white rounded-lg \
                       hover:bg-amber-700 transition-colors font-semibold shadow-sm"
            >
                "Upgrade Your Plan"
            </a>
        </div>
    }
}

/// Text input component
///
/// A styled text input bound to a signal.
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    let class = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                 focus:ring-2 focus:ring-emerald-500 focus:border-transparent \
                 outline-none transition-shadow shadow-sm";

    view! {
        <input
            type="text"
            placeholder=placeholder
            class=class
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}

/// Badge component
///
/// A small tag, used for record counts and the ambiguous-row marker.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    let class = match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "red" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-red-100 text-red-800 border border-red-200",
        "amber" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-amber-100 text-amber-800 border border-amber-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    };

    view! {
        <span class=class>
            {children()}
        </span>
    }
}

/// Modal wrapper component
///
/// Backdrop plus scrollable body; open/close is the parent's job.
#[component]
pub fn ModalWrapper(
    /// Modal content
    children: Children,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal title
    #[prop(default = "")]
    title: &'static str,
) -> impl IntoView {
    // Close on escape key
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    let handle_backdrop_click = move |_| {
        on_close.run(());
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 sm:p-6"
            on:keydown=handle_keydown
        >
            <div
                class="absolute inset-0 bg-gray-900/60 backdrop-blur-sm transition-opacity"
                on:click=handle_backdrop_click
            ></div>

            <div
                class="relative bg-white rounded-2xl shadow-2xl w-full max-w-2xl max-h-[90vh] flex flex-col overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-center px-6 py-4 border-b border-gray-100 bg-gray-50/50">
                    <h2 class="text-xl font-bold text-gray-800">{title}</h2>
                    <button
                        class="text-gray-400 hover:text-gray-600 hover:bg-gray-100 rounded-full p-2 transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
                        </svg>
                    </button>
                </div>

                <div class="p-6 overflow-y-auto custom-scrollbar">
                    {children()}
                </div>
            </div>
        </div>
    }
}
