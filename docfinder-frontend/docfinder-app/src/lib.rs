pub mod api;
pub mod components;
pub mod config;
pub mod control;
pub mod error;
pub mod global_state;
pub mod results;
pub mod search;
pub mod suggestions;
#[cfg(test)]
mod test_support;

use crate::api::{AnalysisClient, HttpAnalysisApi};
use crate::components::{
    doctor_results::DoctorResults, search_panel::SearchPanel, toast::ToastContainer,
};
use crate::config::AppConfig;
use crate::global_state::toasts::provide_toast_context;
use crate::results::{results_view, ResultsView};
use docfinder_api_types::AnalysisResponse;
use leptos::prelude::*;
use leptos_meta::*;

/// Id of the `<script type="application/json">` the server writes the page config into.
pub const CONFIG_ELEMENT_ID: &str = "docfinder-config";

#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let config_json = config.to_page_json();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=config_json></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body class="bg-gray-50">
                <App />
            </body>
        </html>
    }
}

/// Root component. Wires the config, api client and toast queue into context once,
/// the handlers below pick them up from there.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let config = use_context::<AppConfig>().unwrap_or_else(|| {
        let config = AppConfig::default();
        provide_context(config.clone());
        config
    });
    provide_context(AnalysisClient::new(HttpAnalysisApi::new(
        config.endpoint.clone(),
    )));
    provide_toast_context();

    let results = RwSignal::new(None::<ResultsView>);
    let on_results = move |response: AnalysisResponse| {
        log::info!(
            "{} doctors found for {}",
            response.doctors.len(),
            response.specialization
        );
        results.set(Some(results_view(&response)));
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/docfinder.css" />
        <Title text="Find a Specialist" />
        <main class="max-w-4xl mx-auto px-4 py-10 flex flex-col gap-6">
            <header>
                <h1 class="text-3xl font-bold text-gray-800">"Find the right specialist"</h1>
                <p class="text-gray-600">
                    "Describe what you're feeling and we'll suggest doctors near you."
                </p>
            </header>
            <SearchPanel on_results />
            <DoctorResults results />
        </main>
        <ToastContainer />
    }
}
