use docfinder_api_types::AnalysisResponse;
use icondata as i;
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_icons::Icon;

use crate::{
    api::AnalysisClient,
    components::loading::Loading,
    config::AppConfig,
    control::ButtonState,
    global_state::toasts::Toasts,
    search::{submit_search, FormValues, SubmitOutcome},
    suggestions::run_suggestions,
};

/// The symptom form. Successful searches are handed to `on_results`.
#[component]
pub fn SearchPanel(#[prop(into)] on_results: Callback<AnalysisResponse>) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let client = expect_context::<AnalysisClient>();
    let toasts = expect_context::<Toasts>();

    let symptoms = RwSignal::new(String::new());
    let district = RwSignal::new(String::new());
    let language = RwSignal::new(
        config
            .languages
            .first()
            .map(|language| language.value.clone())
            .unwrap_or_default(),
    );
    let submit_button = RwSignal::new(ButtonState::ready(config.labels.submit.clone()));
    let suggest_button = RwSignal::new(ButtonState::ready(config.labels.suggest.clone()));

    let labels = config.labels.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = FormValues {
            symptoms: symptoms.get_untracked(),
            district: district.get_untracked(),
            language: language.get_untracked(),
        };
        let api = client.0.clone();
        let labels = labels.clone();
        spawn_local(async move {
            let outcome = submit_search(&form, api.as_ref(), &labels, &toasts, &submit_button).await;
            if let SubmitOutcome::Found(response) = outcome {
                on_results.run(response);
            }
        });
    };

    let suggestions = config.suggestions.clone();
    let labels = config.labels.clone();
    let on_suggest = move |_| {
        let current = symptoms.get_untracked();
        if let Some(updated) =
            run_suggestions(&current, &suggestions, &labels, &toasts, &suggest_button)
        {
            symptoms.set(updated);
        }
    };

    let districts = config
        .districts
        .iter()
        .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
        .collect_view();
    let languages = config
        .languages
        .iter()
        .map(|option| view! { <option value=option.value.clone()>{option.label.clone()}</option> })
        .collect_view();

    view! {
        <form class="bg-white rounded-xl shadow-md p-6 flex flex-col gap-4" on:submit=on_submit>
            <label class="flex flex-col gap-2">
                <span class="font-medium text-gray-700">"Describe your symptoms"</span>
                <textarea
                    class="w-full border border-gray-300 rounded-lg p-3 min-h-32"
                    placeholder="e.g. I have had a headache and fever since yesterday"
                    prop:value=move || symptoms.get()
                    on:input=move |ev| symptoms.set(event_target_value(&ev))
                ></textarea>
            </label>
            <div class="grid md:grid-cols-2 gap-4">
                <label class="flex flex-col gap-2">
                    <span class="font-medium text-gray-700">"District"</span>
                    <select
                        class="border border-gray-300 rounded-lg p-2"
                        prop:value=move || district.get()
                        on:change=move |ev| district.set(event_target_value(&ev))
                    >
                        <option value="">"Select your district"</option>
                        {districts}
                    </select>
                </label>
                <label class="flex flex-col gap-2">
                    <span class="font-medium text-gray-700">"Language"</span>
                    <select
                        class="border border-gray-300 rounded-lg p-2"
                        prop:value=move || language.get()
                        on:change=move |ev| language.set(event_target_value(&ev))
                    >
                        {languages}
                    </select>
                </label>
            </div>
            <div class="flex flex-wrap gap-3">
                <button
                    type="submit"
                    class="bg-blue-600 hover:bg-blue-700 disabled:opacity-60 text-white px-6 py-3 rounded-lg font-medium flex items-center"
                    disabled=move || submit_button.get().disabled
                >
                    {move || {
                        if submit_button.get().disabled {
                            view! { <Loading /> }.into_any()
                        } else {
                            view! { <Icon icon=i::BsSearch /> }.into_any()
                        }
                    }}
                    <span class="ml-2">{move || submit_button.get().label}</span>
                </button>
                <button
                    type="button"
                    class="border border-gray-300 hover:bg-gray-50 disabled:opacity-60 px-6 py-3 rounded-lg font-medium flex items-center"
                    disabled=move || suggest_button.get().disabled
                    on:click=on_suggest
                >
                    <Icon icon=i::BsStars />
                    <span class="ml-2">{move || suggest_button.get().label}</span>
                </button>
            </div>
        </form>
    }
}
