use icondata as i;
use leptos::{html, prelude::*};
use leptos_icons::Icon;

use crate::results::{CardAction, DoctorCard, DoctorsView, ResultsView};

fn action_icon(action: &CardAction) -> icondata::Icon {
    match action {
        CardAction::Book => i::BsCalendar,
        CardAction::Call { .. } => i::BsTelephone,
        CardAction::ViewProfile => i::BsPerson,
    }
}

#[component]
fn DoctorCardView(card: DoctorCard) -> impl IntoView {
    let DoctorCard {
        name,
        specialization,
        location,
        rating,
        experience,
        languages,
        actions,
    } = card;
    let badges = languages
        .into_iter()
        .map(|language| {
            view! {
                <span class="bg-green-100 text-green-800 px-2 py-1 rounded text-sm flex items-center gap-1">
                    <Icon icon=i::BsTranslate />
                    {language}
                </span>
            }
        })
        .collect_view();
    let buttons = actions
        .into_iter()
        .map(|action| {
            let class = if action.is_primary() {
                "bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-lg font-medium flex items-center gap-2"
            } else {
                "border border-gray-300 hover:bg-gray-50 px-4 py-2 rounded-lg font-medium flex items-center gap-2"
            };
            view! {
                <button type="button" class=class>
                    <Icon icon=action_icon(&action) />
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="border border-gray-200 rounded-lg p-6 hover:shadow-lg transition-shadow bg-gradient-to-r from-white to-blue-50">
            <div class="flex justify-between items-start mb-4">
                <div>
                    <h4 class="text-xl font-semibold text-gray-800">{name}</h4>
                    <p class="text-blue-600 font-medium flex items-center gap-1">
                        <Icon icon=i::BsHospital />
                        {specialization}
                    </p>
                    <p class="text-gray-600 flex items-center gap-1">
                        <Icon icon=i::BsGeoAlt />
                        {location}
                    </p>
                </div>
                <div class="text-right">
                    <div class="flex items-center space-x-1 mb-1">
                        <span class="text-yellow-400"><Icon icon=i::BsStarFill /></span>
                        <span class="font-semibold">{rating}</span>
                    </div>
                    <p class="text-sm text-gray-500">{experience}</p>
                </div>
            </div>
            <div class="flex flex-wrap gap-2 mb-4">{badges}</div>
            <div class="flex flex-wrap gap-3">{buttons}</div>
        </div>
    }
}

fn doctors_list(doctors: DoctorsView) -> AnyView {
    match doctors {
        DoctorsView::Empty(notice) => view! {
            <div class="bg-yellow-50 border-l-4 border-yellow-400 p-4">
                <p class="text-yellow-700">{notice}</p>
            </div>
        }
        .into_any(),
        DoctorsView::Cards(cards) => cards
            .into_iter()
            .map(|card| view! { <DoctorCardView card /> })
            .collect_view()
            .into_any(),
    }
}

#[cfg(feature = "hydrate")]
fn scroll_smoothly(element: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// The results section. Stays hidden until the first successful search, then scrolls
/// itself into view every time new results land.
#[component]
pub fn DoctorResults(#[prop(into)] results: Signal<Option<ResultsView>>) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();

    Effect::new(move |_| {
        if results.with(Option::is_some) {
            #[cfg(feature = "hydrate")]
            if let Some(section) = section.get() {
                scroll_smoothly(&section);
            }
        }
    });

    view! {
        <section
            node_ref=section
            class=move || if results.with(Option::is_some) { "mt-8 flex flex-col gap-6" } else { "hidden" }
        >
            {move || {
                results
                    .get()
                    .map(|ResultsView { specialization, analysis, doctors }| {
                        view! {
                            <div class="bg-blue-50 rounded-lg p-4">
                                <p class="text-gray-700 mb-2">
                                    <strong>"Likely Specialization: "</strong>
                                    {specialization}
                                </p>
                                <p class="text-gray-700">{analysis}</p>
                            </div>
                            <div class="flex flex-col gap-4">{doctors_list(doctors)}</div>
                        }
                    })
            }}
        </section>
    }
}
