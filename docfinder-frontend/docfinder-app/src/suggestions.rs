//! The "AI Suggestions" button. Nothing here calls out anywhere: the follow-up questions
//! come from the configured keyword table.
use crate::{
    config::{Labels, SuggestionTable},
    control::{BusyGuard, Control},
    error::ValidationError,
    global_state::toasts::{Notifier, ToastLevel},
};

/// Builds the block appended below the symptoms.
///
/// Every rule whose keyword shows up in `symptoms` (ignoring case) contributes a `- question`
/// line under the table header. If none match, the fallback prompt is used on its own.
pub fn suggestion_for(symptoms: &str, table: &SuggestionTable) -> String {
    let lowered = symptoms.to_lowercase();
    let questions: Vec<&str> = table
        .rules
        .iter()
        .filter(|rule| !rule.keyword.is_empty() && lowered.contains(&rule.keyword.to_lowercase()))
        .map(|rule| rule.question.as_str())
        .collect();
    if questions.is_empty() {
        return table.fallback.clone();
    }
    let mut suggestion = table.header.clone();
    for question in questions {
        suggestion.push_str("\n- ");
        suggestion.push_str(question);
    }
    suggestion
}

/// Handles a press of the suggestion button, returning the new symptoms text.
///
/// Empty input is reported through `notifier` and leaves the text alone (`None`).
pub fn run_suggestions<N, C>(
    symptoms: &str,
    table: &SuggestionTable,
    labels: &Labels,
    notifier: &N,
    trigger: &C,
) -> Option<String>
where
    N: Notifier + ?Sized,
    C: Control + ?Sized,
{
    if symptoms.trim().is_empty() {
        notifier.notify(
            ToastLevel::Warning,
            &ValidationError::NothingToSuggestFrom.to_string(),
        );
        return None;
    }
    let _busy = BusyGuard::engage(trigger, &labels.suggesting);
    let suggestion = suggestion_for(symptoms, table);
    log::debug!("appending suggestion: {suggestion:?}");
    Some(format!("{symptoms}\n\n{suggestion}"))
}
