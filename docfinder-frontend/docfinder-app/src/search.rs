use docfinder_api_types::{AnalysisResponse, SearchRequest};

use crate::{
    api::AnalysisApi,
    config::Labels,
    control::{BusyGuard, Control},
    error::{AppError, AppResult, ValidationError},
    global_state::toasts::{Notifier, ToastLevel},
};

/// The raw values of the search form at the moment it was submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub symptoms: String,
    pub district: String,
    pub language: String,
}

impl FormValues {
    /// Symptoms are sent as typed, they only have to be non blank.
    pub fn validate(&self) -> Result<SearchRequest, ValidationError> {
        if self.symptoms.trim().is_empty() {
            return Err(ValidationError::EmptySymptoms);
        }
        if self.district.trim().is_empty() {
            return Err(ValidationError::MissingDistrict);
        }
        Ok(SearchRequest {
            symptoms: self.symptoms.clone(),
            district: self.district.clone(),
            language: self.language.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Never left the page.
    Invalid(ValidationError),
    Found(AnalysisResponse),
    Failed(AppError),
}

async fn fetch_analysis<A>(api: &A, request: &SearchRequest) -> AppResult<AnalysisResponse>
where
    A: AnalysisApi + ?Sized,
{
    let response = api.analyze(request).await?;
    if let Some(error) = response.domain_error() {
        return Err(AppError::Domain(error.to_string()));
    }
    Ok(response)
}

fn report_failure<N: Notifier + ?Sized>(err: &AppError, notifier: &N) {
    match err {
        AppError::Domain(message) => log::warn!("analysis rejected by server: {message}"),
        other => log::error!("analysis request failed: {other}"),
    }
    notifier.notify(ToastLevel::Error, &err.user_message());
}

/// Handles a submission of the search form.
///
/// Invalid forms are reported and nothing is sent. Otherwise `submit` is locked for the
/// duration of the request and released again however the request ends.
pub async fn submit_search<A, N, C>(
    form: &FormValues,
    api: &A,
    labels: &Labels,
    notifier: &N,
    submit: &C,
) -> SubmitOutcome
where
    A: AnalysisApi + ?Sized,
    N: Notifier + ?Sized,
    C: Control + ?Sized,
{
    let request = match form.validate() {
        Ok(request) => request,
        Err(invalid) => {
            notifier.notify(ToastLevel::Warning, &invalid.to_string());
            return SubmitOutcome::Invalid(invalid);
        }
    };
    let _busy = BusyGuard::engage(submit, &labels.submitting);
    log::info!(
        "searching for doctors in {} ({})",
        request.district,
        request.language
    );
    match fetch_analysis(api, &request).await {
        Ok(response) => SubmitOutcome::Found(response),
        Err(err) => {
            report_failure(&err, notifier);
            SubmitOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::ButtonState;
    use crate::error::{SystemError, GENERIC_FAILURE};
    use crate::test_support::{CannedApi, RecordingNotifier};
    use async_trait::async_trait;
    use docfinder_api_types::Doctor;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn form(symptoms: &str, district: &str) -> FormValues {
        FormValues {
            symptoms: symptoms.to_string(),
            district: district.to_string(),
            language: "en".to_string(),
        }
    }

    fn cardiology() -> AnalysisResponse {
        AnalysisResponse {
            specialization: "Cardiology".to_string(),
            analysis: "Chest pain is usually seen by a cardiologist.".to_string(),
            doctors: vec![Doctor {
                name: "Dr. Rahman".to_string(),
                ..Default::default()
            }],
            error: None,
        }
    }

    fn submit(
        form: &FormValues,
        api: &CannedApi,
        notifier: &RecordingNotifier,
        button: &RefCell<ButtonState>,
    ) -> SubmitOutcome {
        block_on(submit_search(form, api, &Labels::default(), notifier, button))
    }

    #[test]
    fn empty_symptoms_never_reach_the_network() {
        let api = CannedApi::new(Ok(cardiology()));
        let notifier = RecordingNotifier::default();
        let button = RefCell::new(ButtonState::ready("Find Specialists"));
        let outcome = submit(&form("  ", "Dhaka"), &api, &notifier, &button);
        assert!(matches!(
            outcome,
            SubmitOutcome::Invalid(ValidationError::EmptySymptoms)
        ));
        assert!(api.requests().is_empty());
        assert_eq!(
            notifier.notices(),
            vec![(
                ToastLevel::Warning,
                "Please describe your symptoms".to_string()
            )]
        );
        assert_eq!(button.borrow().clone(), ButtonState::ready("Find Specialists"));
    }

    #[test]
    fn missing_district_never_reaches_the_network() {
        let api = CannedApi::new(Ok(cardiology()));
        let notifier = RecordingNotifier::default();
        let button = RefCell::new(ButtonState::ready("Find Specialists"));
        let outcome = submit(&form("chest pain", ""), &api, &notifier, &button);
        assert!(matches!(
            outcome,
            SubmitOutcome::Invalid(ValidationError::MissingDistrict)
        ));
        assert!(api.requests().is_empty());
        assert_eq!(
            notifier.notices(),
            vec![(ToastLevel::Warning, "Please select your district".to_string())]
        );
    }

    #[test]
    fn valid_form_posts_the_values_as_typed() {
        let api = CannedApi::new(Ok(cardiology()));
        let notifier = RecordingNotifier::default();
        let button = RefCell::new(ButtonState::ready("Find Specialists"));
        let outcome = submit(&form("chest pain ", "Dhaka"), &api, &notifier, &button);
        let SubmitOutcome::Found(response) = outcome else {
            panic!("expected a response");
        };
        assert_eq!(response.specialization, "Cardiology");
        assert_eq!(
            api.requests(),
            vec![SearchRequest {
                symptoms: "chest pain ".to_string(),
                district: "Dhaka".to_string(),
                language: "en".to_string(),
            }]
        );
        assert!(notifier.is_empty());
        assert_eq!(button.borrow().clone(), ButtonState::ready("Find Specialists"));
    }

    #[test]
    fn domain_error_uses_the_error_channel() {
        let api = CannedApi::new(Ok(AnalysisResponse {
            error: Some("District not supported".to_string()),
            ..Default::default()
        }));
        let notifier = RecordingNotifier::default();
        let button = RefCell::new(ButtonState::ready("Find Specialists"));
        let outcome = submit(&form("fever", "Sylhet"), &api, &notifier, &button);
        assert!(matches!(outcome, SubmitOutcome::Failed(AppError::Domain(_))));
        assert_eq!(
            notifier.notices(),
            vec![(ToastLevel::Error, "District not supported".to_string())]
        );
        assert_eq!(button.borrow().clone(), ButtonState::ready("Find Specialists"));
    }

    #[test]
    fn transport_failure_uses_the_same_channel_with_a_generic_message() {
        let api = CannedApi::new(Err(AppError::SystemError(SystemError::Message(
            "connection refused".to_string(),
        ))));
        let notifier = RecordingNotifier::default();
        let button = RefCell::new(ButtonState::ready("Find Specialists"));
        let outcome = submit(&form("fever", "Sylhet"), &api, &notifier, &button);
        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(AppError::SystemError(_))
        ));
        assert_eq!(
            notifier.notices(),
            vec![(ToastLevel::Error, GENERIC_FAILURE.to_string())]
        );
        assert_eq!(button.borrow().clone(), ButtonState::ready("Find Specialists"));
    }

    /// Checks what the button looks like while the request is in flight.
    struct PeekingApi<'a> {
        button: &'a RefCell<ButtonState>,
        seen: RefCell<Option<ButtonState>>,
    }

    #[async_trait(?Send)]
    impl<'a> AnalysisApi for PeekingApi<'a> {
        async fn analyze(&self, _request: &SearchRequest) -> AppResult<AnalysisResponse> {
            *self.seen.borrow_mut() = Some(self.button.borrow().clone());
            Ok(cardiology())
        }
    }

    #[test]
    fn button_is_locked_while_the_request_runs() {
        let notifier = RecordingNotifier::default();
        let button = RefCell::new(ButtonState::ready("Find Specialists"));
        let api = PeekingApi {
            button: &button,
            seen: RefCell::new(None),
        };
        let labels = Labels::default();
        block_on(submit_search(
            &form("headache", "Dhaka"),
            &api,
            &labels,
            &notifier,
            &button,
        ));
        assert_eq!(
            api.seen.borrow().clone(),
            Some(ButtonState::busy("Analyzing Symptoms..."))
        );
        assert_eq!(button.borrow().clone(), ButtonState::ready("Find Specialists"));
    }
}
