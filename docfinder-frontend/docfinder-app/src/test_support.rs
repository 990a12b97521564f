use std::cell::RefCell;

use async_trait::async_trait;
use docfinder_api_types::{AnalysisResponse, SearchRequest};

use crate::{
    api::AnalysisApi,
    error::AppResult,
    global_state::toasts::{Notifier, ToastLevel},
};

#[derive(Default)]
pub(crate) struct RecordingNotifier(RefCell<Vec<(ToastLevel, String)>>);

impl RecordingNotifier {
    pub(crate) fn notices(&self) -> Vec<(ToastLevel, String)> {
        self.0.borrow().clone()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: ToastLevel, message: &str) {
        self.0.borrow_mut().push((level, message.to_string()));
    }
}

/// Replies with the same canned result every time and remembers what it was asked.
pub(crate) struct CannedApi {
    reply: AppResult<AnalysisResponse>,
    requests: RefCell<Vec<SearchRequest>>,
}

impl CannedApi {
    pub(crate) fn new(reply: AppResult<AnalysisResponse>) -> Self {
        Self {
            reply,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<SearchRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl AnalysisApi for CannedApi {
    async fn analyze(&self, request: &SearchRequest) -> AppResult<AnalysisResponse> {
        self.requests.borrow_mut().push(request.clone());
        self.reply.clone()
    }
}
