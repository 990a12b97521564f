use axum::extract::FromRef;
use leptos::config::LeptosOptions;

use super::analyze_proxy::Upstream;

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) leptos_options: LeptosOptions,
    pub(crate) upstream: Upstream,
}

impl FromRef<WebState> for LeptosOptions {
    fn from_ref(input: &WebState) -> Self {
        input.leptos_options.clone()
    }
}

impl FromRef<WebState> for Upstream {
    fn from_ref(input: &WebState) -> Self {
        input.upstream.clone()
    }
}
