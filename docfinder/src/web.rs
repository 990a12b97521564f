mod analyze_proxy;
mod error;
mod state;

use axum::{routing::post, Router};
use docfinder_app::{config::AppConfig, shell, App};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};

pub(crate) use analyze_proxy::Upstream;
pub(crate) use state::WebState;

/// Page routes rendered by leptos, the compiled bundle, and the `/api/analyze` relay.
pub(crate) fn create_router(state: WebState, page_config: AppConfig) -> Router {
    let routes = generate_route_list(App);
    let provide_page_config = move || provide_context(page_config.clone());
    let options = state.leptos_options.clone();
    Router::new()
        .route("/api/analyze", post(analyze_proxy::analyze))
        .leptos_routes_with_context(&state, routes, provide_page_config.clone(), move || {
            shell(options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler_with_context::<WebState, _>(
            provide_page_config,
            shell,
        ))
        .with_state(state)
}
