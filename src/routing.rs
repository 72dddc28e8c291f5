//! Application router configuration.

use axum::{
    Router, middleware,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};

use crate::{
    AppState, Error, dashboard::get_dashboard, endpoints, logging::logging_middleware,
    transaction::{get_categories, get_transactions},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::TRANSACTIONS_API, get(get_transactions))
        .route(endpoints::DASHBOARD_API, get(get_dashboard))
        .route(endpoints::CATEGORIES_API, get(get_categories))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// The root path '/' redirects to the dashboard data.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_API)
}

async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}
