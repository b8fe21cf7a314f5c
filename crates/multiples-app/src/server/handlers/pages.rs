use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Form,
};

use crate::server::render;
use crate::server::state::AppState;
use crate::types::api::CalculatorForm;

/// GET / - Home page
pub async fn home() -> Html<String> {
    Html(render::home_page())
}

/// GET /calculator - Calculator page showing the last result, if any
pub async fn calculator(State(state): State<AppState>) -> Html<String> {
    let last = state.calculator().last_result().await;
    let input = last
        .as_ref()
        .map(|result| result.bound().to_string())
        .unwrap_or_default();

    let max_bound = state.config().calculator.max_bound;

    Html(render::calculator_page(&input, max_bound, last.as_deref(), None))
}

/// POST /calculator - Form submission
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<CalculatorForm>,
) -> impl IntoResponse {
    let max_bound = state.config().calculator.max_bound;

    match state.calculator().calculate(&form.number).await {
        Ok(result) => (
            StatusCode::OK,
            Html(render::calculator_page(
                &form.number,
                max_bound,
                Some(result.as_ref()),
                None,
            )),
        ),
        Err(e) => {
            let status = if e.is_input_error() {
                StatusCode::UNPROCESSABLE_ENTITY
            } else {
                StatusCode::from(&e)
            };
            let page = render::calculator_page(&form.number, max_bound, None, Some(&e.to_string()));
            (status, Html(page))
        }
    }
}
