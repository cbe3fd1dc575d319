use crate::error::{ApiError, ErrorResponse};
use crate::greeting::HelloWorld;
use crate::routes;
use crate::sink::BufferedBody;
use crate::state::AppState;
use axum::extract::State;

/// GET /hello_world handler - Greeting fixture
///
/// Writes the greeting produced by the configured strategy. A decorated
/// greeting that cannot be formatted or written yields 500.
#[utoipa::path(
    get,
    path = routes::HELLO_WORLD,
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain"),
        (status = 500, description = "Greeting could not be produced", body = ErrorResponse)
    ),
    tag = "fixtures"
)]
pub async fn hello_world_handler(State(state): State<AppState>) -> Result<BufferedBody, ApiError> {
    let mut body = match state.config.response_limit {
        Some(limit) => BufferedBody::with_limit(limit),
        None => BufferedBody::new(),
    };

    HelloWorld.serve(
        state.config.greeting_strategy,
        state.text_art.as_ref(),
        &mut body,
    )?;

    tracing::debug!(
        "Served {} greeting ({} bytes)",
        state.config.greeting_strategy.as_str(),
        body.as_bytes().len()
    );
    Ok(body)
}
