use crate::routes;
use axum::{extract::Path, Json};

/// GET /echo/{content} handler - Returns the path segment unchanged
#[utoipa::path(
    get,
    path = routes::ECHO,
    params(
        ("content" = String, Path, description = "Text to echo back")
    ),
    responses(
        (status = 200, description = "The content as a JSON string", body = String)
    ),
    tag = "fixtures"
)]
pub async fn echo_handler(Path(content): Path<String>) -> Json<String> {
    Json(content)
}
