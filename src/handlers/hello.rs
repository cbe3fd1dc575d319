use crate::routes;
use axum::{extract::Path, Json};

/// GET /hello/{name} handler - Personal greeting
#[utoipa::path(
    get,
    path = routes::HELLO_PERSON,
    params(
        ("name" = String, Path, description = "Who to greet")
    ),
    responses(
        (status = 200, description = "Greeting as a JSON string", body = String)
    ),
    tag = "fixtures"
)]
pub async fn hello_person_handler(Path(name): Path<String>) -> Json<String> {
    Json(format!("Hello {}! I hope you're doing well.", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_hello_person() {
        let app = Router::new().route(crate::routes::HELLO_PERSON, get(hello_person_handler));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/hello/Ferris")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let greeting: String = serde_json::from_slice(&body).unwrap();
        assert_eq!(greeting, "Hello Ferris! I hope you're doing well.");
    }
}
