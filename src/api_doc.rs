use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hello-fixtures API",
        version = "0.1.0",
        description = "Greeting fixtures for exercising HTTP routing and test harnesses"
    ),
    paths(
        handlers::hello_world::hello_world_handler,
        handlers::hello::hello_person_handler,
        handlers::echo::echo_handler
    ),
    components(
        schemas(ErrorResponse)
    ),
    tags(
        (name = "fixtures", description = "Fixture endpoints")
    )
)]
pub struct ApiDoc;
