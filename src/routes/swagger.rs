//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ProjectedImage, Projection, QueryLogEntry};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::search::search_images,
        super::latest::latest_queries,
    ),
    info(
        title = "snapquery API",
        version = "0.1.0",
        description = "Image search proxy with best-effort query logging",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Search", description = "Image search proxy"),
        (name = "QueryLog", description = "Recent query history"),
    ),
    components(
        schemas(
            ProjectedImage,
            Projection,
            QueryLogEntry,
        )
    ),
)]
pub struct ApiDoc;
