//! App Router

use salvo::Router;

use crate::{employees, middleware::BodyLimit, visitors};

/// Application routes, all behind the request body limit.
pub(crate) fn app_router(max_body_bytes: u64) -> Router {
    Router::new()
        .hoop(BodyLimit::new(max_body_bytes))
        .push(Router::with_path("submit").post(employees::create::handler))
        .push(Router::with_path("employees").get(employees::index::handler))
        .push(Router::with_path("search-face").post(visitors::search::handler))
        .push(Router::with_path("visitors").get(visitors::index::handler))
}
