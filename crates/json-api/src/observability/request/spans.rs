//! Route labels for spans and metrics.

/// Paths served by the router. Anything else is reported as `unmatched`,
/// keeping the metric label set bounded.
const ROUTES: [&str; 7] = [
    "/",
    "/submit",
    "/employees",
    "/search-face",
    "/visitors",
    "/healthcheck",
    "/api-doc/openapi.json",
];

pub(super) fn route_label(path: &str) -> &'static str {
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    if let Some(route) = ROUTES.into_iter().find(|route| *route == trimmed) {
        return route;
    }

    if trimmed == "/docs" || trimmed.starts_with("/docs/") {
        return "/docs";
    }

    "unmatched"
}
