use url::form_urlencoded;

/// Routes that must never be a post-refresh destination.
const SESSION_ROUTES: [&str; 3] = ["/login", "/refresh", "/logout"];

/// Returns `next` when it is a same-site absolute path, else `/`.
///
/// Rejects scheme-relative (`//host`) and backslash (`/\host`) forms that
/// browsers resolve to another origin.
pub fn safe_next(next: Option<&str>) -> String {
    let Some(next) = next.map(str::trim).filter(|n| !n.is_empty()) else {
        return "/".to_string();
    };

    let same_site = next.starts_with('/')
        && !next.starts_with("//")
        && !next.starts_with("/\\")
        && !next.chars().any(|c| c.is_control());
    let path = next.split(['?', '#']).next().unwrap_or(next);

    if same_site && !SESSION_ROUTES.contains(&path) {
        next.to_string()
    } else {
        "/".to_string()
    }
}

/// `/refresh?next=<original path and query>`
pub fn refresh_location(path_and_query: &str) -> String {
    let next: String = form_urlencoded::byte_serialize(path_and_query.as_bytes()).collect();
    format!("/refresh?next={next}")
}
