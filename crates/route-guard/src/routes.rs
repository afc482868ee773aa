//! Static route table and path matching.

/// A route in the console's navigation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path pattern; `:name` segments capture one path segment
    pub pattern: &'static str,
    /// Stable route name, used by views and the CLI output
    pub name: &'static str,
    /// Whether navigation requires a stored token
    pub requires_auth: bool,
}

/// The console's route table.
///
/// Order matters: matching is first-wins, and literal routes are listed
/// before the parameter routes that would otherwise swallow them
/// (`/schools/create` before `/schools/:id`).
const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        pattern: "/login",
        name: "login",
        requires_auth: false,
    },
    RouteEntry {
        pattern: "/",
        name: "dashboard",
        requires_auth: true,
    },
    RouteEntry {
        pattern: "/schools",
        name: "schools",
        requires_auth: true,
    },
    RouteEntry {
        pattern: "/schools/create",
        name: "schools-create",
        requires_auth: true,
    },
    RouteEntry {
        pattern: "/schools/:id/edit",
        name: "schools-edit",
        requires_auth: true,
    },
    RouteEntry {
        pattern: "/schools/:id/admins",
        name: "school-admins",
        requires_auth: true,
    },
    RouteEntry {
        pattern: "/schools/:id/admins/create",
        name: "school-admins-create",
        requires_auth: true,
    },
    RouteEntry {
        pattern: "/schools/:id",
        name: "school-detail",
        requires_auth: true,
    },
];

/// A successful route lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The matched table entry
    pub route: &'static RouteEntry,
    /// Captured `:param` values, in pattern order
    pub params: Vec<(String, String)>,
}

/// The full route table.
pub fn table() -> &'static [RouteEntry] {
    ROUTES
}

/// Find the route for a path. First match in table order wins.
pub fn find(path: &str) -> Option<RouteMatch> {
    let segments = split_segments(path);

    for route in ROUTES {
        if let Some(params) = match_pattern(route.pattern, &segments) {
            return Some(RouteMatch { route, params });
        }
    }
    None
}

/// Split a path into segments, ignoring empty ones so trailing slashes
/// and `//` normalize away. `/` and `` both yield no segments.
fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Match a pattern against path segments, returning captures on success.
fn match_pattern(pattern: &str, segments: &[&str]) -> Option<Vec<(String, String)>> {
    let pattern_segments = split_segments(pattern);
    if pattern_segments.len() != segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (pat, seg) in pattern_segments.iter().zip(segments) {
        if let Some(name) = pat.strip_prefix(':') {
            params.push((name.to_string(), (*seg).to_string()));
        } else if pat != seg {
            return None;
        }
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(path: &str) -> Option<&'static str> {
        find(path).map(|m| m.route.name)
    }

    #[test]
    fn test_literal_routes() {
        assert_eq!(named("/login"), Some("login"));
        assert_eq!(named("/"), Some("dashboard"));
        assert_eq!(named("/schools"), Some("schools"));
        assert_eq!(named("/schools/create"), Some("schools-create"));
    }

    #[test]
    fn test_param_capture() {
        let m = find("/schools/42/edit").unwrap();
        assert_eq!(m.route.name, "schools-edit");
        assert_eq!(m.params, vec![("id".to_string(), "42".to_string())]);

        let m = find("/schools/abc-123").unwrap();
        assert_eq!(m.route.name, "school-detail");
        assert_eq!(m.params, vec![("id".to_string(), "abc-123".to_string())]);
    }

    #[test]
    fn test_nested_admin_routes() {
        let m = find("/schools/7/admins").unwrap();
        assert_eq!(m.route.name, "school-admins");
        assert_eq!(m.params, vec![("id".to_string(), "7".to_string())]);

        assert_eq!(named("/schools/7/admins/create"), Some("school-admins-create"));
    }

    #[test]
    fn test_literal_beats_param() {
        // "/schools/create" must not resolve to school-detail with id="create"
        let m = find("/schools/create").unwrap();
        assert_eq!(m.route.name, "schools-create");
        assert!(m.params.is_empty());
    }

    #[test]
    fn test_trailing_slash_normalized() {
        assert_eq!(named("/schools/"), Some("schools"));
        assert_eq!(named("/schools/42/edit/"), Some("schools-edit"));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(named("/unknown"), None);
        assert_eq!(named("/schools/1/teachers"), None);
        assert_eq!(named("/schools/1/admins/2"), None);
    }

    #[test]
    fn test_login_is_the_only_public_route() {
        let public: Vec<_> = table().iter().filter(|r| !r.requires_auth).collect();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].name, "login");
    }

    #[test]
    fn test_route_names_unique() {
        let names: std::collections::HashSet<_> = table().iter().map(|r| r.name).collect();
        assert_eq!(names.len(), table().len());
    }
}
