use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::NavError;

/// An addressable screen plus its arguments.
///
/// `name` is the pattern the screen is registered under (`"details/{itemId}"`),
/// arguments fill its placeholder. A route built from a concrete string
/// (`"details/Item 2"`) has no arguments until something that knows the
/// patterns splits it (see [`NavController::with_patterns`]).
///
/// Equality is by concrete [`path`](Self::path), plus any arguments that fill
/// no placeholder compared regardless of order, so both spellings of the same
/// screen are equal.
///
/// ```rust
/// use multiscreen_navigation::Route;
///
/// let r = Route::new("details/{itemId}").arg("itemId", "a/b");
/// assert_eq!(r.path(), "details/a%2Fb");
/// assert_eq!(r.param("itemId"), Some("a/b"));
/// assert_eq!(r, Route::from("details/a%2Fb"));
/// ```
///
/// [`NavController::with_patterns`]: crate::NavController::with_patterns
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Route {
    name: String,
    params: SmallVec<[(String, String); 1]>,
}

impl Route {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: SmallVec::new(),
        }
    }

    /// Sets (or replaces) argument `key`.
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key, value)),
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Concrete route string: placeholders replaced by escaped argument values.
    /// A placeholder without an argument is left as written.
    pub fn path(&self) -> String {
        self.name
            .split('/')
            .map(|seg| match placeholder_name(seg) {
                Some(key) => match self.param(key) {
                    Some(v) => escape(v),
                    None => seg.to_string(),
                },
                None => seg.to_string(),
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// `self` satisfies `target` when they are equal, or when `target` is a
    /// bare placeholder pattern (`details/{itemId}` without arguments) that
    /// `self`'s path fits.
    pub fn matches(&self, target: &Route) -> bool {
        if target.params.is_empty()
            && let Ok(pattern) = RoutePattern::parse(&target.name)
            && pattern.param_name().is_some()
        {
            return pattern.match_path(&self.path()).is_some();
        }
        self == target
    }

    /// Whether `key` names a placeholder of this route's pattern.
    fn fills_placeholder(&self, key: &str) -> bool {
        self.name.split('/').any(|seg| placeholder_name(seg) == Some(key))
    }

    /// Arguments that do not appear in the path, in a stable order.
    fn extra_params(&self) -> Vec<(&str, &str)> {
        let mut extra: Vec<_> = self
            .params()
            .filter(|(k, _)| !self.fills_placeholder(k))
            .collect();
        extra.sort_unstable();
        extra
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.path() == other.path() && self.extra_params() == other.extra_params()
    }
}

impl Eq for Route {}

impl std::hash::Hash for Route {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.path().hash(state);
        self.extra_params().hash(state);
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// A concrete route string, not yet split into pattern and arguments.
impl From<&str> for Route {
    fn from(path: &str) -> Self {
        Route::new(path)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// Parsed route pattern: `/`-separated literal segments with at most one
/// `{name}` placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Result<Self, NavError> {
        let invalid = |reason| NavError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };
        if pattern.is_empty() {
            return Err(invalid("pattern is empty"));
        }
        let mut segments = Vec::new();
        for seg in pattern.split('/') {
            if seg.is_empty() {
                return Err(invalid("empty segment"));
            }
            let seg = match placeholder_name(seg) {
                Some("") => return Err(invalid("placeholder has no name")),
                Some(name) => Segment::Param(name.to_string()),
                None if seg.contains('{') || seg.contains('}') => {
                    return Err(invalid("placeholder must span a whole segment"));
                }
                None => Segment::Literal(seg.to_string()),
            };
            segments.push(seg);
        }
        if segments
            .iter()
            .filter(|s| matches!(s, Segment::Param(_)))
            .count()
            > 1
        {
            return Err(invalid("more than one placeholder"));
        }
        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn param_name(&self) -> Option<&str> {
        self.segments.iter().find_map(|s| match s {
            Segment::Param(p) => Some(p.as_str()),
            Segment::Literal(_) => None,
        })
    }

    pub fn literal_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count()
    }

    /// Match a concrete route string, capturing (and un-escaping) the
    /// placeholder. Empty captures do not match.
    pub fn match_path(&self, path: &str) -> Option<Route> {
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }
        let mut route = Route::new(self.source.clone());
        for (seg, part) in self.segments.iter().zip(parts) {
            match seg {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(_) if part.is_empty() => return None,
                Segment::Param(name) => route = route.arg(name.clone(), unescape(part)),
            }
        }
        Some(route)
    }

    /// Split a route built from a concrete string into pattern and
    /// arguments. Routes that already carry arguments, or whose name is the
    /// pattern itself, are returned unchanged.
    pub fn canonicalize<'a>(
        patterns: impl IntoIterator<Item = &'a RoutePattern>,
        route: Route,
    ) -> Route {
        if !route.params.is_empty() {
            return route;
        }
        let patterns: Vec<&RoutePattern> = patterns.into_iter().collect();
        if patterns.iter().any(|p| p.source == route.name) {
            return route;
        }
        best_match(patterns.iter().copied().map(|p| (p, ())), &route.name)
            .map(|(r, _)| r)
            .unwrap_or(route)
    }

    /// Whether a structured route addresses this pattern.
    pub fn accepts(&self, route: &Route) -> bool {
        route.name() == self.source
            && self
                .param_name()
                .is_none_or(|p| route.param(p).is_some_and(|v| !v.is_empty()))
    }
}

/// Best pattern for a concrete route string: the one with more literal
/// segments wins, ties go to the earliest.
pub(crate) fn best_match<'a, T>(
    candidates: impl IntoIterator<Item = (&'a RoutePattern, T)>,
    path: &str,
) -> Option<(Route, T)> {
    let mut best: Option<(usize, Route, T)> = None;
    for (pattern, tag) in candidates {
        let Some(route) = pattern.match_path(path) else {
            continue;
        };
        let score = pattern.literal_count();
        if best.as_ref().is_none_or(|(s, _, _)| score > *s) {
            best = Some((score, route, tag));
        }
    }
    best.map(|(_, route, tag)| (route, tag))
}

fn placeholder_name(seg: &str) -> Option<&str> {
    seg.strip_prefix('{').and_then(|s| s.strip_suffix('}'))
}

/// Percent-escapes `%` and `/` so a value fits in one path segment.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => out.push_str("%25"),
            '/' => out.push_str("%2F"),
            c => out.push(c),
        }
    }
    out
}

/// Inverse of [`escape`]. Unknown `%` sequences are kept verbatim.
pub fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(i) = rest.find('%') {
        out.push_str(&rest[..i]);
        let tail = &rest[i..];
        if tail.starts_with("%25") {
            out.push('%');
            rest = &tail[3..];
        } else if tail.starts_with("%2F") || tail.starts_with("%2f") {
            out.push('/');
            rest = &tail[3..];
        } else {
            out.push('%');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_equality_by_name_and_args() {
        let a = Route::new("details/{itemId}").arg("itemId", "Item 1");
        let b = Route::new("details/{itemId}").arg("itemId", "Item 1");
        let c = Route::new("details/{itemId}").arg("itemId", "Item 2");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.clone().arg("itemId", "Item 2"), c);
    }

    #[test]
    fn test_path_substitutes_and_escapes() {
        assert_eq!(Route::new("home").path(), "home");
        assert_eq!(
            Route::new("details/{itemId}").arg("itemId", "Item 1").path(),
            "details/Item 1"
        );
        assert_eq!(
            Route::new("details/{itemId}").arg("itemId", "50%/x").path(),
            "details/50%25%2Fx"
        );
        assert_eq!(Route::new("details/{itemId}").path(), "details/{itemId}");
    }

    #[test]
    fn test_escape_roundtrip_for_separator() {
        for raw in ["a/b", "%2F", "100%", "plain", "/lead", "%%"] {
            assert_eq!(unescape(&escape(raw)), raw);
        }
        assert_eq!(unescape("50%zz"), "50%zz");
    }

    #[test]
    fn test_pattern_parse_rejects_bad_input() {
        for bad in ["", "a//b", "/a", "a/{}", "a/{x}/{y}", "a/x{y}", "a/{y"] {
            assert!(
                matches!(RoutePattern::parse(bad), Err(NavError::InvalidPattern { .. })),
                "{bad} should be rejected"
            );
        }
        let p = RoutePattern::parse("details/{itemId}").unwrap();
        assert_eq!(p.param_name(), Some("itemId"));
        assert_eq!(p.literal_count(), 1);
    }

    #[test]
    fn test_match_path() {
        let p = RoutePattern::parse("details/{itemId}").unwrap();
        let r = p.match_path("details/Item 2").unwrap();
        assert_eq!(r.name(), "details/{itemId}");
        assert_eq!(r.param("itemId"), Some("Item 2"));

        assert_eq!(
            p.match_path("details/a%2Fb").and_then(|r| r.param("itemId").map(String::from)),
            Some("a/b".to_string())
        );
        assert!(p.match_path("details/a/b").is_none());
        assert!(p.match_path("details/").is_none());
        assert!(p.match_path("detail/x").is_none());
        assert!(p.match_path("details").is_none());
    }

    #[test]
    fn test_string_and_structured_routes_are_equal() {
        let structured = Route::new("details/{itemId}").arg("itemId", "Item 2");
        assert_eq!(Route::from("details/Item 2"), structured);
        assert_ne!(Route::from("details/Item 3"), structured);
        assert_eq!(
            Route::from("details/a%2Fb"),
            Route::new("details/{itemId}").arg("itemId", "a/b")
        );

        let mut set = std::collections::HashSet::new();
        set.insert(structured);
        assert!(set.contains(&Route::from("details/Item 2")));
    }

    #[test]
    fn test_equality_ignores_argument_order() {
        let a = Route::new("search/{q}").arg("q", "rust").arg("page", "2").arg("sort", "new");
        let b = Route::new("search/{q}").arg("sort", "new").arg("page", "2").arg("q", "rust");
        assert_eq!(a, b);
        assert_ne!(a, b.clone().arg("page", "3"));
        assert!(a.matches(&b));
    }

    #[test]
    fn test_canonicalize_splits_concrete_strings() {
        let patterns = [
            RoutePattern::parse("home").unwrap(),
            RoutePattern::parse("details/{itemId}").unwrap(),
            RoutePattern::parse("details/new").unwrap(),
        ];
        let r = RoutePattern::canonicalize(&patterns, Route::from("details/Item 2"));
        assert_eq!(r.name(), "details/{itemId}");
        assert_eq!(r.param("itemId"), Some("Item 2"));

        assert_eq!(
            RoutePattern::canonicalize(&patterns, Route::from("details/new")).name(),
            "details/new"
        );
        assert_eq!(
            RoutePattern::canonicalize(&patterns, Route::from("unknown/path")).name(),
            "unknown/path"
        );
        // already a pattern: left alone
        assert_eq!(
            RoutePattern::canonicalize(&patterns, Route::new("details/{itemId}")).name(),
            "details/{itemId}"
        );
    }

    #[test]
    fn test_string_entry_matches_pattern_target() {
        let entry = Route::from("details/Item 1");
        assert!(entry.matches(&Route::new("details/{itemId}")));
        assert!(entry.matches(&Route::new("details/{itemId}").arg("itemId", "Item 1")));
        assert!(!entry.matches(&Route::new("settings/{tab}")));
        assert!(!Route::from("home").matches(&Route::new("details/{itemId}")));
    }

    #[test]
    fn test_matches_target() {
        let entry = Route::new("details/{itemId}").arg("itemId", "Item 1");
        assert!(entry.matches(&Route::new("details/{itemId}")));
        assert!(entry.matches(&entry.clone()));
        assert!(!entry.matches(&Route::new("details/{itemId}").arg("itemId", "Item 3")));
        assert!(!entry.matches(&Route::new("home")));
    }
}
