use std::rc::Rc;

use multiscreen_core::View;

use crate::route::best_match;
use crate::{EntryScope, NavController, NavError, Route, RoutePattern};

/// Builds the view for one back-stack entry from its scope and the app context.
pub type EntryRenderer<C> = Rc<dyn Fn(&EntryScope, &C) -> View>;

pub fn renderer<C: 'static>(f: impl Fn(&EntryScope, &C) -> View + 'static) -> EntryRenderer<C> {
    Rc::new(f)
}

struct Registered<C> {
    pattern: RoutePattern,
    render: EntryRenderer<C>,
}

/// Maps route patterns to renderers.
///
/// `C` is the context every renderer receives by reference (the app's shared
/// view-model).
pub struct RouteRegistry<C> {
    routes: Vec<Registered<C>>,
}

impl<C: 'static> Default for RouteRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: 'static> RouteRegistry<C> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn register(
        &mut self,
        pattern: &str,
        render: impl Fn(&EntryScope, &C) -> View + 'static,
    ) -> Result<&mut Self, NavError> {
        let pattern = RoutePattern::parse(pattern)?;
        if self.routes.iter().any(|r| r.pattern == pattern) {
            return Err(NavError::DuplicatePattern {
                pattern: pattern.as_str().to_string(),
            });
        }
        log::debug!("registered route `{}`", pattern.as_str());
        self.routes.push(Registered {
            pattern,
            render: renderer(render),
        });
        Ok(self)
    }

    /// Resolve a concrete route string (`"details/Item 1"`).
    ///
    /// When several patterns match, the one with more literal segments wins;
    /// ties go to the earliest registration.
    pub fn resolve(&self, path: &str) -> Result<Route, NavError> {
        self.best_match(path)
            .map(|(route, _)| route)
            .ok_or_else(|| NavError::RouteNotFound {
                route: path.to_string(),
            })
    }

    /// Find the renderer for a back-stack entry.
    ///
    /// Structured routes are looked up by pattern name. A route whose name is
    /// not a registered pattern is treated as a concrete route string and
    /// resolved; the returned route then carries the captured argument.
    pub fn lookup(&self, route: &Route) -> Result<(Route, EntryRenderer<C>), NavError> {
        if let Some(r) = self.routes.iter().find(|r| r.pattern.accepts(route)) {
            return Ok((route.clone(), r.render.clone()));
        }
        if self.routes.iter().all(|r| r.pattern.as_str() != route.name())
            && let Some(found) = self.best_match(route.name())
        {
            return Ok(found);
        }
        Err(NavError::RouteNotFound {
            route: route.path(),
        })
    }

    /// A back stack starting at `start` that splits concrete route strings
    /// against this registry's patterns.
    pub fn navigator(&self, start: impl Into<Route>) -> NavController {
        NavController::with_patterns(start, self.routes.iter().map(|r| r.pattern.clone()))
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.pattern.as_str())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn best_match(&self, path: &str) -> Option<(Route, EntryRenderer<C>)> {
        best_match(self.routes.iter().map(|r| (&r.pattern, &r.render)), path)
            .map(|(route, render)| (route, render.clone()))
    }
}
