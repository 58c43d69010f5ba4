#![allow(non_snake_case)]
use multiscreen_core::*;
use multiscreen_ui::{Column, Text, TextStyle, ViewExt};

use crate::{NavController, NavError, RouteRegistry};

/// Renders the top of the back stack.
///
/// The entry's renderer runs inside the entry's scope and an error boundary. A
/// route with no registered renderer, or a renderer that panics, produces an
/// error placeholder instead of taking the whole frame down.
pub fn NavHost<C: 'static>(nav: &NavController, registry: &RouteRegistry<C>, ctx: &C) -> View {
    let entry = nav.current_entry();
    match registry.lookup(entry.route()) {
        Ok((route, render)) => {
            nav.resolve_entry(entry.id, &route);
            let entry = entry.with_route(route);
            let scope = entry.scope().clone();
            scope.run(|| {
                ErrorBoundary(
                    entry.route().path(),
                    |info| ErrorPlaceholder(format!("{} failed: {}", info.component, info.message)),
                    || render(&entry, ctx),
                )
            })
        }
        Err(err) => {
            log::error!("render pass: {err}");
            NavErrorView(&err)
        }
    }
}

pub fn NavErrorView(err: &NavError) -> View {
    ErrorPlaceholder(err.to_string())
}

fn ErrorPlaceholder(message: String) -> View {
    Column(Modifier::new().fill_max_size().padding(16.0)).child(Text(message).color(theme().error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Route;

    fn text_of(v: &View) -> Vec<String> {
        let mut out = Vec::new();
        fn walk(v: &View, out: &mut Vec<String>) {
            if let ViewKind::Text { text, .. } = &v.kind {
                out.push(text.clone());
            }
            for c in &v.children {
                walk(c, out);
            }
        }
        walk(v, &mut out);
        out
    }

    fn registry() -> RouteRegistry<String> {
        let mut reg = RouteRegistry::new();
        reg.register("home", |_, ctx: &String| Text(format!("home {ctx}")))
            .unwrap();
        reg.register("details/{itemId}", |e, _| {
            Text(format!("Details for {}", e.arg("itemId").unwrap_or("?")))
        })
        .unwrap();
        reg.register("boom", |_, _| -> View { panic!("renderer exploded") })
            .unwrap();
        reg
    }

    #[test]
    fn test_renders_top_entry() {
        let reg = registry();
        let nav = NavController::new("home");
        let ctx = "ctx".to_string();
        assert_eq!(text_of(&NavHost(&nav, &reg, &ctx)), vec!["home ctx"]);

        nav.navigate(Route::from("details/Item 2"));
        assert_eq!(text_of(&NavHost(&nav, &reg, &ctx)), vec!["Details for Item 2"]);
    }

    #[test]
    fn test_unknown_route_renders_placeholder() {
        let reg = registry();
        let nav = NavController::new("home");
        nav.navigate("unknown/path");
        let texts = text_of(&NavHost(&nav, &reg, &String::new()));
        assert_eq!(texts, vec!["no registered route matches `unknown/path`"]);
        // still navigable afterwards
        assert!(nav.pop_back());
        assert_eq!(text_of(&NavHost(&nav, &reg, &String::new())), vec!["home "]);
    }

    #[test]
    fn test_render_records_resolved_arguments() {
        let reg = registry();
        let nav = NavController::new("home");
        nav.navigate(Route::from("details/Item 2"));
        let version = nav.version();
        NavHost(&nav, &reg, &String::new());
        assert_eq!(nav.current().name(), "details/{itemId}");
        assert_eq!(nav.current().param("itemId"), Some("Item 2"));
        assert_eq!(nav.version(), version);
    }

    #[test]
    fn test_panicking_renderer_is_contained() {
        let reg = registry();
        let nav = NavController::new("boom");
        let texts = text_of(&NavHost(&nav, &reg, &String::new()));
        assert_eq!(texts, vec!["boom failed: renderer exploded"]);
    }
}
