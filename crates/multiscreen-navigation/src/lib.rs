//! Route registry and back-stack navigation.
//!
//! A [`RouteRegistry`] maps route patterns (`"home"`, `"details/{itemId}"`) to
//! renderers. A [`NavController`] owns the back stack of [`Route`]s, and
//! [`NavHost`] renders whatever is on top:
//!
//! ```rust
//! use multiscreen_navigation::*;
//! use multiscreen_ui::Text;
//!
//! let mut routes: RouteRegistry<()> = RouteRegistry::new();
//! routes.register("home", |_, _| Text("Home")).unwrap();
//! routes.register("details/{itemId}", |e, _| Text(e.arg("itemId").unwrap_or_default())).unwrap();
//!
//! let nav = NavController::new("home");
//! nav.navigate(routes.resolve("details/Item 1").unwrap());
//! assert_eq!(nav.current().param("itemId"), Some("Item 1"));
//!
//! nav.navigate_and_clear("home", &Route::new("home"));
//! assert_eq!(nav.size(), 1);
//! ```

mod controller;
mod entry;
mod error;
mod host;
mod registry;
mod route;

pub use controller::NavController;
pub use entry::{EntryScope, SavedState};
pub use error::NavError;
pub use host::{NavErrorView, NavHost};
pub use registry::{EntryRenderer, RouteRegistry, renderer};
pub use route::{Route, RoutePattern, escape, unescape};
