//! Three screens (home, details, settings) sharing a dark-mode flag.
//!
//! [`MultiScreenApp`] is the root composition: it owns the back stack, the
//! route registry and the [`SharedViewModel`], and renders whatever route is on
//! top inside the theme selected by the dark-mode flag.

pub mod app;
pub mod config;
pub mod routes;
pub mod screens;
pub mod theme;
pub mod view_model;

pub use app::{MultiScreenApp, build_registry};
pub use config::AppConfig;
pub use theme::AppTheme;
pub use view_model::SharedViewModel;
