use std::rc::Rc;

use anyhow::Context;
use multiscreen_core::{Dispose, View};
use multiscreen_navigation::{NavController, NavError, NavHost, RouteRegistry};
use multiscreen_platform::HeadlessApp;

use crate::screens::{details, home, settings};
use crate::{AppConfig, AppTheme, SharedViewModel, routes};

/// Home, details and settings screens keyed by their route patterns.
pub fn build_registry(items: Vec<String>) -> Result<RouteRegistry<SharedViewModel>, NavError> {
    let mut registry = RouteRegistry::<SharedViewModel>::new();
    registry
        .register(routes::HOME, move |entry, vm| home::screen(entry, vm, &items))?
        .register(routes::DETAILS, details::screen)?
        .register(routes::SETTINGS, settings::screen)?;
    Ok(registry)
}

/// Root composition: one back stack, one registry, one shared view model.
#[derive(Clone)]
pub struct MultiScreenApp {
    config: AppConfig,
    nav: NavController,
    vm: SharedViewModel,
    registry: Rc<RouteRegistry<SharedViewModel>>,
}

impl MultiScreenApp {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let registry = build_registry(config.items.clone()).context("registering screens")?;
        let start = registry
            .resolve(&config.start_route)
            .with_context(|| format!("start route `{}`", config.start_route))?;
        log::info!(
            "starting at `{start}` with {} routes registered",
            registry.len()
        );
        Ok(Self {
            nav: registry.navigator(start),
            vm: SharedViewModel::default(),
            registry: Rc::new(registry),
            config,
        })
    }

    pub fn nav(&self) -> &NavController {
        &self.nav
    }

    pub fn view_model(&self) -> &SharedViewModel {
        &self.vm
    }

    pub fn registry(&self) -> &RouteRegistry<SharedViewModel> {
        &self.registry
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The top-of-stack screen inside the theme picked by the dark-mode flag.
    pub fn compose(&self) -> View {
        log::trace!("back stack {}", self.nav.to_json());
        AppTheme(self.vm.is_dark_mode_enabled(), || {
            NavHost(&self.nav, self.registry(), &self.vm)
        })
    }

    /// Headless runner that re-renders on any dark-mode or navigation change
    /// and routes system back to the back stack. Its subscriptions end when
    /// the runner is dropped.
    pub fn launch(&self) -> HeadlessApp {
        let root = self.clone();
        let mut app = HeadlessApp::new(move || root.compose())
            .with_back_handler(self.nav.back_handler())
            .with_size(self.config.surface_size);

        let inv = app.invalidator();
        let vm_sub = self.vm.subscribe({
            let inv = inv.clone();
            move |_| inv.invalidate()
        });
        let nav_sub = self.nav.subscribe(move || inv.invalidate());
        let (vm, nav) = (self.vm.clone(), self.nav.clone());
        app.on_drop(Dispose::new(move || {
            vm.unsubscribe(vm_sub);
            nav.unsubscribe(nav_sub);
        }));
        app
    }
}

#[cfg(test)]
mod tests {
    use multiscreen_navigation::Route;

    use super::*;

    #[test]
    fn test_registry_resolves_every_screen() {
        let reg = build_registry(AppConfig::default().items).unwrap();
        assert_eq!(
            reg.patterns().collect::<Vec<_>>(),
            vec!["home", "details/{itemId}", "settings"]
        );
        assert_eq!(reg.resolve("home").unwrap(), routes::home());
        assert_eq!(reg.resolve("settings").unwrap(), routes::settings());
        let r = reg.resolve("details/Item 1").unwrap();
        assert_eq!(r.param(routes::ITEM_ID), Some("Item 1"));
        assert!(reg.resolve("details").is_err());
        assert!(reg.resolve("profile").is_err());
    }

    #[test]
    fn test_starts_with_single_home_entry() {
        let app = MultiScreenApp::new(AppConfig::default()).unwrap();
        assert_eq!(app.nav().routes(), vec![Route::new("home")]);
        assert!(!app.view_model().is_dark_mode_enabled());
    }

    #[test]
    fn test_dropped_runner_unsubscribes() {
        let app = MultiScreenApp::new(AppConfig::default()).unwrap();
        let first = app.launch();
        let second = app.launch();
        let stale = first.invalidator();
        drop(first);
        app.view_model().toggle_dark_mode();
        app.nav().navigate(routes::settings());
        assert!(!stale.is_invalid());
        assert!(second.invalidator().is_invalid());
    }

    #[test]
    fn test_string_start_route_carries_arguments() {
        let config = AppConfig {
            start_route: "details/Item 3".into(),
            ..AppConfig::default()
        };
        let app = MultiScreenApp::new(config).unwrap();
        assert_eq!(app.nav().current(), routes::details("Item 3"));
        app.nav().navigate("details/Item 1");
        assert_eq!(app.nav().current().param(routes::ITEM_ID), Some("Item 1"));
    }

    #[test]
    fn test_unknown_start_route_is_rejected() {
        let config = AppConfig {
            start_route: "nowhere".into(),
            ..AppConfig::default()
        };
        let err = MultiScreenApp::new(config).err().unwrap();
        assert_eq!(err.to_string(), "start route `nowhere`");
    }
}
