use multiscreen::{AppConfig, MultiScreenApp, routes};
use multiscreen_navigation::Route;
use multiscreen_platform::{HeadlessApp, UiEvent, run_headless_app};

fn launch() -> (MultiScreenApp, HeadlessApp) {
    let app = MultiScreenApp::new(AppConfig::default()).unwrap();
    let headless = app.launch();
    (app, headless)
}

fn click(h: &mut HeadlessApp, label: &str) {
    assert!(h.dispatch(UiEvent::Click(label.into())).unwrap());
}

fn names(app: &MultiScreenApp) -> Vec<String> {
    app.nav().routes().iter().map(|r| r.path()).collect()
}

#[test]
fn test_home_screen() {
    let (_, mut h) = launch();
    insta::assert_snapshot!(h.dump(), @r#"
    Surface bg=#FAFAFA
      Column
        TextField "Enter something" = ""
        Text "You typed: "
        Button "Go to Settings"
        Column
          Text "Item 1" [clickable]
          Text "Item 2" [clickable]
          Text "Item 3" [clickable]
    "#);
}

#[test]
fn test_typing_is_echoed() {
    let (_, mut h) = launch();
    h.dispatch(UiEvent::Input {
        field: "Enter something".into(),
        text: "hello".into(),
    })
    .unwrap();
    let dump = h.dump();
    assert!(dump.contains(r#"TextField "Enter something" = "hello""#));
    assert!(dump.contains(r#"Text "You typed: hello""#));
}

#[test]
fn test_settings_round_trip_toggles_theme_everywhere() {
    let (app, mut h) = launch();
    click(&mut h, "Go to Settings");
    assert_eq!(names(&app), vec!["home", "settings"]);

    h.dispatch(UiEvent::Toggle("Dark Mode".into())).unwrap();
    assert!(app.view_model().is_dark_mode_enabled());
    insta::assert_snapshot!(h.dump(), @r#"
    Surface bg=#121212
      Column
        Text "Settings"
        Row
          Text "Dark Mode"
          Switch "Dark Mode" = on
        Button "Back to Home"
    "#);

    click(&mut h, "Back to Home");
    assert_eq!(names(&app), vec!["home"]);
    // dark mode persists across screens
    assert!(h.dump().starts_with("Surface bg=#121212"));

    click(&mut h, "Go to Settings");
    assert!(h.dump().contains(r#"Switch "Dark Mode" = on"#));
    h.dispatch(UiEvent::Toggle("Dark Mode".into())).unwrap();
    assert!(!app.view_model().is_dark_mode_enabled());
    assert!(h.dump().starts_with("Surface bg=#FAFAFA"));
}

#[test]
fn test_details_counter_and_back_to_home() {
    let (app, mut h) = launch();
    click(&mut h, "Item 2");
    assert_eq!(app.nav().current(), routes::details("Item 2"));
    assert_eq!(app.nav().size(), 2);

    for _ in 0..3 {
        click(&mut h, "Increment Counter");
    }
    insta::assert_snapshot!(h.dump(), @r#"
    Surface bg=#FAFAFA
      Column
        Text "Details for Item 2"
        Text "Counter: 3"
        Button "Increment Counter"
        Button "Back to Home"
    "#);

    click(&mut h, "Back to Home");
    assert_eq!(names(&app), vec!["home"]);

    // a new visit starts from zero
    click(&mut h, "Item 2");
    assert!(h.dump().contains(r#"Text "Counter: 0""#));
}

#[test]
fn test_back_to_home_clears_down_to_topmost_home() {
    let (app, mut h) = launch();
    click(&mut h, "Go to Settings");
    app.nav().navigate(routes::home());
    app.nav().navigate(routes::details("Item 1"));
    assert_eq!(app.nav().size(), 4);

    click(&mut h, "Back to Home");
    assert_eq!(names(&app), vec!["home", "settings", "home"]);
    assert_eq!(app.nav().current(), Route::new(routes::HOME));
}

#[test]
fn test_concrete_route_strings_address_the_same_screens() {
    let (app, mut h) = launch();
    app.nav().navigate("details/Item 2");
    assert_eq!(names(&app), vec!["home", "details/Item 2"]);
    assert_eq!(app.nav().current().param(routes::ITEM_ID), Some("Item 2"));
    assert_eq!(app.nav().current(), routes::details("Item 2"));
    assert!(h.dump().contains(r#"Text "Details for Item 2""#));

    app.nav().navigate("settings");
    app.nav().navigate_and_clear("home", &Route::new(routes::DETAILS));
    assert_eq!(names(&app), vec!["home", "home"]);
}

#[test]
fn test_system_back_pops_then_ends_at_root() {
    let (app, mut h) = launch();
    click(&mut h, "Item 3");
    assert!(h.dispatch(UiEvent::Back).unwrap());
    assert_eq!(names(&app), vec!["home"]);
    assert!(!h.dispatch(UiEvent::Back).unwrap());
    assert_eq!(app.nav().size(), 1);
}

#[test]
fn test_unregistered_route_shows_placeholder() {
    let (app, mut h) = launch();
    app.nav().navigate("profile");
    insta::assert_snapshot!(h.dump(), @r#"
    Surface bg=#FAFAFA
      Column
        Text "no registered route matches `profile`"
    "#);
    assert!(h.dispatch(UiEvent::Back).unwrap());
    assert!(h.dump().contains(r#"Button "Go to Settings""#));
}

#[test]
fn test_item_ids_with_slashes_survive_navigation() {
    let config = AppConfig {
        items: vec!["a/b".into()],
        ..AppConfig::default()
    };
    let app = MultiScreenApp::new(config).unwrap();
    let mut h = app.launch();
    click(&mut h, "a/b");
    assert_eq!(app.nav().current().path(), "details/a%2Fb");
    assert!(h.dump().contains(r#"Text "Details for a/b""#));
}

#[test]
fn test_scripted_session() {
    let (app, h) = launch();
    let script = "\
# open settings and turn on dark mode
click Go to Settings
toggle Dark Mode
back
click Nowhere
back
click Item 1
";
    let mut out = Vec::new();
    run_headless_app(h, script.as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.starts_with("--- frame 1 ---\nSurface bg=#FAFAFA"));
    assert!(out.contains("Surface bg=#121212\n  Column\n    Text \"Settings\""));
    assert!(out.contains("error: no button labelled `Nowhere` on screen"));
    // second back at the root ends the session before the last click
    assert_eq!(names(&app), vec!["home"]);
    assert!(app.view_model().is_dark_mode_enabled());
}
