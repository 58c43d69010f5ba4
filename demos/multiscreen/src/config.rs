/// Launch-time settings.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Concrete route string the back stack starts with.
    pub start_route: String,
    /// Entries listed on the home screen.
    pub items: Vec<String>,
    /// Surface size handed to the scheduler, in px.
    pub surface_size: (u32, u32),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_route: crate::routes::HOME.to_string(),
            items: vec!["Item 1".into(), "Item 2".into(), "Item 3".into()],
            surface_size: (412, 915),
        }
    }
}
