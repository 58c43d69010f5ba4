#![allow(non_snake_case)]
use multiscreen_core::*;
use multiscreen_ui::Surface;

/// Provides the light or dark theme to `content` and paints the background.
pub fn AppTheme(dark: bool, content: impl FnOnce() -> View) -> View {
    let scheme = if dark { Theme::dark() } else { Theme::light() };
    with_theme(scheme, || {
        Surface(
            Modifier::new()
                .fill_max_size()
                .background(theme().background),
            content(),
        )
    })
}
