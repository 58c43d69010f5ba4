use multiscreen_navigation::Route;

pub const HOME: &str = "home";
pub const DETAILS: &str = "details/{itemId}";
pub const SETTINGS: &str = "settings";

pub const ITEM_ID: &str = "itemId";

pub fn home() -> Route {
    Route::new(HOME)
}

pub fn details(item_id: &str) -> Route {
    Route::new(DETAILS).arg(ITEM_ID, item_id)
}

pub fn settings() -> Route {
    Route::new(SETTINGS)
}
