use multiscreen_core::*;
use multiscreen_navigation::EntryScope;
use multiscreen_ui::*;

use crate::SharedViewModel;
use crate::routes;

pub fn screen(entry: &EntryScope, _vm: &SharedViewModel) -> View {
    let nav = entry.navigator();
    let item_id = entry.arg(routes::ITEM_ID).unwrap_or_default().to_string();
    // Lives as long as this entry; a new visit starts from zero.
    let counter = entry.remember_state("counter", || 0u32);

    entry.on_enter("visit", {
        let item_id = item_id.clone();
        move || {
            log::info!("details for `{item_id}` opened");
            on_unmount(move || log::info!("details for `{item_id}` closed"))
        }
    });

    Column(Modifier::new().fill_max_size().padding(16.0)).child((
        Text(format!("Details for {item_id}")).size(28.0),
        Text(format!("Counter: {}", counter.get())),
        Spacer(16.0),
        Button("Increment Counter", {
            let counter = counter.clone();
            move || counter.update(|c| *c += 1)
        }),
        Spacer(16.0),
        Button("Back to Home", move || {
            nav.navigate_and_clear(routes::home(), &routes::home())
        }),
    ))
}
