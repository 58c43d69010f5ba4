use multiscreen_core::*;
use multiscreen_navigation::EntryScope;
use multiscreen_ui::*;

use crate::SharedViewModel;

pub fn screen(entry: &EntryScope, vm: &SharedViewModel) -> View {
    let nav = entry.navigator();

    Column(Modifier::new().fill_max_size().padding(16.0)).child((
        Text("Settings").size(28.0),
        Spacer(16.0),
        Row(Modifier::new()).child((
            Text("Dark Mode"),
            Spacer(8.0),
            Switch(vm.is_dark_mode_enabled(), "Dark Mode", {
                let vm = vm.clone();
                move |v| vm.set_dark_mode_enabled(v)
            }),
        )),
        Spacer(16.0),
        Button("Back to Home", move || {
            nav.pop_back();
        }),
    ))
}
