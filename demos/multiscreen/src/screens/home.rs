use multiscreen_core::*;
use multiscreen_navigation::EntryScope;
use multiscreen_ui::*;

use crate::SharedViewModel;
use crate::routes;

pub fn screen(entry: &EntryScope, _vm: &SharedViewModel, items: &[String]) -> View {
    let nav = entry.navigator();
    let text = entry.remember_state("text", String::new);
    let typed = text.get();

    Column(Modifier::new().padding(30.0)).child((
        TextField(typed.clone(), "Enter something", {
            let text = text.clone();
            move |v| text.set(v)
        }),
        Text(format!("You typed: {typed}")),
        Spacer(16.0),
        Button("Go to Settings", {
            let nav = nav.clone();
            move || nav.navigate(routes::settings())
        }),
        Spacer(16.0),
        LazyColumn(Modifier::new(), items.iter().cloned(), |item| {
            let nav = nav.clone();
            Text(item.clone()).modifier(
                Modifier::new()
                    .fill_max_width()
                    .padding(16.0)
                    .clickable(move || nav.navigate(routes::details(&item))),
            )
        }),
    ))
}
