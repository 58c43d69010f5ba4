#![allow(non_snake_case)]
//! Widgets and headless layout/paint.
//!
//! Widgets are plain constructor functions returning a [`View`]; containers take
//! children through [`ViewExt::child`]:
//!
//! ```rust
//! use multiscreen_core::*;
//! use multiscreen_ui::*;
//!
//! let v = Column(Modifier::new().padding(16.0)).child((
//!     Text("Settings"),
//!     Button("Back", || {}),
//! ));
//! assert_eq!(v.children.len(), 2);
//! ```

pub mod render;

pub use render::{dump_scene, layout_and_paint};

use std::rc::Rc;

use multiscreen_core::*;

pub fn Surface(modifier: Modifier, child: View) -> View {
    let mut v = View::new(0, ViewKind::Surface).modifier(modifier);
    v.children = vec![child];
    v
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: theme().on_surface,
            font_size: 16.0,
        },
    )
}

/// Fixed gap of `dp` in both directions.
pub fn Spacer(dp: f32) -> View {
    Box(Modifier::new().width(dp).height(dp))
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    View::new(
        0,
        ViewKind::Button {
            text: text.into(),
            on_click: Some(Rc::new(on_click)),
        },
    )
}

pub fn Switch(checked: bool, label: impl Into<String>, on_change: impl Fn(bool) + 'static) -> View {
    View::new(
        0,
        ViewKind::Switch {
            checked,
            label: label.into(),
            on_change: Some(Rc::new(on_change)),
        },
    )
}

/// Controlled text field: shows `value`, reports edits through `on_change`.
pub fn TextField(
    value: impl Into<String>,
    hint: impl Into<String>,
    on_change: impl Fn(String) + 'static,
) -> View {
    View::new(
        0,
        ViewKind::TextField {
            value: value.into(),
            hint: hint.into(),
            on_change: Some(Rc::new(on_change)),
        },
    )
}

/// Column with one child per item.
pub fn LazyColumn<T>(
    modifier: Modifier,
    items: impl IntoIterator<Item = T>,
    item: impl Fn(T) -> View,
) -> View {
    Column(modifier).with_children(items.into_iter().map(item).collect())
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(mut self, children: impl IntoChildren) -> Self {
        self.children.extend(children.into_children());
        self
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);

/// Method styling
pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, dp: f32) -> View;
}

impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text { color, .. } = &mut self.kind {
            *color = c;
        }
        self
    }
    fn size(mut self, dp_font: f32) -> View {
        if let ViewKind::Text { font_size, .. } = &mut self.kind {
            *font_size = dp_font;
        }
        self
    }
}
