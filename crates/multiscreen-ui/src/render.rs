//! Headless layout and paint.
//!
//! There is no pixel output: painting flattens the view tree into
//! [`SceneNode`]s (one per visible view, with its nesting depth) and collects a
//! [`HitRegion`] for every interactive view so a platform runner can deliver
//! input by role and label.

use multiscreen_core::*;

/// Stamp ids, paint the tree and collect hit regions.
///
/// Ids are assigned in pre-order starting at 1. Empty boxes (spacers) paint
/// nothing.
pub fn layout_and_paint(root: &View, size_px: (u32, u32)) -> (Scene, Vec<HitRegion>) {
    let mut next_id = 1u64;
    fn stamp(mut v: View, id: &mut u64) -> View {
        v.id = *id;
        *id += 1;
        v.children = v.children.into_iter().map(|c| stamp(c, id)).collect();
        v
    }
    let root = stamp(root.clone(), &mut next_id);

    let mut scene = Scene {
        clear_color: first_surface_background(&root).unwrap_or_else(|| theme().background),
        nodes: Vec::new(),
    };
    let mut hits = Vec::new();
    paint(&root, 0, &mut scene, &mut hits);
    log::trace!(
        "painted {} nodes, {} hit regions at {}x{}",
        scene.nodes.len(),
        hits.len(),
        size_px.0,
        size_px.1
    );
    (scene, hits)
}

fn first_surface_background(v: &View) -> Option<Color> {
    if let ViewKind::Surface = v.kind
        && v.modifier.background.is_some()
    {
        return v.modifier.background;
    }
    v.children.iter().find_map(first_surface_background)
}

/// A clickable container is addressed by the first text inside it.
fn first_text(v: &View) -> Option<String> {
    match &v.kind {
        ViewKind::Text { text, .. } => Some(text.clone()),
        ViewKind::Button { text, .. } => Some(text.clone()),
        _ => v.children.iter().find_map(first_text),
    }
}

fn paint(v: &View, depth: usize, scene: &mut Scene, hits: &mut Vec<HitRegion>) {
    let region = |role: Role, label: String| HitRegion {
        id: v.id,
        role,
        label,
        on_click: None,
        on_toggle: None,
        checked: None,
        on_text_change: None,
        text: None,
    };

    match &v.kind {
        ViewKind::Surface | ViewKind::Box | ViewKind::Row | ViewKind::Column => {
            let is_empty_box = matches!(v.kind, ViewKind::Box)
                && v.children.is_empty()
                && v.modifier.background.is_none()
                && v.modifier.on_click.is_none();
            if is_empty_box {
                return;
            }
            let name = match v.kind {
                ViewKind::Surface => "Surface",
                ViewKind::Box => "Box",
                ViewKind::Row => "Row",
                _ => "Column",
            };
            scene.nodes.push(SceneNode::Container {
                depth,
                name,
                background: v.modifier.background,
            });
            if let Some(on_click) = &v.modifier.on_click {
                hits.push(HitRegion {
                    on_click: Some(on_click.clone()),
                    ..region(Role::Container, first_text(v).unwrap_or_default())
                });
            }
            for child in &v.children {
                paint(child, depth + 1, scene, hits);
            }
        }
        ViewKind::Text {
            text,
            color,
            font_size,
        } => {
            scene.nodes.push(SceneNode::Text {
                depth,
                text: text.clone(),
                color: *color,
                size: *font_size,
                clickable: v.modifier.on_click.is_some(),
            });
            if let Some(on_click) = &v.modifier.on_click {
                hits.push(HitRegion {
                    on_click: Some(on_click.clone()),
                    ..region(Role::Text, text.clone())
                });
            }
        }
        ViewKind::Button { text, on_click } => {
            scene.nodes.push(SceneNode::Control {
                depth,
                role: Role::Button,
                label: text.clone(),
                value: None,
            });
            hits.push(HitRegion {
                on_click: on_click.clone(),
                ..region(Role::Button, text.clone())
            });
        }
        ViewKind::Switch {
            checked,
            label,
            on_change,
        } => {
            scene.nodes.push(SceneNode::Control {
                depth,
                role: Role::Switch,
                label: label.clone(),
                value: Some(if *checked { "on" } else { "off" }.to_string()),
            });
            hits.push(HitRegion {
                on_toggle: on_change.clone(),
                checked: Some(*checked),
                ..region(Role::Switch, label.clone())
            });
        }
        ViewKind::TextField {
            value,
            hint,
            on_change,
        } => {
            scene.nodes.push(SceneNode::Control {
                depth,
                role: Role::TextField,
                label: hint.clone(),
                value: Some(format!("{value:?}")),
            });
            hits.push(HitRegion {
                on_text_change: on_change.clone(),
                text: Some(value.clone()),
                ..region(Role::TextField, hint.clone())
            });
        }
    }
}

/// One line per scene node, indented two spaces per depth.
pub fn dump_scene(scene: &Scene) -> String {
    let mut lines = Vec::with_capacity(scene.nodes.len());
    for node in &scene.nodes {
        let line = match node {
            SceneNode::Container {
                depth,
                name,
                background,
            } => match background {
                Some(bg) => format!("{}{name} bg={}", indent(*depth), bg.to_hex()),
                None => format!("{}{name}", indent(*depth)),
            },
            SceneNode::Text {
                depth,
                text,
                clickable,
                ..
            } => {
                let suffix = if *clickable { " [clickable]" } else { "" };
                format!("{}Text {text:?}{suffix}", indent(*depth))
            }
            SceneNode::Control {
                depth,
                role,
                label,
                value,
            } => {
                let name = match role {
                    Role::Button => "Button",
                    Role::Switch => "Switch",
                    Role::TextField => "TextField",
                    Role::Text => "Text",
                    Role::Container => "Container",
                };
                match value {
                    Some(value) => format!("{}{name} {label:?} = {value}", indent(*depth)),
                    None => format!("{}{name} {label:?}", indent(*depth)),
                }
            }
        };
        lines.push(line);
    }
    lines.join("\n")
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::*;

    fn sample(clicks: Rc<Cell<u32>>) -> View {
        Surface(
            Modifier::new().background(Color::from_hex("#FAFAFA")),
            Column(Modifier::new().padding(16.0)).child((
                Text("Hello"),
                Spacer(16.0),
                Button("Go", || {}),
                Switch(true, "Dark Mode", |_| {}),
                TextField("abc", "Enter something", |_| {}),
                Text("Item 1").modifier(Modifier::new().clickable(move || {
                    clicks.set(clicks.get() + 1)
                })),
            )),
        )
    }

    #[test]
    fn test_dump_scene() {
        let (scene, _) = layout_and_paint(&sample(Rc::new(Cell::new(0))), (400, 800));
        insta::assert_snapshot!(dump_scene(&scene), @r#"
        Surface bg=#FAFAFA
          Column
            Text "Hello"
            Button "Go"
            Switch "Dark Mode" = on
            TextField "Enter something" = "abc"
            Text "Item 1" [clickable]
        "#);
        assert_eq!(scene.clear_color, Color::from_hex("#FAFAFA"));
    }

    #[test]
    fn test_hit_regions_in_paint_order() {
        let clicks = Rc::new(Cell::new(0));
        let (_, hits) = layout_and_paint(&sample(clicks.clone()), (400, 800));
        let roles: Vec<Role> = hits.iter().map(|h| h.role).collect();
        assert_eq!(
            roles,
            vec![Role::Button, Role::Switch, Role::TextField, Role::Text]
        );
        assert_eq!(hits[1].checked, Some(true));
        assert_eq!(hits[2].text.as_deref(), Some("abc"));

        let item = hits.iter().find(|h| h.label == "Item 1").map(|h| h.on_click.clone());
        if let Some(Some(cb)) = item {
            cb();
        }
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_ids_are_preorder() {
        let (_, hits) = layout_and_paint(&sample(Rc::new(Cell::new(0))), (400, 800));
        // Surface=1, Column=2, Text=3, Spacer=4, Button=5
        assert_eq!(hits[0].id, 5);
    }

    #[test]
    fn test_clickable_container_is_labelled_by_its_text() {
        let clicks = Rc::new(Cell::new(0));
        let row = Row(Modifier::new().clickable({
            let clicks = clicks.clone();
            move || clicks.set(clicks.get() + 1)
        }))
        .child((Spacer(8.0), Text("Dark Mode"), Text("on")));
        let (_, hits) = layout_and_paint(&row, (400, 800));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].role, Role::Container);
        assert_eq!(hits[0].label, "Dark Mode");
        if let Some(cb) = &hits[0].on_click {
            cb();
        }
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_text_uses_theme_color() {
        let v = with_theme(Theme::dark(), || Text("x"));
        match v.kind {
            ViewKind::Text { color, .. } => assert_eq!(color, Theme::dark().on_surface),
            _ => panic!("expected text"),
        }
    }
}
