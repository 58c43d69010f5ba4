use std::rc::Rc;

use crate::{Color, Modifier};

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;
pub type BoolCallback = Rc<dyn Fn(bool)>;
pub type TextCallback = Rc<dyn Fn(String)>;

#[derive(Clone)]
pub enum ViewKind {
    Surface,
    Box,
    Row,
    Column,
    Text {
        text: String,
        color: Color,
        font_size: f32,
    },
    Button {
        text: String,
        on_click: Option<Callback>,
    },
    TextField {
        value: String,
        hint: String,
        on_change: Option<TextCallback>,
    },
    Switch {
        checked: bool,
        label: String,
        on_change: Option<BoolCallback>,
    },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Surface => write!(f, "Surface"),
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Text {
                text,
                color,
                font_size,
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("font_size", font_size)
                .finish(),
            ViewKind::Button { text, .. } => f
                .debug_struct("Button")
                .field("text", text)
                .field("on_click", &"<callback>")
                .finish(),
            ViewKind::TextField { value, hint, .. } => f
                .debug_struct("TextField")
                .field("value", value)
                .field("hint", hint)
                .finish(),
            ViewKind::Switch { checked, label, .. } => f
                .debug_struct("Switch")
                .field("checked", checked)
                .field("label", label)
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    /// Depth-first search for the first view whose text (or label) equals `text`.
    pub fn find_text(&self, text: &str) -> Option<&View> {
        let hit = match &self.kind {
            ViewKind::Text { text: t, .. } | ViewKind::Button { text: t, .. } => t == text,
            ViewKind::Switch { label, .. } => label == text,
            _ => false,
        };
        if hit {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_text(text))
    }
}

/// Headless paint output: one node per painted view, in paint order.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    /// Layout container; `background` is set when it paints a fill.
    Container {
        depth: usize,
        name: &'static str,
        background: Option<Color>,
    },
    Text {
        depth: usize,
        text: String,
        color: Color,
        size: f32,
        clickable: bool,
    },
    /// Interactive control (button, switch, text field).
    Control {
        depth: usize,
        role: crate::Role,
        label: String,
        value: Option<String>,
    },
}
