use std::rc::Rc;

use crate::{Callback, Color};

#[derive(Clone, Default)]
pub struct Modifier {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub fill_max_w: bool,
    pub fill_max_h: bool,
    pub padding: Option<f32>,
    pub background: Option<Color>,
    pub on_click: Option<Callback>,
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modifier")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("fill_max_w", &self.fill_max_w)
            .field("fill_max_h", &self.fill_max_h)
            .field("padding", &self.padding)
            .field("background", &self.background)
            .field("on_click", &self.on_click.as_ref().map(|_| "..."))
            .finish()
    }
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn width(mut self, w: f32) -> Self {
        self.width = Some(w);
        self
    }
    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }
    pub fn fill_max_size(mut self) -> Self {
        self.fill_max_w = true;
        self.fill_max_h = true;
        self
    }
    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_w = true;
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(v);
        self
    }
    pub fn background(mut self, c: Color) -> Self {
        self.background = Some(c);
        self
    }
    pub fn clickable(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }
}
