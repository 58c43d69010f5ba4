use crate::scope::Scope;
use crate::{BoolCallback, Callback, Role, Scene, TextCallback, View, ViewId};

/// Output of one composition pass: scene plus input targets.
#[derive(Default)]
pub struct Frame {
    pub number: u64,
    pub scene: Scene,
    pub hit_regions: Vec<HitRegion>,
}

impl Frame {
    /// First hit region with the given role and label.
    pub fn hit(&self, role: Role, label: &str) -> Option<&HitRegion> {
        self.hit_regions
            .iter()
            .find(|h| h.role == role && h.label == label)
    }
}

/// Something the platform can deliver input to.
#[derive(Clone)]
pub struct HitRegion {
    pub id: ViewId,
    pub role: Role,
    /// Button text, switch label, text field hint, or text content.
    pub label: String,
    pub on_click: Option<Callback>,
    pub on_toggle: Option<BoolCallback>,
    pub checked: Option<bool>,
    pub on_text_change: Option<TextCallback>,
    pub text: Option<String>,
}

impl std::fmt::Debug for HitRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRegion")
            .field("id", &self.id)
            .field("role", &self.role)
            .field("label", &self.label)
            .field("checked", &self.checked)
            .field("text", &self.text)
            .finish()
    }
}

/// Root scope for one composition pass.
pub struct ComposeGuard {
    scope: Scope,
}

impl ComposeGuard {
    pub fn begin() -> Self {
        ComposeGuard {
            scope: Scope::new(),
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

impl Drop for ComposeGuard {
    fn drop(&mut self) {
        self.scope.dispose();
    }
}

pub struct Scheduler {
    frames: u64,
    pub size: (u32, u32),
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            frames: 0,
            size: (412, 915),
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Compose the root and hand the tree to `layout_paint`.
    pub fn repose(
        &mut self,
        build_root: impl FnOnce() -> View,
        layout_paint: impl Fn(&View, (u32, u32)) -> (Scene, Vec<HitRegion>),
    ) -> Frame {
        let guard = ComposeGuard::begin();
        let root = guard.scope().run(build_root);
        let (scene, hit_regions) = layout_paint(&root, self.size);
        self.frames += 1;
        Frame {
            number: self.frames,
            scene,
            hit_regions,
        }
    }
}
