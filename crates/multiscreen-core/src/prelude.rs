pub use crate::color::Color;
pub use crate::effects::{Dispose, on_unmount};
pub use crate::error::{ErrorBoundary, ErrorInfo};
pub use crate::locals::{Theme, local, theme, with_local, with_theme};
pub use crate::modifier::Modifier;
pub use crate::runtime::{ComposeGuard, Frame, HitRegion, Scheduler};
pub use crate::scope::{Scope, current_scope, scoped_effect};
pub use crate::semantics::Role;
pub use crate::signal::{Signal, SubId, signal};
pub use crate::view::{Scene, SceneNode, View, ViewId, ViewKind};
