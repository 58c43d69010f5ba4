//! # Theming and locals
//!
//! Composition locals are values provided to a subtree while it is being
//! composed. They live on a thread-local stack of frames; `with_local` pushes a
//! frame for the duration of a closure and `local` reads the innermost value,
//! falling back to `Default`.
//!
//! The only local the widgets read is [`Theme`]:
//!
//! ```rust
//! use multiscreen_core::*;
//!
//! let bg = with_theme(Theme::light(), || theme().background);
//! assert_eq!(bg, Theme::light().background);
//! assert_eq!(theme().background, Theme::default().background);
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::Color;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = const { RefCell::new(Vec::new()) };
}

/// Provide `value` to everything composed inside `f`.
pub fn with_local<T: Clone + 'static, R>(value: T, f: impl FnOnce() -> R) -> R {
    // Pops the frame on unwind too, so an ErrorBoundary leaves the stack balanced.
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| {
        let mut frame: HashMap<TypeId, Box<dyn Any>> = HashMap::new();
        frame.insert(TypeId::of::<T>(), Box::new(value));
        st.borrow_mut().push(frame);
    });
    let _guard = Guard;
    f()
}

/// Innermost provided value of `T`, or `T::default()`.
pub fn local<T: Clone + Default + 'static>() -> T {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return t.clone();
            }
        }
        T::default()
    })
}

/// Color scheme read by widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Window background / app root.
    pub background: Color,
    /// Default container surface.
    pub surface: Color,
    /// Foreground on top of `surface`/`background`.
    pub on_surface: Color,
    /// Accent for buttons and switches.
    pub primary: Color,
    pub on_primary: Color,
    pub outline: Color,
    pub error: Color,
    pub is_dark: bool,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Color::from_hex("#FAFAFA"),
            surface: Color::from_hex("#FFFFFF"),
            on_surface: Color::from_hex("#222222"),
            primary: Color::from_hex("#6650A4"),
            on_primary: Color::WHITE,
            outline: Color::from_hex("#CCCCCC"),
            error: Color::from_hex("#B3261E"),
            is_dark: false,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::from_hex("#121212"),
            surface: Color::from_hex("#1E1E1E"),
            on_surface: Color::from_hex("#DDDDDD"),
            primary: Color::from_hex("#D0BCFF"),
            on_primary: Color::from_hex("#381E72"),
            outline: Color::from_hex("#555555"),
            error: Color::from_hex("#F2B8B5"),
            is_dark: true,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    with_local(theme, f)
}

pub fn theme() -> Theme {
    local::<Theme>()
}
