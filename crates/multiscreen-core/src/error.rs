#![allow(non_snake_case)]
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::View;

#[derive(Clone, Debug)]
pub struct ErrorInfo {
    pub message: String,
    pub component: String,
}

/// Builds `content`; if it panics, builds `fallback` instead.
///
/// Composition locals and the current scope are restored by their own unwind
/// guards, so the surrounding tree keeps composing normally.
pub fn ErrorBoundary(
    component: impl Into<String>,
    fallback: impl FnOnce(ErrorInfo) -> View,
    content: impl FnOnce() -> View,
) -> View {
    let component = component.into();
    match catch_unwind(AssertUnwindSafe(content)) {
        Ok(view) => view,
        Err(err) => {
            let message = if let Some(s) = err.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = err.downcast_ref::<&str>() {
                s.to_string()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("{component} panicked while composing: {message}");
            fallback(ErrorInfo { message, component })
        }
    }
}
