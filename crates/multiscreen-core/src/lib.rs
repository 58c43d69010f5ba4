//! # State, scopes and views
//!
//! The core has three pieces the rest of the workspace builds on:
//!
//! - [`Signal<T>`]: an observable value shared by reference. Writes notify
//!   subscribers synchronously.
//! - [`Scope`] / [`Dispose`]: explicit lifetimes. A navigation entry owns a
//!   scope and disposing it runs the cleanups registered inside it.
//! - [`View`]: the declarative tree a composition pass produces, turned into a
//!   [`Frame`] by a layout/paint function.
//!
//! ```rust
//! use multiscreen_core::*;
//! use std::{cell::Cell, rc::Rc};
//!
//! let dark = signal(false);
//! let seen = Rc::new(Cell::new(0));
//! let id = dark.subscribe({
//!     let seen = seen.clone();
//!     move |_| seen.set(seen.get() + 1)
//! });
//! dark.update(|v| *v = !*v);
//! assert!(dark.get());
//! assert_eq!(seen.get(), 1);
//! dark.unsubscribe(id);
//! ```

pub mod color;
pub mod effects;
pub mod error;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod semantics;
pub mod signal;
pub mod view;

pub use color::*;
pub use effects::*;
pub use error::*;
pub use locals::*;
pub use modifier::*;
pub use prelude::*;
pub use runtime::*;
pub use scope::*;
pub use semantics::*;
pub use signal::*;
pub use view::*;
