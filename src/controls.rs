//! Control builders, one per control kind.
//!
//! Each builder runs the shared pipeline: clone the caller's attributes,
//! apply the kind's defaults, force the name binding, assemble the raw
//! element, apply the optional output template, and record side effects.
//! Builders always produce a [`Fragment`](crate::Fragment); the output
//! decision (emit vs return) belongs to the [`Renderer`](crate::Renderer).

mod input;
mod select;
mod textarea;
mod wrap;

pub use input::{InputControl, render_input};
pub use select::{SelectControl, render_select};
pub use textarea::{TextareaControl, render_textarea};
pub use wrap::{WrapControl, render_wrap};
