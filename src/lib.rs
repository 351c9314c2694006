//! Declarative HTML form control rendering.
//!
//! Structured descriptors (kind, name, attributes, options) turn into
//! deterministic markup for form controls and fieldset composites. The
//! pipeline shared by every control:
//! - canonical attribute serialization (lexicographic keys, emptiness
//!   suppression of null/false/empty values)
//! - defaults merging with override precedence ("present but empty"
//!   always wins)
//! - placeholder-based output templates, substituted in a single
//!   non-recursive pass
//! - checked registry dispatch for composite children
//! - one output decision per render: return a [`Fragment`], or emit to
//!   an [`OutputSink`]
//!
//! ```
//! use controlkit::{AttrMap, ControlInvocation, FieldsetOptions, OutputMode, Renderer};
//!
//! let mut renderer = Renderer::buffered();
//! let children = [
//! 	ControlInvocation::new("input", "a"),
//! 	ControlInvocation::new("input", "b"),
//! ];
//! let options = FieldsetOptions { output: OutputMode::Return };
//! let fieldset = renderer
//! 	.fieldset("Info", &children, &AttrMap::new(), &options)
//! 	.unwrap()
//! 	.unwrap();
//! assert_eq!(
//! 	fieldset.html(),
//! 	r#"<fieldset><legend>Info</legend><input name="a" type="text"><input name="b" type="text"></fieldset>"#
//! );
//! ```

pub mod attrs;
pub mod controls;
pub mod error;
pub mod external;
pub mod fieldset;
pub mod fragment;
pub mod options;
pub mod output;
pub mod registry;
pub mod renderer;
pub mod template;

pub use attrs::AttrMap;
pub use controls::{
	InputControl, SelectControl, TextareaControl, WrapControl, render_input, render_select,
	render_textarea, render_wrap,
};
pub use error::{RenderError, RenderResult};
pub use external::{EditorSettings, JQueryColorPicker, RichTextEditor, WidgetScripts};
pub use fieldset::render_fieldset;
pub use fragment::{Fragment, SideEffect};
pub use options::{
	FieldsetOptions, InputOptions, OutputMode, SelectOptions, TextareaOptions, WrapOptions,
};
pub use output::{BufferSink, OutputSink, WriterSink};
pub use registry::{ControlBuilder, ControlInvocation, ControlRegistry};
pub use renderer::{RenderContext, Renderer};
