//! The rendering facade: collaborators, registry, sink, and the single
//! output decision.

use crate::attrs::AttrMap;
use crate::controls;
use crate::error::{RenderError, RenderResult};
use crate::external::{JQueryColorPicker, RichTextEditor, WidgetScripts};
use crate::fieldset::render_fieldset;
use crate::fragment::Fragment;
use crate::options::{
	self, FieldsetOptions, InputOptions, OutputMode, SelectOptions, TextareaOptions, WrapOptions,
};
use crate::output::{BufferSink, OutputSink};
use crate::registry::{ControlInvocation, ControlRegistry};

/// The collaborators available to builders during a render
pub struct RenderContext {
	editor: Option<Box<dyn RichTextEditor>>,
	scripts: Box<dyn WidgetScripts>,
}

impl RenderContext {
	/// A context with no editor and the built-in jQuery color-picker hook
	pub fn new() -> Self {
		Self {
			editor: None,
			scripts: Box::new(JQueryColorPicker),
		}
	}

	/// Install a rich-text editor collaborator
	pub fn with_editor(mut self, editor: impl RichTextEditor + 'static) -> Self {
		self.editor = Some(Box::new(editor));
		self
	}

	/// Replace the widget-script hook
	pub fn with_scripts(mut self, scripts: impl WidgetScripts + 'static) -> Self {
		self.scripts = Box::new(scripts);
		self
	}

	pub fn editor(&self) -> Option<&dyn RichTextEditor> {
		self.editor.as_deref()
	}

	pub fn scripts(&self) -> &dyn WidgetScripts {
		self.scripts.as_ref()
	}
}

impl Default for RenderContext {
	fn default() -> Self {
		Self::new()
	}
}

/// Renders controls to returned fragments or to an output sink.
///
/// Every entry point ends with the same output decision: with
/// [`OutputMode::Return`] the fragment comes back as a value; with
/// [`OutputMode::Emit`] the markup (plus resolved side-effect scripts)
/// goes to the sink and no value is produced.
///
/// # Examples
///
/// ```
/// use controlkit::{AttrMap, InputOptions, Renderer};
///
/// let mut renderer = Renderer::buffered();
/// let attrs = AttrMap::new().attr("type", "text").attr("id", "x");
/// renderer.input("foo", &attrs, &InputOptions::default());
/// assert_eq!(renderer.sink().contents(), r#"<input id="x" name="foo" type="text">"#);
/// ```
pub struct Renderer<S: OutputSink> {
	context: RenderContext,
	registry: ControlRegistry,
	sink: S,
}

impl Renderer<BufferSink> {
	/// A renderer that collects emitted markup in memory
	pub fn buffered() -> Self {
		Self::new(BufferSink::new())
	}
}

impl<S: OutputSink> Renderer<S> {
	/// A renderer over `sink` with the built-in registry and a default
	/// context
	pub fn new(sink: S) -> Self {
		Self {
			context: RenderContext::new(),
			registry: ControlRegistry::builtin(),
			sink,
		}
	}

	pub fn with_context(mut self, context: RenderContext) -> Self {
		self.context = context;
		self
	}

	pub fn with_registry(mut self, registry: ControlRegistry) -> Self {
		self.registry = registry;
		self
	}

	pub fn context(&self) -> &RenderContext {
		&self.context
	}

	pub fn registry(&self) -> &ControlRegistry {
		&self.registry
	}

	pub fn sink(&self) -> &S {
		&self.sink
	}

	pub fn into_sink(self) -> S {
		self.sink
	}

	/// Render an `<input>` control
	pub fn input(&mut self, name: &str, attrs: &AttrMap, options: &InputOptions) -> Option<Fragment> {
		let fragment = controls::render_input(name, attrs, options);
		self.finish(fragment, options.output)
	}

	/// Render a `<textarea>` control, or the installed rich-text editor
	pub fn textarea(
		&mut self,
		name: &str,
		attrs: &AttrMap,
		options: &TextareaOptions,
	) -> Option<Fragment> {
		let fragment = controls::render_textarea(&self.context, name, attrs, options);
		self.finish(fragment, options.output)
	}

	/// Render a `<select>` control
	pub fn select(
		&mut self,
		name: &str,
		attrs: &AttrMap,
		options: &SelectOptions,
	) -> Option<Fragment> {
		let fragment = controls::render_select(name, attrs, options);
		self.finish(fragment, options.output)
	}

	/// Wrap content in an HTML tag
	pub fn wrap(&mut self, content: &str, attrs: &AttrMap, options: &WrapOptions) -> Option<Fragment> {
		let fragment = controls::render_wrap(content, attrs, options);
		self.finish(fragment, options.output)
	}

	/// Render a fieldset of child controls.
	///
	/// Children dispatch through the registry with their output captured
	/// as values; an unregistered kind fails the whole call and nothing
	/// is emitted.
	///
	/// # Examples
	///
	/// ```
	/// use controlkit::{AttrMap, ControlInvocation, FieldsetOptions, Renderer};
	///
	/// let mut renderer = Renderer::buffered();
	/// let children = [
	/// 	ControlInvocation::new("input", "a"),
	/// 	ControlInvocation::new("input", "b"),
	/// ];
	/// renderer
	/// 	.fieldset("Info", &children, &AttrMap::new(), &FieldsetOptions::default())
	/// 	.unwrap();
	/// assert_eq!(
	/// 	renderer.sink().contents(),
	/// 	r#"<fieldset><legend>Info</legend><input name="a" type="text"><input name="b" type="text"></fieldset>"#
	/// );
	/// ```
	pub fn fieldset(
		&mut self,
		legend: &str,
		controls: &[ControlInvocation],
		attrs: &AttrMap,
		options: &FieldsetOptions,
	) -> RenderResult<Option<Fragment>> {
		let fragment = render_fieldset(&self.context, &self.registry, legend, controls, attrs)?;
		Ok(self.finish(fragment, options.output))
	}

	/// Dispatch a single invocation through the registry.
	///
	/// The output mode comes from the invocation's own options (`return`
	/// key).
	pub fn render_invocation(
		&mut self,
		invocation: &ControlInvocation,
	) -> RenderResult<Option<Fragment>> {
		let builder =
			self.registry
				.get(&invocation.kind)
				.ok_or_else(|| RenderError::UnknownControlKind {
					kind: invocation.kind.clone(),
					index: 0,
				})?;
		let fragment = builder.render(&self.context, invocation);
		Ok(self.finish(fragment, options::output_mode(&invocation.options)))
	}

	fn finish(&mut self, fragment: Fragment, mode: OutputMode) -> Option<Fragment> {
		match mode {
			OutputMode::Return => Some(fragment),
			OutputMode::Emit => {
				tracing::debug!(
					bytes = fragment.html().len(),
					effects = fragment.effects().len(),
					"emitting fragment"
				);
				let html = fragment.to_html_with(self.context.scripts());
				self.sink.write(&html);
				None
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_return_mode_produces_a_value_and_skips_the_sink() {
		let mut renderer = Renderer::buffered();
		let options = InputOptions {
			output: OutputMode::Return,
			..InputOptions::default()
		};
		let fragment = renderer.input("foo", &AttrMap::new(), &options);
		assert_eq!(
			fragment.map(|fragment| fragment.into_html()).as_deref(),
			Some(r#"<input name="foo" type="text">"#)
		);
		assert_eq!(renderer.sink().contents(), "");
	}

	#[test]
	fn test_emit_mode_resolves_side_effect_scripts() {
		let mut renderer = Renderer::buffered();
		renderer.input("accent_color", &AttrMap::new(), &InputOptions::default());
		let emitted = renderer.sink().contents();
		assert!(emitted.starts_with(r#"<input name="accent_color" type="text"><script>"#));
		assert!(emitted.contains(r#"[name="accent_color"]"#));
	}

	#[test]
	fn test_return_mode_keeps_side_effects_unresolved() {
		let mut renderer = Renderer::buffered();
		let options = InputOptions {
			output: OutputMode::Return,
			..InputOptions::default()
		};
		let fragment = renderer.input("accent_color", &AttrMap::new(), &options).unwrap();
		assert!(!fragment.html().contains("<script>"));
		assert_eq!(fragment.effects().len(), 1);
	}

	#[test]
	fn test_render_invocation_honors_the_return_option() {
		let mut renderer = Renderer::buffered();
		let invocation =
			ControlInvocation::new("input", "foo").with_options(json!({"return": true}));
		let fragment = renderer.render_invocation(&invocation).unwrap();
		assert!(fragment.is_some());
		assert_eq!(renderer.sink().contents(), "");

		let invocation = ControlInvocation::new("input", "bar");
		let fragment = renderer.render_invocation(&invocation).unwrap();
		assert!(fragment.is_none());
		assert_eq!(renderer.sink().contents(), r#"<input name="bar" type="text">"#);
	}

	#[test]
	fn test_render_invocation_unknown_kind() {
		let mut renderer = Renderer::buffered();
		let invocation = ControlInvocation::new("carousel", "x");
		let error = renderer.render_invocation(&invocation).unwrap_err();
		assert!(error.to_string().contains("carousel"));
	}
}
