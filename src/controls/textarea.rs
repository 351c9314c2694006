//! The `<textarea>` builder.

use crate::attrs::{AttrMap, open_tag};
use crate::external::EditorSettings;
use crate::fragment::Fragment;
use crate::options::{TextareaOptions, WrapOptions, parse_options};
use crate::registry::{ControlBuilder, ControlInvocation};
use crate::renderer::RenderContext;
use crate::template;
use rand::Rng;
use serde_json::Value;

use super::wrap::render_wrap;

/// Render a `<textarea>` control, or the installed rich-text editor.
///
/// The element content comes from the options (`value`), not the
/// attribute map. With `editor` set the installed collaborator renders
/// in place of the raw textarea and its output is wrapped in a `<div>`
/// carrying the attributes minus `name` — the editor owns the name
/// binding internally.
pub fn render_textarea(
	context: &RenderContext,
	name: &str,
	attrs: &AttrMap,
	options: &TextareaOptions,
) -> Fragment {
	let mut attrs = attrs.clone();
	attrs.apply_defaults(&[("id", Value::from(""))]);
	attrs.insert("name", name);

	let value = options.value.as_str();
	let element = if options.editor {
		match context.editor() {
			Some(editor) => {
				let mut shell_attrs = attrs.clone();
				shell_attrs.remove("name");
				let settings = EditorSettings {
					height: options.editor_height,
					media_buttons: options.media_buttons,
					teeny: options.teeny,
					textarea_name: name.to_string(),
					rows: options.textarea_rows,
				};
				let rendered = editor.render(value, &editor_field_id(name), &settings);
				render_wrap(&rendered, &shell_attrs, &WrapOptions::default()).into_html()
			}
			None => {
				tracing::warn!(
					name,
					"editor requested but no rich-text editor is installed; rendering a plain textarea"
				);
				plain_textarea(&attrs, value)
			}
		}
	} else {
		plain_textarea(&attrs, value)
	};

	let html = match &options.format {
		Some(format) => {
			let id = attrs.text("id");
			template::fill(
				format,
				&[
					(":textarea", element.as_str()),
					(":value", value),
					(":name", name),
					(":id", id.as_str()),
				],
			)
		}
		None => element,
	};
	Fragment::new(html)
}

fn plain_textarea(attrs: &AttrMap, value: &str) -> String {
	format!("{}{}</textarea>", open_tag("textarea", attrs), value)
}

// Editor identifiers must avoid brackets; uniqueness within a page is a
// collaborator-side contract.
fn editor_field_id(name: &str) -> String {
	let base = name.replace(['[', ']'], "_");
	let suffix = rand::thread_rng().gen_range(100..1000);
	format!("{base}{suffix}")
}

/// Registry entry for the textarea kind
pub struct TextareaControl;

impl ControlBuilder for TextareaControl {
	fn render(&self, context: &RenderContext, invocation: &ControlInvocation) -> Fragment {
		let options: TextareaOptions = parse_options(&invocation.options);
		render_textarea(context, &invocation.name, &invocation.attrs, &options)
	}
}
