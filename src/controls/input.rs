//! The `<input>` builder.

use crate::attrs::{AttrMap, open_tag};
use crate::fragment::{Fragment, SideEffect};
use crate::options::{InputOptions, parse_options};
use crate::registry::{ControlBuilder, ControlInvocation};
use crate::renderer::RenderContext;
use crate::template;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// Field names like `accent_color` or `colors[link_color]` opt into the
// color-picker hook.
static COLOR_NAME: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"_color\]?$").expect("COLOR_NAME: invalid regex pattern"));

/// Render an `<input>` control.
///
/// Built-in attribute defaults are `type="text"`, `id=""` and
/// `value=""`; the `name` attribute always comes from `name`, replacing
/// anything the attribute map says.
///
/// # Examples
///
/// ```
/// use controlkit::{AttrMap, InputOptions, render_input};
///
/// let attrs = AttrMap::new().attr("type", "text").attr("id", "x");
/// let fragment = render_input("foo", &attrs, &InputOptions::default());
/// assert_eq!(fragment.html(), r#"<input id="x" name="foo" type="text">"#);
/// ```
pub fn render_input(name: &str, attrs: &AttrMap, options: &InputOptions) -> Fragment {
	let mut attrs = attrs.clone();
	attrs.apply_defaults(&[
		("type", Value::from("text")),
		("id", Value::from("")),
		("value", Value::from("")),
	]);
	attrs.insert("name", name);

	let element = open_tag("input", &attrs);
	let html = match &options.format {
		Some(format) => {
			let id = attrs.text("id");
			let value = attrs.text("value");
			template::fill(
				format,
				&[
					(":input", element.as_str()),
					(":name", name),
					(":id", id.as_str()),
					(":value", value.as_str()),
				],
			)
		}
		None => element,
	};

	let mut fragment = Fragment::new(html);
	if wants_color_picker(name, &attrs, options) {
		fragment = fragment.with_effect(SideEffect::ColorPicker {
			field: name.to_string(),
		});
	}
	fragment
}

fn wants_color_picker(name: &str, attrs: &AttrMap, options: &InputOptions) -> bool {
	options.colorpicker
		|| (!options.nocolorpicker && attrs.text("type") == "text" && COLOR_NAME.is_match(name))
}

/// Registry entry for the input kind
pub struct InputControl;

impl ControlBuilder for InputControl {
	fn render(&self, _context: &RenderContext, invocation: &ControlInvocation) -> Fragment {
		let options: InputOptions = parse_options(&invocation.options);
		render_input(&invocation.name, &invocation.attrs, &options)
	}
}
