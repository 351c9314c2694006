//! The `<select>` builder.

use crate::attrs::{AttrMap, open_tag};
use crate::fragment::Fragment;
use crate::options::{SelectOptions, WrapOptions, parse_options};
use crate::registry::{ControlBuilder, ControlInvocation};
use crate::renderer::RenderContext;
use crate::template;
use serde_json::Value;

use super::wrap::render_wrap;

/// Render a `<select>` control.
///
/// A truthy `multiple` attribute is rewritten to the literal
/// `multiple="multiple"` and `[]` is appended to the name before the
/// name binding. Choices render in the order given; the chosen ones
/// carry a bare `selected` attribute. The explicit `selected` option
/// wins over `default`, which only applies when `selected` is empty.
///
/// # Examples
///
/// ```
/// use controlkit::{AttrMap, SelectOptions, render_select};
///
/// let options = SelectOptions {
/// 	options: vec![("r".into(), "Red".into()), ("g".into(), "Green".into())],
/// 	selected: vec!["g".into()],
/// 	..SelectOptions::default()
/// };
/// let fragment = render_select("color", &AttrMap::new(), &options);
/// assert_eq!(
/// 	fragment.html(),
/// 	r#"<select name="color"><option value="r">Red</option><option selected value="g">Green</option></select>"#
/// );
/// ```
pub fn render_select(name: &str, attrs: &AttrMap, options: &SelectOptions) -> Fragment {
	let mut attrs = attrs.clone();
	attrs.apply_defaults(&[("id", Value::from(""))]);

	let mut name = name.to_string();
	if attrs.is_truthy("multiple") {
		attrs.insert("multiple", "multiple");
		name.push_str("[]");
	}
	attrs.insert("name", name.as_str());

	let fallback = [options.default.clone()];
	let selected: &[String] = if options.selected.is_empty() {
		fallback.as_slice()
	} else {
		options.selected.as_slice()
	};

	let option_shape = WrapOptions {
		tag: "option".to_string(),
		..WrapOptions::default()
	};
	let mut choices = String::new();
	for (value, label) in &options.options {
		let mut option_attrs = AttrMap::new().attr("value", value.as_str());
		if selected.iter().any(|chosen| chosen == value) {
			option_attrs.insert("selected", true);
		}
		choices.push_str(render_wrap(label, &option_attrs, &option_shape).html());
	}

	let element = format!(
		"{}{}{}</select>{}",
		options.html_before,
		open_tag("select", &attrs),
		choices,
		options.html_after
	);
	let html = match &options.format {
		Some(format) => {
			let id = attrs.text("id");
			template::fill(
				format,
				&[
					(":select", element.as_str()),
					(":name", name.as_str()),
					(":id", id.as_str()),
				],
			)
		}
		None => element,
	};
	Fragment::new(html)
}

/// Registry entry for the select kind
pub struct SelectControl;

impl ControlBuilder for SelectControl {
	fn render(&self, _context: &RenderContext, invocation: &ControlInvocation) -> Fragment {
		let options: SelectOptions = parse_options(&invocation.options);
		render_select(&invocation.name, &invocation.attrs, &options)
	}
}
