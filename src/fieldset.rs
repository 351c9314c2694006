//! Fieldset composition over registered controls.

use crate::attrs::AttrMap;
use crate::error::{RenderError, RenderResult};
use crate::fragment::Fragment;
use crate::registry::{ControlInvocation, ControlRegistry};
use crate::renderer::RenderContext;
use crate::template;

const FIELDSET_TEMPLATE: &str = "<fieldset:parameters><legend>:legend</legend>:controls</fieldset>";

/// Render a fieldset of child controls.
///
/// Children dispatch through the registry and render in declaration
/// order; their output is always captured as a value, never written to a
/// sink, regardless of what their options say. Child side effects are
/// aggregated onto the fieldset fragment in the same order. A kind
/// missing from the registry aborts the whole render with no partial
/// output.
pub fn render_fieldset(
	context: &RenderContext,
	registry: &ControlRegistry,
	legend: &str,
	controls: &[ControlInvocation],
	attrs: &AttrMap,
) -> RenderResult<Fragment> {
	let mut inner = Fragment::default();
	for (index, invocation) in controls.iter().enumerate() {
		let builder =
			registry
				.get(&invocation.kind)
				.ok_or_else(|| RenderError::UnknownControlKind {
					kind: invocation.kind.clone(),
					index,
				})?;
		tracing::debug!(kind = %invocation.kind, name = %invocation.name, "rendering fieldset child");
		inner.absorb(builder.render(context, invocation));
	}

	let rendered = attrs.to_html();
	let parameters = if rendered.is_empty() {
		String::new()
	} else {
		format!(" {rendered}")
	};
	Ok(inner.map_html(|controls_html| {
		template::fill(
			FIELDSET_TEMPLATE,
			&[
				(":parameters", parameters.as_str()),
				(":legend", legend),
				(":controls", controls_html.as_str()),
			],
		)
	}))
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn render(
		legend: &str,
		controls: &[ControlInvocation],
		attrs: &AttrMap,
	) -> RenderResult<Fragment> {
		render_fieldset(
			&RenderContext::new(),
			&ControlRegistry::builtin(),
			legend,
			controls,
			attrs,
		)
	}

	#[test]
	fn test_children_concatenate_in_declaration_order() {
		let controls = [
			ControlInvocation::new("input", "a"),
			ControlInvocation::new("input", "b"),
		];
		let fragment = render("Info", &controls, &AttrMap::new()).unwrap();
		assert_eq!(
			fragment.html(),
			r#"<fieldset><legend>Info</legend><input name="a" type="text"><input name="b" type="text"></fieldset>"#
		);
	}

	#[test]
	fn test_unknown_kind_fails_with_position() {
		let controls = [
			ControlInvocation::new("input", "a"),
			ControlInvocation::new("unknown_kind", "b"),
		];
		let error = render("X", &controls, &AttrMap::new()).unwrap_err();
		match error {
			RenderError::UnknownControlKind { kind, index } => {
				assert_eq!(kind, "unknown_kind");
				assert_eq!(index, 1);
			}
		}
	}

	#[test]
	fn test_attributes_render_into_the_shell() {
		let attrs = AttrMap::new().id("info").class("wide");
		let fragment = render("Info", &[], &attrs).unwrap();
		assert_eq!(
			fragment.html(),
			r#"<fieldset class="wide" id="info"><legend>Info</legend></fieldset>"#
		);
	}

	#[test]
	fn test_empty_legend_leaves_element_empty() {
		let fragment = render("", &[], &AttrMap::new()).unwrap();
		assert_eq!(fragment.html(), "<fieldset><legend></legend></fieldset>");
	}

	#[test]
	fn test_child_side_effects_aggregate_in_order() {
		let controls = [
			ControlInvocation::new("input", "accent_color"),
			ControlInvocation::new("input", "plain"),
			ControlInvocation::new("input", "border_color"),
		];
		let fragment = render("Colors", &controls, &AttrMap::new()).unwrap();
		let fields: Vec<&str> = fragment
			.effects()
			.iter()
			.map(|effect| match effect {
				crate::fragment::SideEffect::ColorPicker { field } => field.as_str(),
			})
			.collect();
		assert_eq!(fields, ["accent_color", "border_color"]);
	}

	#[test]
	fn test_mixed_kinds_through_the_registry() {
		let controls = [
			ControlInvocation::new("input", "title"),
			ControlInvocation::new("select", "color").with_options(json!({
				"options": [["r", "Red"]],
			})),
			ControlInvocation::new("wrap", "note").with_options(json!({"in": "p"})),
		];
		let fragment = render("Mixed", &controls, &AttrMap::new()).unwrap();
		let html = fragment.html();
		assert!(html.contains(r#"<input name="title" type="text">"#));
		assert!(html.contains(r#"<select name="color"><option value="r">Red</option></select>"#));
		assert!(html.contains("<p>note</p>"));
	}
}
