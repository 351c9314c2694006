//! Rendered fragments and their side effects.

use crate::external::WidgetScripts;
use std::fmt;

/// A deferred client-side hook attached to a rendered control.
///
/// Side effects are carried as descriptors rather than inlined script
/// text, so composites and callers decide where the scripts land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
	/// Bind the color-picker widget to the control whose `name`
	/// attribute equals `field`
	ColorPicker { field: String },
}

/// The result of rendering a control: immutable markup plus the side
/// effects it requested, in the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
	html: String,
	effects: Vec<SideEffect>,
}

impl Fragment {
	pub fn new(html: impl Into<String>) -> Self {
		Self {
			html: html.into(),
			effects: Vec::new(),
		}
	}

	pub(crate) fn with_effect(mut self, effect: SideEffect) -> Self {
		self.effects.push(effect);
		self
	}

	/// The markup, without side-effect scripts
	pub fn html(&self) -> &str {
		&self.html
	}

	pub fn effects(&self) -> &[SideEffect] {
		&self.effects
	}

	/// Consume the fragment, keeping the markup only
	pub fn into_html(self) -> String {
		self.html
	}

	/// The markup followed by the script text for each recorded side
	/// effect
	pub fn to_html_with(&self, scripts: &dyn WidgetScripts) -> String {
		let mut html = self.html.clone();
		for effect in &self.effects {
			match effect {
				SideEffect::ColorPicker { field } => html.push_str(&scripts.color_picker(field)),
			}
		}
		html
	}

	/// Append another fragment's markup and side effects
	pub(crate) fn absorb(&mut self, other: Fragment) {
		self.html.push_str(&other.html);
		self.effects.extend(other.effects);
	}

	/// Rebuild the markup while keeping the recorded side effects
	pub(crate) fn map_html(self, rebuild: impl FnOnce(String) -> String) -> Self {
		Self {
			html: rebuild(self.html),
			effects: self.effects,
		}
	}
}

impl fmt::Display for Fragment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.html)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::external::JQueryColorPicker;

	#[test]
	fn test_absorb_preserves_order() {
		let mut fragment = Fragment::new("<a>");
		fragment.absorb(Fragment::new("<b>").with_effect(SideEffect::ColorPicker {
			field: "b".to_string(),
		}));
		fragment.absorb(Fragment::new("<c>").with_effect(SideEffect::ColorPicker {
			field: "c".to_string(),
		}));
		assert_eq!(fragment.html(), "<a><b><c>");
		assert_eq!(
			fragment.effects(),
			&[
				SideEffect::ColorPicker { field: "b".to_string() },
				SideEffect::ColorPicker { field: "c".to_string() },
			]
		);
	}

	#[test]
	fn test_to_html_with_appends_scripts_after_markup() {
		let fragment = Fragment::new("<input>").with_effect(SideEffect::ColorPicker {
			field: "accent_color".to_string(),
		});
		let html = fragment.to_html_with(&JQueryColorPicker);
		assert!(html.starts_with("<input><script>"));
		assert!(html.contains(r#"[name="accent_color"]"#));
	}

	#[test]
	fn test_map_html_keeps_effects() {
		let fragment = Fragment::new("inner")
			.with_effect(SideEffect::ColorPicker { field: "x".to_string() })
			.map_html(|html| format!("<div>{html}</div>"));
		assert_eq!(fragment.html(), "<div>inner</div>");
		assert_eq!(fragment.effects().len(), 1);
	}
}
