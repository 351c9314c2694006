//! Collaborator contracts consumed by the renderer.
//!
//! The rich-text editor and the client-side widget scripts are opaque to
//! the core: only their call contracts live here, together with the
//! built-in jQuery color-picker hook.

/// Settings handed to the rich-text editor collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSettings {
	/// Editor height in pixels, when the integration supports it
	pub height: Option<u32>,
	/// Whether media upload buttons are shown
	pub media_buttons: bool,
	/// Whether the minimal editor variant is used
	pub teeny: bool,
	/// The `name` attribute the editor binds its textarea to
	pub textarea_name: String,
	/// Textarea rows for the editor's fallback markup
	pub rows: u32,
}

/// A rich-text editor widget rendered in place of a plain textarea.
///
/// `field_id` is unique within a page by pre-existing contract only; an
/// implementation needing stable identifiers should derive them from
/// `settings.textarea_name` instead.
pub trait RichTextEditor: Send + Sync {
	/// Render the editor bound to `field_id`, returning opaque HTML
	fn render(&self, value: &str, field_id: &str, settings: &EditorSettings) -> String;
}

/// Client-side script hooks attached to rendered controls
pub trait WidgetScripts: Send + Sync {
	/// A script fragment binding a color-picker widget to the DOM
	/// element whose `name` attribute equals `field_name`
	fn color_picker(&self, field_name: &str) -> String;
}

/// The built-in script hook: an inline jQuery binding on document ready
#[derive(Debug, Clone, Copy, Default)]
pub struct JQueryColorPicker;

impl WidgetScripts for JQueryColorPicker {
	fn color_picker(&self, field_name: &str) -> String {
		format!(
			r#"<script>jQuery(document).ready(function($){{$('[name="{field_name}"]').colorPicker();}});</script>"#
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_color_picker_targets_the_field_by_name() {
		let script = JQueryColorPicker.color_picker("colors[link_color]");
		assert!(script.starts_with("<script>"));
		assert!(script.ends_with("</script>"));
		assert!(script.contains(r#"[name="colors[link_color]"]"#));
	}
}
