//! Typed option sets for each control kind.
//!
//! Every option struct deserializes from the JSON options carried by a
//! [`ControlInvocation`](crate::ControlInvocation) with
//! `#[serde(default)]`: an unset key falls back to the documented
//! default, while a present-but-empty key is preserved as given. A
//! missing or malformed options value recovers to the default set.

use crate::attrs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Where a rendered fragment goes: written to the output sink, or
/// returned to the caller as a value.
///
/// Deserializes from the `return` key of an options object; any truthy
/// value selects [`Return`](OutputMode::Return).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
	/// Write to the output sink, producing no value
	#[default]
	Emit,
	/// Produce the fragment as a value
	Return,
}

impl<'de> Deserialize<'de> for OutputMode {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = Value::deserialize(deserializer)?;
		Ok(if attrs::truthy(&value) {
			OutputMode::Return
		} else {
			OutputMode::Emit
		})
	}
}

/// Options for the input builder
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InputOptions {
	/// Output template; `:input`, `:name`, `:id` and `:value` are
	/// available as placeholders
	pub format: Option<String>,
	/// Force the color-picker hook regardless of the field name
	pub colorpicker: bool,
	/// Suppress the color-picker hook that a `_color`-suffixed name
	/// would otherwise trigger
	pub nocolorpicker: bool,
	#[serde(rename = "return")]
	pub output: OutputMode,
}

/// Options for the textarea builder
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TextareaOptions {
	/// Initial element content; a textarea has no `value` attribute, so
	/// the value travels in the options
	pub value: String,
	/// Output template; `:textarea`, `:value`, `:name` and `:id` are
	/// available as placeholders
	pub format: Option<String>,
	/// Delegate to the rich-text editor collaborator
	pub editor: bool,
	pub editor_height: Option<u32>,
	pub media_buttons: bool,
	pub teeny: bool,
	pub textarea_rows: u32,
	#[serde(rename = "return")]
	pub output: OutputMode,
}

impl Default for TextareaOptions {
	fn default() -> Self {
		Self {
			value: String::new(),
			format: None,
			editor: false,
			editor_height: None,
			media_buttons: true,
			teeny: false,
			textarea_rows: 20,
			output: OutputMode::Emit,
		}
	}
}

/// Options for the select builder
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SelectOptions {
	/// Fallback selected value used when `selected` is empty
	pub default: String,
	/// Ordered `(value, label)` choices; output preserves this order
	pub options: Vec<(String, String)>,
	pub html_before: String,
	pub html_after: String,
	/// Explicitly selected value(s); a scalar is accepted as a
	/// singleton, and an empty scalar as unset
	#[serde(deserialize_with = "one_or_many")]
	pub selected: Vec<String>,
	/// Output template; `:select`, `:name` and `:id` are available
	pub format: Option<String>,
	#[serde(rename = "return")]
	pub output: OutputMode,
}

/// Options for the wrap builder; wrap supports no output template
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WrapOptions {
	/// Tag to wrap the content in
	#[serde(rename = "in")]
	pub tag: String,
	pub html_before: String,
	pub html_after: String,
	#[serde(rename = "return")]
	pub output: OutputMode,
}

impl Default for WrapOptions {
	fn default() -> Self {
		Self {
			tag: "div".to_string(),
			html_before: String::new(),
			html_after: String::new(),
			output: OutputMode::Emit,
		}
	}
}

/// Options for the fieldset builder
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct FieldsetOptions {
	#[serde(rename = "return")]
	pub output: OutputMode,
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum OneOrMany {
		Many(Vec<String>),
		One(String),
		Unset(Option<()>),
	}

	Ok(match OneOrMany::deserialize(deserializer)? {
		OneOrMany::Many(values) => values,
		OneOrMany::One(value) if value.is_empty() => Vec::new(),
		OneOrMany::One(value) => vec![value],
		OneOrMany::Unset(_) => Vec::new(),
	})
}

/// Parse a typed option set from an invocation's JSON options.
///
/// A missing or non-object value, or an object that does not fit the
/// kind's option shape, recovers to the default option set rather than
/// failing; omitted arguments stay tolerated as they always were.
pub(crate) fn parse_options<T>(options: &Value) -> T
where
	T: DeserializeOwned + Default,
{
	match options {
		Value::Null => T::default(),
		Value::Object(_) => serde_json::from_value(options.clone()).unwrap_or_else(|error| {
			tracing::warn!(%error, "malformed options object; using defaults");
			T::default()
		}),
		other => {
			tracing::warn!(got = %other, "expected an options object; using defaults");
			T::default()
		}
	}
}

/// The output mode of an arbitrary options object, for kind-agnostic
/// dispatch
pub(crate) fn output_mode(options: &Value) -> OutputMode {
	if options.get("return").is_some_and(attrs::truthy) {
		OutputMode::Return
	} else {
		OutputMode::Emit
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[test]
	fn test_input_options_from_json() {
		let options: InputOptions = parse_options(&json!({
			"format": "<p>:input</p>",
			"colorpicker": true,
			"return": true,
		}));
		assert_eq!(options.format.as_deref(), Some("<p>:input</p>"));
		assert!(options.colorpicker);
		assert_eq!(options.output, OutputMode::Return);
	}

	#[test]
	fn test_textarea_defaults() {
		let options = TextareaOptions::default();
		assert!(options.media_buttons);
		assert_eq!(options.textarea_rows, 20);
		assert!(!options.editor);
		assert_eq!(options.output, OutputMode::Emit);
	}

	#[test]
	fn test_wrap_defaults_to_div() {
		let options: WrapOptions = parse_options(&json!({}));
		assert_eq!(options.tag, "div");
		let options: WrapOptions = parse_options(&json!({"in": "option"}));
		assert_eq!(options.tag, "option");
	}

	#[rstest]
	#[case(json!({"selected": "g"}), vec!["g".to_string()])]
	#[case(json!({"selected": ["a", "b"]}), vec!["a".to_string(), "b".to_string()])]
	#[case(json!({"selected": ""}), Vec::new())]
	#[case(json!({"selected": null}), Vec::new())]
	#[case(json!({}), Vec::new())]
	fn test_selected_accepts_scalar_or_list(#[case] options: Value, #[case] expected: Vec<String>) {
		let options: SelectOptions = parse_options(&options);
		assert_eq!(options.selected, expected);
	}

	#[test]
	fn test_select_choices_keep_author_order() {
		let options: SelectOptions = parse_options(&json!({
			"options": [["r", "Red"], ["g", "Green"]],
		}));
		assert_eq!(
			options.options,
			vec![
				("r".to_string(), "Red".to_string()),
				("g".to_string(), "Green".to_string()),
			]
		);
	}

	#[rstest]
	#[case(json!(null))]
	#[case(json!("return"))]
	#[case(json!([1, 2, 3]))]
	#[case(json!({"format": 17}))]
	fn test_malformed_options_recover_to_defaults(#[case] value: Value) {
		let options: InputOptions = parse_options(&value);
		assert!(options.format.is_none());
		assert_eq!(options.output, OutputMode::Emit);
	}

	#[rstest]
	#[case(json!({"return": true}), OutputMode::Return)]
	#[case(json!({"return": 1}), OutputMode::Return)]
	#[case(json!({"return": false}), OutputMode::Emit)]
	#[case(json!({"return": ""}), OutputMode::Emit)]
	#[case(json!({}), OutputMode::Emit)]
	fn test_output_mode_uses_truthiness(#[case] options: Value, #[case] expected: OutputMode) {
		assert_eq!(output_mode(&options), expected);
	}
}
