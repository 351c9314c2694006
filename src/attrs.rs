//! HTML attribute maps and their canonical serialization.
//!
//! Attribute values are JSON scalars. Whether a key renders is decided by
//! the emptiness predicate: `null`, `false` and `""` never render, `true`
//! renders as a bare boolean attribute, and everything else renders as
//! `key="value"`. Keys are emitted in lexicographic order, so output is
//! independent of insertion order. Values are emitted verbatim; callers
//! that need HTML escaping must escape upstream.

use serde_json::Value;
use std::collections::BTreeMap;

/// An HTML attribute map with deterministic serialization.
///
/// # Examples
///
/// ```
/// use controlkit::AttrMap;
///
/// let attrs = AttrMap::new().attr("type", "text").attr("id", "x");
/// assert_eq!(attrs.to_html(), r#"id="x" type="text""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrMap {
	entries: BTreeMap<String, Value>,
}

impl AttrMap {
	/// Create an empty attribute map
	pub fn new() -> Self {
		Self::default()
	}

	/// Build an attribute map from a JSON value.
	///
	/// Anything other than an object is recovered as an empty map, so an
	/// omitted or malformed attribute set is tolerated rather than
	/// rejected.
	///
	/// # Examples
	///
	/// ```
	/// use controlkit::AttrMap;
	/// use serde_json::json;
	///
	/// let attrs = AttrMap::from_value(&json!({"id": "x"}));
	/// assert_eq!(attrs.to_html(), r#"id="x""#);
	///
	/// assert!(AttrMap::from_value(&json!("not a map")).is_empty());
	/// ```
	pub fn from_value(value: &Value) -> Self {
		match value {
			Value::Object(entries) => Self {
				entries: entries
					.iter()
					.map(|(key, value)| (key.clone(), value.clone()))
					.collect(),
			},
			Value::Null => Self::new(),
			other => {
				tracing::warn!(got = %other, "expected an attribute object; using an empty map");
				Self::new()
			}
		}
	}

	/// Set an attribute, replacing any previous value
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.entries.insert(key.into(), value.into());
	}

	/// Builder-style [`insert`](Self::insert)
	pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(key, value);
		self
	}

	/// Builder-style `id` attribute
	pub fn id(self, value: impl Into<String>) -> Self {
		self.attr("id", value.into())
	}

	/// Builder-style `class` attribute; repeated calls append with a space
	pub fn class(mut self, value: impl Into<String>) -> Self {
		let class = value.into();
		match self.entries.get_mut("class") {
			Some(Value::String(existing)) if !existing.is_empty() => {
				existing.push(' ');
				existing.push_str(&class);
			}
			_ => {
				self.entries.insert("class".to_string(), Value::String(class));
			}
		}
		self
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.get(key)
	}

	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.entries.remove(key)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Copy each default whose key is entirely absent.
	///
	/// A present key always wins, even when its value is empty or falsy:
	/// "explicitly cleared" is preserved, never treated as unset. The
	/// merge is shallow.
	pub fn apply_defaults(&mut self, defaults: &[(&str, Value)]) {
		for (key, value) in defaults {
			if !self.entries.contains_key(*key) {
				self.entries.insert((*key).to_string(), value.clone());
			}
		}
	}

	/// The value under `key` coerced to attribute text, or an empty
	/// string when the key is absent or its value is suppressed
	pub fn text(&self, key: &str) -> String {
		self.entries
			.get(key)
			.and_then(attr_text)
			.unwrap_or_default()
	}

	/// Whether the value under `key` is present and truthy
	pub fn is_truthy(&self, key: &str) -> bool {
		self.entries.get(key).is_some_and(truthy)
	}

	/// Serialize to the canonical HTML attribute string.
	///
	/// Keys appear in lexicographic order; suppressed values are skipped
	/// entirely (there is no way to force-render an empty attribute);
	/// the result carries no leading or trailing whitespace. No HTML
	/// escaping is performed.
	pub fn to_html(&self) -> String {
		let mut parts = Vec::with_capacity(self.entries.len());
		for (key, value) in &self.entries {
			match value {
				Value::Bool(true) => parts.push(key.clone()),
				other => {
					if let Some(text) = attr_text(other) {
						parts.push(format!("{key}=\"{text}\""));
					}
				}
			}
		}
		parts.join(" ")
	}
}

/// Coerce a scalar to attribute text, or `None` when the emptiness
/// predicate suppresses it. `true` never reaches here as text; the
/// serializer renders it bare.
fn attr_text(value: &Value) -> Option<String> {
	match value {
		Value::String(text) if !text.is_empty() => Some(text.clone()),
		Value::Number(number) => Some(number.to_string()),
		_ => None,
	}
}

/// Loose truthiness: `false`, `null`, `""`, `"0"` and `0` are falsy
pub(crate) fn truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::String(text) => !text.is_empty() && text != "0",
		Value::Number(number) => number.as_f64().is_some_and(|number| number != 0.0),
		Value::Array(items) => !items.is_empty(),
		Value::Object(entries) => !entries.is_empty(),
	}
}

/// Open tag for `tag`, omitting the space entirely when no attribute
/// renders (`<div>` rather than `<div >`)
pub(crate) fn open_tag(tag: &str, attrs: &AttrMap) -> String {
	let rendered = attrs.to_html();
	if rendered.is_empty() {
		format!("<{tag}>")
	} else {
		format!("<{tag} {rendered}>")
	}
}
