//! Checked dispatch from control-kind tags to their builders.

use crate::attrs::AttrMap;
use crate::fragment::Fragment;
use crate::renderer::RenderContext;
use serde::Deserialize;
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// A single control invocation: the registry-facing descriptor.
///
/// For the wrap kind the `name` slot carries the content to wrap; every
/// other kind binds it as the `name` attribute, overriding anything the
/// attribute map says.
///
/// Deserializes from the compact `[kind, name, attrs?, options?]`
/// sequence form, tolerating omitted or malformed attribute/option
/// positions:
///
/// ```
/// use controlkit::ControlInvocation;
/// use serde_json::json;
///
/// let invocation: ControlInvocation =
/// 	serde_json::from_value(json!(["input", "a", {"id": "x"}])).unwrap();
/// assert_eq!(invocation.kind, "input");
/// assert_eq!(invocation.attrs.text("id"), "x");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ControlInvocation {
	pub kind: String,
	pub name: String,
	pub attrs: AttrMap,
	pub options: Value,
}

impl ControlInvocation {
	pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			kind: kind.into(),
			name: name.into(),
			attrs: AttrMap::new(),
			options: Value::Null,
		}
	}

	pub fn with_attrs(mut self, attrs: AttrMap) -> Self {
		self.attrs = attrs;
		self
	}

	pub fn with_options(mut self, options: Value) -> Self {
		self.options = options;
		self
	}
}

impl<'de> Deserialize<'de> for ControlInvocation {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct TupleVisitor;

		impl<'de> Visitor<'de> for TupleVisitor {
			type Value = ControlInvocation;

			fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
				formatter.write_str("a [kind, name, attrs?, options?] sequence")
			}

			fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
			where
				A: SeqAccess<'de>,
			{
				let kind: String = seq
					.next_element()?
					.ok_or_else(|| de::Error::invalid_length(0, &self))?;
				let name: String = seq
					.next_element()?
					.ok_or_else(|| de::Error::invalid_length(1, &self))?;
				let attrs = seq
					.next_element::<Value>()?
					.map(|value| AttrMap::from_value(&value))
					.unwrap_or_default();
				let options = seq.next_element::<Value>()?.unwrap_or(Value::Null);
				Ok(ControlInvocation { kind, name, attrs, options })
			}
		}

		deserializer.deserialize_seq(TupleVisitor)
	}
}

/// Builds one control kind from an invocation
pub trait ControlBuilder: Send + Sync {
	fn render(&self, context: &RenderContext, invocation: &ControlInvocation) -> Fragment;
}

/// Immutable mapping from control-kind tag to builder.
///
/// Populated before use and read-only thereafter; lookups are checked,
/// and a miss surfaces as
/// [`RenderError::UnknownControlKind`](crate::RenderError) at the call
/// site rather than a blind invoke.
///
/// # Examples
///
/// ```
/// use controlkit::ControlRegistry;
///
/// let registry = ControlRegistry::builtin();
/// assert!(registry.contains("input"));
/// assert!(registry.contains("select"));
/// assert!(!registry.contains("carousel"));
/// ```
pub struct ControlRegistry {
	builders: HashMap<String, Box<dyn ControlBuilder>>,
}

impl ControlRegistry {
	/// A registry with no kinds registered
	pub fn empty() -> Self {
		Self {
			builders: HashMap::new(),
		}
	}

	/// The built-in kinds: `input`, `textarea`, `select` and `wrap`
	pub fn builtin() -> Self {
		Self::empty()
			.with_builder("input", crate::controls::InputControl)
			.with_builder("textarea", crate::controls::TextareaControl)
			.with_builder("select", crate::controls::SelectControl)
			.with_builder("wrap", crate::controls::WrapControl)
	}

	/// Register a builder under a kind tag, replacing any previous one
	pub fn with_builder(
		mut self,
		kind: impl Into<String>,
		builder: impl ControlBuilder + 'static,
	) -> Self {
		self.builders.insert(kind.into(), Box::new(builder));
		self
	}

	pub fn get(&self, kind: &str) -> Option<&dyn ControlBuilder> {
		self.builders.get(kind).map(Box::as_ref)
	}

	pub fn contains(&self, kind: &str) -> bool {
		self.builders.contains_key(kind)
	}

	/// Registered kind tags, in no particular order
	pub fn kinds(&self) -> impl Iterator<Item = &str> {
		self.builders.keys().map(String::as_str)
	}
}

impl Default for ControlRegistry {
	fn default() -> Self {
		Self::builtin()
	}
}

impl fmt::Debug for ControlRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut kinds: Vec<&str> = self.kinds().collect();
		kinds.sort_unstable();
		f.debug_struct("ControlRegistry").field("kinds", &kinds).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_builtin_kinds() {
		let registry = ControlRegistry::builtin();
		let mut kinds: Vec<&str> = registry.kinds().collect();
		kinds.sort_unstable();
		assert_eq!(kinds, ["input", "select", "textarea", "wrap"]);
	}

	#[test]
	fn test_lookup_miss_is_none() {
		assert!(ControlRegistry::builtin().get("carousel").is_none());
		assert!(ControlRegistry::empty().get("input").is_none());
	}

	#[test]
	fn test_custom_builder_registration() {
		struct Fixed;
		impl ControlBuilder for Fixed {
			fn render(&self, _: &RenderContext, _: &ControlInvocation) -> Fragment {
				Fragment::new("<hr>")
			}
		}

		let registry = ControlRegistry::builtin().with_builder("rule", Fixed);
		let invocation = ControlInvocation::new("rule", "ignored");
		let fragment = registry
			.get("rule")
			.map(|builder| builder.render(&RenderContext::new(), &invocation));
		assert_eq!(fragment.map(|fragment| fragment.into_html()).as_deref(), Some("<hr>"));
	}

	#[test]
	fn test_invocation_from_two_element_tuple() {
		let invocation: ControlInvocation = serde_json::from_value(json!(["input", "a"])).unwrap();
		assert_eq!(invocation.kind, "input");
		assert_eq!(invocation.name, "a");
		assert!(invocation.attrs.is_empty());
		assert_eq!(invocation.options, Value::Null);
	}

	#[test]
	fn test_invocation_with_malformed_attrs_recovers() {
		let invocation: ControlInvocation =
			serde_json::from_value(json!(["input", "a", "oops", {"return": true}])).unwrap();
		assert!(invocation.attrs.is_empty());
		assert_eq!(invocation.options, json!({"return": true}));
	}
}
