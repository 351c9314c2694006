//! Placeholder substitution for control output templates.

/// Replace each `:token` placeholder with its value in a single
/// left-to-right pass.
///
/// At every `:` the longest matching supplied token is consumed and its
/// replacement appended verbatim. Replacement text is never re-scanned,
/// so a value that itself contains a placeholder token survives
/// unchanged. Unknown tokens and stray `:` pass through. With no
/// matching tokens the template comes back untouched.
///
/// # Examples
///
/// ```
/// use controlkit::template::fill;
///
/// let html = fill("<label>:name</label>:input", &[
/// 	(":input", r#"<input name="a">"#),
/// 	(":name", "a"),
/// ]);
/// assert_eq!(html, r#"<label>a</label><input name="a">"#);
///
/// // Unknown tokens pass through verbatim.
/// assert_eq!(fill("a :b c", &[(":x", "y")]), "a :b c");
/// ```
pub fn fill(template: &str, replacements: &[(&str, &str)]) -> String {
	let mut output = String::with_capacity(template.len());
	let mut rest = template;
	while let Some(position) = rest.find(':') {
		output.push_str(&rest[..position]);
		rest = &rest[position..];
		let matched = replacements
			.iter()
			.filter(|(token, _)| rest.starts_with(token))
			.max_by_key(|(token, _)| token.len());
		match matched {
			Some((token, value)) => {
				output.push_str(value);
				rest = &rest[token.len()..];
			}
			None => {
				output.push(':');
				rest = &rest[1..];
			}
		}
	}
	output.push_str(rest);
	output
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn prop_colonless_templates_are_identity(template in "[^:]*") {
			prop_assert_eq!(fill(&template, &[(":name", "x")]), template);
		}

		#[test]
		fn prop_empty_replacement_list_is_identity(template in "\\PC*") {
			prop_assert_eq!(fill(&template, &[]), template);
		}
	}
}
