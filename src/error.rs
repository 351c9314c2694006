//! Error types for control rendering

use thiserror::Error;

/// Errors raised while rendering controls.
///
/// Rendering is total for well-formed descriptors; the only failure is a
/// composite child naming a control kind the registry does not know.
#[derive(Debug, Error)]
pub enum RenderError {
	/// A control referenced a kind missing from the registry
	#[error("unknown control kind `{kind}` (control list position {index})")]
	UnknownControlKind { kind: String, index: usize },
}

pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unknown_kind_names_kind_and_position() {
		let error = RenderError::UnknownControlKind {
			kind: "carousel".to_string(),
			index: 3,
		};
		let message = error.to_string();
		assert!(message.contains("carousel"));
		assert!(message.contains('3'));
	}
}
