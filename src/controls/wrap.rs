//! The generic wrap builder.

use crate::attrs::{AttrMap, open_tag};
use crate::fragment::Fragment;
use crate::options::{WrapOptions, parse_options};
use crate::registry::{ControlBuilder, ControlInvocation};
use crate::renderer::RenderContext;

/// Wrap `content` in an HTML tag.
///
/// A pure structural helper: no side effects, no name binding, no output
/// template. The select builder uses it for `<option>` elements.
///
/// # Examples
///
/// ```
/// use controlkit::{AttrMap, WrapOptions, render_wrap};
///
/// let attrs = AttrMap::new().attr("class", "notice");
/// let fragment = render_wrap("saved", &attrs, &WrapOptions::default());
/// assert_eq!(fragment.html(), r#"<div class="notice">saved</div>"#);
/// ```
pub fn render_wrap(content: &str, attrs: &AttrMap, options: &WrapOptions) -> Fragment {
	let html = format!(
		"{}{}{}</{}>{}",
		options.html_before,
		open_tag(&options.tag, attrs),
		content,
		options.tag,
		options.html_after
	);
	Fragment::new(html)
}

/// Registry entry for the wrap kind; the invocation's `name` slot
/// carries the content to wrap
pub struct WrapControl;

impl ControlBuilder for WrapControl {
	fn render(&self, _context: &RenderContext, invocation: &ControlInvocation) -> Fragment {
		let options: WrapOptions = parse_options(&invocation.options);
		render_wrap(&invocation.name, &invocation.attrs, &options)
	}
}
