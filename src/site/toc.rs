//! Table of contents for an article.

use crate::markdown::{Heading, escape_html};

/// Render headings as `<li>` items linking to their in-page anchors.
///
/// The caller owns the surrounding list element and hides it when the
/// result is empty.
///
/// # Examples
///
/// ```
/// use notedown::markdown::render_markdown;
/// use notedown::site::render_toc;
///
/// let result = render_markdown("# Intro\n## Details");
/// assert_eq!(
///     render_toc(&result.headings),
///     concat!(
///         r##"<li><a href="#intro" data-heading-level="1">Intro</a></li>"##,
///         r##"<li><a href="#details" data-heading-level="2">Details</a></li>"##,
///     )
/// );
/// ```
pub fn render_toc(headings: &[Heading]) -> String {
    let mut html = String::new();
    for heading in headings {
        html.push_str(&format!(
            r##"<li><a href="#{}" data-heading-level="{}">{}</a></li>"##,
            heading.id,
            heading.level,
            escape_html(&heading.text)
        ));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(render_toc(&[]), "");
    }

    #[test]
    fn test_text_is_escaped_not_formatted() {
        let headings = vec![Heading {
            level: 3,
            text: "**A** <b>".to_string(),
            id: "a-b".to_string(),
        }];
        assert_eq!(
            render_toc(&headings),
            r##"<li><a href="#a-b" data-heading-level="3">**A** &lt;b&gt;</a></li>"##
        );
    }
}
