//! Default page template and HTML comparison helpers.

/// Starter content for newly created pages.
pub const DEFAULT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>My Website</title>
  </head>
  <body style="margin:0;display:flex;align-items:center;justify-content:center;min-height:100dvh;font-family:sans-serif;background:#0a0a0a;color:#fafafa;">
    <main style="text-align:center;">
      <h1>Ready when you are.</h1>
      <p>Describe the page you want and watch it take shape here.</p>
    </main>
  </body>
</html>
"#;

/// Whitespace-insensitive HTML equality.
///
/// Used to decide whether a page still matches the untouched starter
/// template, so formatting differences introduced by a code editor do not
/// count as edits.
pub fn is_same_html(left: &str, right: &str) -> bool {
    normalize(left) == normalize(right)
}

fn normalize(html: &str) -> String {
    html.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_html_is_same() {
        assert!(is_same_html(DEFAULT_HTML, DEFAULT_HTML));
    }

    #[test]
    fn test_reformatted_html_is_same() {
        let compact = "<div><p>hello</p></div>";
        let spread = "<div>\n  <p>hello</p>\n</div>\n";
        assert!(is_same_html(compact, spread));
    }

    #[test]
    fn test_content_change_is_not_same() {
        assert!(!is_same_html("<p>hello</p>", "<p>goodbye</p>"));
    }
}
