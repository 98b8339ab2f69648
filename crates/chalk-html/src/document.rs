//! Splitting written markup into the parts of a document.
//!
//! This is not an HTML parser. It only locates the body element the way a browser's
//! `document.write` stream ends up exposing it:
//!
//! - With an explicit `<body ...>`, everything between its start tag and the last `</body>` is
//!   the body. A body that is not closed yet (mid-typing) runs to a trailing `</html>` or the
//!   end of the source.
//! - Without one, a leading doctype / `<html>` / `<head>...</head>` shell and a trailing
//!   `</html>` are kept out of the body and everything else is body content.

use regex::Regex;

/// A materialized document, split around its body content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Everything up to and including the body start tag (may be empty).
    pub head: String,
    /// The body's content.
    pub body: String,
    /// The body end tag and whatever follows it (may be empty).
    pub tail: String,
}

impl Document {
    /// The whole document source.
    pub fn source(&self) -> String {
        let mut out = String::with_capacity(self.head.len() + self.body.len() + self.tail.len());
        out.push_str(&self.head);
        out.push_str(&self.body);
        out.push_str(&self.tail);
        out
    }
}

#[derive(Debug, Clone)]
pub(crate) struct DocumentParser {
    body_open: Regex,
    body_close: Regex,
    shell: Regex,
    closing: Regex,
}

impl DocumentParser {
    pub(crate) fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            body_open: Regex::new(r"(?is)^.*?<body\b[^>]*>")?,
            body_close: Regex::new(r"(?is)^.*(</body\s*>)")?,
            shell: Regex::new(
                r"(?is)^(?:\s*<!doctype[^>]*>)?(?:\s*<html\b[^>]*>)?(?:\s*<head\b[^>]*>.*?</head\s*>)?",
            )?,
            closing: Regex::new(r"(?is)</html\s*>\s*$")?,
        })
    }

    pub(crate) fn parse(&self, source: &str) -> Document {
        let head_end = match self.body_open.find(source) {
            Some(open) => open.end(),
            None => self.shell.find(source).map_or(0, |m| m.end()),
        };
        let rest = &source[head_end..];
        // The last `</body>` closes the body; an unclosed body runs up to `</html>` or the end.
        let body_end = self
            .body_close
            .captures(rest)
            .and_then(|caps| caps.get(1))
            .or_else(|| self.closing.find(rest))
            .map_or(rest.len(), |m| m.start());
        Document {
            head: source[..head_end].to_string(),
            body: rest[..body_end].to_string(),
            tail: rest[body_end..].to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> Document {
        DocumentParser::new().unwrap().parse(source)
    }

    #[test]
    fn test_fragment_is_all_body() {
        let doc = parse("  <p>indented</p>\n");
        assert_eq!(doc.head, "");
        assert_eq!(doc.body, "  <p>indented</p>\n");
        assert_eq!(doc.tail, "");
    }

    #[test]
    fn test_explicit_body() {
        let doc = parse("<html><BODY id=\"b\">\n  x\n</BODY></html>");
        assert_eq!(doc.head, "<html><BODY id=\"b\">");
        assert_eq!(doc.body, "\n  x\n");
        assert_eq!(doc.tail, "</BODY></html>");
    }

    #[test]
    fn test_unclosed_body_excludes_start_tag() {
        let doc = parse("<html><body><p>x</p>");
        assert_eq!(doc.head, "<html><body>");
        assert_eq!(doc.body, "<p>x</p>");
        assert_eq!(doc.tail, "");

        assert_eq!(parse("<body>x").body, parse("<body>x</body>").body);

        let doc = parse("<html><body class=\"a\">x</html>");
        assert_eq!(doc.body, "x");
        assert_eq!(doc.tail, "</html>");
    }

    #[test]
    fn test_last_body_close_wins() {
        let doc = parse("<body>a</body>b</body>");
        assert_eq!(doc.body, "a</body>b");
        assert_eq!(doc.tail, "</body>");
    }

    #[test]
    fn test_shell_without_body() {
        let source = "<!DOCTYPE html>\n<html><head><style>p{}</style></head><p>x</p></html>";
        let doc = parse(source);
        assert_eq!(doc.body, "<p>x</p>");
        assert_eq!(doc.source(), source);
    }

    #[test]
    fn test_bodyguard_is_not_a_body_tag() {
        let doc = parse("<bodyguard>x</bodyguard>");
        assert_eq!(doc.body, "<bodyguard>x</bodyguard>");
    }
}
