/// Indentation-aware string builder for emitting JS source code.
pub struct CodeWriter {
    buf: String,
    depth: usize,
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeWriter {
    pub fn new() -> Self {
        Self {
            buf: String::new(),
            depth: 0,
        }
    }

    /// Write a line at the current indentation level.
    pub fn line(&mut self, text: &str) {
        self.write_indent();
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Open an array literal: write `text [` and increase indent.
    pub fn open_array(&mut self, text: &str) {
        self.write_indent();
        self.buf.push_str(text);
        self.buf.push_str(" [\n");
        self.depth += 1;
    }

    /// Close an array literal: decrease indent and write `];`.
    pub fn close_array(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.write_indent();
        self.buf.push_str("];\n");
    }

    /// Consume and return the built string.
    pub fn finish(self) -> String {
        self.buf
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.buf.push_str("    ");
        }
    }
}

/// Escape a string for embedding in a JS single-quoted string literal.
///
/// `</` is broken up so the literal cannot terminate an inline `<script>`.
pub fn escape_js_single(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev = '\0';
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            '/' if prev == '<' => out.push_str("\\/"),
            _ => out.push(c),
        }
        prev = c;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line() {
        let mut w = CodeWriter::new();
        w.line("var X = 1;");
        assert_eq!(w.finish(), "var X = 1;\n");
    }

    #[test]
    fn test_array_block() {
        let mut w = CodeWriter::new();
        w.open_array("var X =");
        w.line("'a',");
        w.close_array();
        w.line("var Y = 2;");
        assert_eq!(w.finish(), "var X = [\n    'a',\n];\nvar Y = 2;\n");
    }

    #[test]
    fn test_unbalanced_close_stays_at_zero() {
        let mut w = CodeWriter::new();
        w.close_array();
        w.line("x");
        assert_eq!(w.finish(), "];\nx\n");
    }

    #[test]
    fn test_escape_js_single() {
        assert_eq!(escape_js_single("hello"), "hello");
        assert_eq!(escape_js_single("it's"), "it\\'s");
        assert_eq!(escape_js_single("a\\b"), "a\\\\b");
        assert_eq!(escape_js_single("a\nb\r"), "a\\nb\\r");
        assert_eq!(escape_js_single("a\u{2028}b"), "a\\u2028b");
        assert_eq!(escape_js_single("</script>"), "<\\/script>");
        assert_eq!(escape_js_single("a/b"), "a/b");
        assert_eq!(escape_js_single("\"x\""), "\"x\"");
    }
}
