//! Line buffer with indentation tracking.

/// One nesting level; both Gradle dialects indent by four spaces.
const INDENT: &str = "    ";

/// Accumulates indented lines of text.
///
/// # Example
///
/// ```
/// use buildscript_codegen::printer::CodeWriter;
///
/// let mut writer = CodeWriter::default();
/// writer
///     .push_line("plugins {")
///     .push_indent()
///     .push_line("application")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(writer.build(), "plugins {\n    application\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeWriter {
    indent_level: usize,
    buffer: String,
}

impl CodeWriter {
    /// Add a line with the current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line. Blank lines are never indented.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Consume the writer and return the accumulated text.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_indentation() {
        let mut writer = CodeWriter::default();
        writer
            .push_line("testing {")
            .push_indent()
            .push_line("suites {")
            .push_indent()
            .push_line("x")
            .push_dedent()
            .push_line("}")
            .push_dedent()
            .push_line("}");
        assert_eq!(
            writer.build(),
            "testing {\n    suites {\n        x\n    }\n}\n"
        );
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut writer = CodeWriter::default();
        writer.push_indent().push_line("a").push_blank().push_line("b");
        assert_eq!(writer.build(), "    a\n\n    b\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut writer = CodeWriter::default();
        writer.push_dedent().push_line("x");
        assert_eq!(writer.build(), "x\n");
    }
}
