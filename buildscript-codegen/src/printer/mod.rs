//! Single-pass pretty printer for the statement tree.
//!
//! The printer owns the layout rules shared by every dialect:
//!
//! - anything with a comment, and every group, is surrounded by blank lines,
//!   except at the start of a block
//! - blank lines are never doubled and never indented
//! - comments are printed as `// ...` lines, or as numbered ` // <n>` markers
//!   when comments are extracted to a separate listing

mod code_writer;

pub use code_writer::CodeWriter;

use buildscript_core::{InsecureProtocol, split_comment};

use crate::{
    Result, Syntax,
    model::{Statement, StatementType},
};

const HEADER_FIRST_LINE: &str = " * This file was generated by the Gradle 'init' task.";

/// Renders statements using one dialect.
pub struct PrettyPrinter<'a> {
    syntax: &'a dyn Syntax,
    insecure_protocol: InsecureProtocol,
    external_comments: bool,
    writer: CodeWriter,
    eol_comment: Option<String>,
    comment_count: usize,
    need_separator_line: bool,
    first_statement_of_block: bool,
    has_separator_line: bool,
}

impl<'a> PrettyPrinter<'a> {
    pub fn new(
        syntax: &'a dyn Syntax,
        insecure_protocol: InsecureProtocol,
        external_comments: bool,
    ) -> Self {
        Self {
            syntax,
            insecure_protocol,
            external_comments,
            writer: CodeWriter::default(),
            eol_comment: None,
            comment_count: 0,
            need_separator_line: true,
            first_statement_of_block: false,
            has_separator_line: false,
        }
    }

    pub fn syntax(&self) -> &'a dyn Syntax {
        self.syntax
    }

    pub fn insecure_protocol(&self) -> InsecureProtocol {
        self.insecure_protocol
    }

    /// Print the generated-file banner. Skipped when comments are extracted.
    pub fn print_file_header(&mut self, lines: &[String]) {
        if self.external_comments {
            return;
        }
        self.println("/*");
        self.println(HEADER_FIRST_LINE);
        if !lines.is_empty() {
            self.println(" *");
            for line in lines {
                if line.is_empty() {
                    self.println(" *");
                } else {
                    self.println(&format!(" * {}", line));
                }
            }
        }
        self.println(" */");
    }

    pub fn print_block(&mut self, selector: &str, body: &[Statement]) -> Result<()> {
        self.println(&format!("{} {{", selector));
        self.writer.push_indent();
        self.need_separator_line = false;
        self.first_statement_of_block = true;

        self.print_statements(body)?;

        self.writer.push_dedent();
        self.println("}");

        // a block is always followed by a separator
        self.need_separator_line = true;
        Ok(())
    }

    pub fn print_statements(&mut self, statements: &[Statement]) -> Result<()> {
        for statement in statements {
            self.print_statement(statement)?;
        }
        Ok(())
    }

    pub fn print_statement(&mut self, statement: &Statement) -> Result<()> {
        let statement_type = statement.statement_type();
        if statement_type == StatementType::Empty {
            return Ok(());
        }

        let comment = statement.comment();
        let needs_separator = comment.is_some() || statement_type == StatementType::Group;
        if needs_separator && !self.first_statement_of_block {
            self.need_separator_line = true;
        }

        self.print_statement_separator();

        if let Some(comment) = comment {
            if self.external_comments {
                self.comment_count += 1;
                self.eol_comment = Some(format!(" // <{}>", self.comment_count));
            } else {
                for line in split_comment(comment) {
                    self.println(&format!("// {}", line));
                }
            }
        }

        statement.write_code_to(self)?;

        self.first_statement_of_block = false;
        if needs_separator {
            self.need_separator_line = true;
        }
        Ok(())
    }

    /// Print one line of code, with any pending comment marker appended.
    pub fn println(&mut self, line: &str) {
        match self.eol_comment.take() {
            Some(marker) => self.writer.push_line(&format!("{}{}", line, marker)),
            None => self.writer.push_line(line),
        };
        self.has_separator_line = false;
    }

    /// Consume the printer and return the rendered text.
    pub fn finish(self) -> String {
        self.writer.build()
    }

    fn print_statement_separator(&mut self) {
        if self.need_separator_line && !self.has_separator_line {
            self.writer.push_blank();
            self.has_separator_line = true;
            self.need_separator_line = false;
        }
    }
}
