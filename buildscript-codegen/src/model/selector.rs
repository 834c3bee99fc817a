//! Keys under which configuration statements are grouped.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::{
    Syntax,
    model::statement::{BlockStatement, Statement},
};

/// Something configuration can be attached to.
pub trait ConfigSelector: Clone + Eq + Hash {
    /// Selector text of the enclosing block, or `None` to emit statements unwrapped.
    fn code_block_selector(&self, syntax: &dyn Syntax) -> Option<String>;
}

/// A single task, by name and type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskSelector {
    pub task_name: String,
    pub task_type: String,
}

impl TaskSelector {
    pub fn new(task_name: impl Into<String>, task_type: impl Into<String>) -> Self {
        Self {
            task_name: task_name.into(),
            task_type: task_type.into(),
        }
    }
}

impl ConfigSelector for TaskSelector {
    fn code_block_selector(&self, syntax: &dyn Syntax) -> Option<String> {
        syntax.task_selector(&self.task_name, &self.task_type)
    }
}

/// Every task of a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskTypeSelector {
    pub task_type: String,
}

impl TaskTypeSelector {
    pub fn new(task_type: impl Into<String>) -> Self {
        Self {
            task_type: task_type.into(),
        }
    }
}

impl ConfigSelector for TaskTypeSelector {
    fn code_block_selector(&self, syntax: &dyn Syntax) -> Option<String> {
        syntax.task_by_type_selector(&self.task_type)
    }
}

/// A project extension, such as `application` or `java`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConventionSelector {
    pub convention_name: String,
}

impl ConventionSelector {
    pub fn new(convention_name: impl Into<String>) -> Self {
        Self {
            convention_name: convention_name.into(),
        }
    }
}

impl ConfigSelector for ConventionSelector {
    fn code_block_selector(&self, syntax: &dyn Syntax) -> Option<String> {
        syntax.convention_selector(&self.convention_name)
    }
}

/// Statements accumulated per selector, in first-use order.
#[derive(Debug, Clone)]
pub struct ConfigurationStatements<K: ConfigSelector> {
    blocks: IndexMap<K, Vec<Statement>>,
}

impl<K: ConfigSelector> Default for ConfigurationStatements<K> {
    fn default() -> Self {
        Self {
            blocks: IndexMap::new(),
        }
    }
}

impl<K: ConfigSelector> ConfigurationStatements<K> {
    pub fn add(&mut self, selector: K, statement: Statement) {
        self.blocks.entry(selector).or_default().push(statement);
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Turn the groups into plain statements for the active dialect.
    pub fn lower(&self, syntax: &dyn Syntax) -> Vec<Statement> {
        let mut out = Vec::new();
        for (selector, statements) in &self.blocks {
            match selector.code_block_selector(syntax) {
                Some(text) => {
                    out.push(BlockStatement::scoped(None, text, statements.clone()).into());
                }
                None => out.extend(statements.iter().cloned()),
            }
        }
        out
    }
}
