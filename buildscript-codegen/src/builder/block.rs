use crate::model::{
    BlockStatement, ContainerElement, Expr, Invocation, MethodCall, PropertyAssignment, Statement,
    UnitDeclaration, UnitKind,
};

/// Append-only body of a block.
///
/// Used for the free-form top level of a script as well as every nested block
/// the builder hands out through closures.
#[derive(Debug, Clone, Default)]
pub struct ScriptBlock {
    statements: Vec<Statement>,
}

impl ScriptBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a plain (legacy) property: `name = value`.
    pub fn property_assignment(
        &mut self,
        comment: Option<&str>,
        name: &str,
        value: impl Into<Expr>,
    ) -> &mut Self {
        self.statements
            .push(Statement::Property(PropertyAssignment::new(comment, name, value, true)));
        self
    }

    /// Assign a lazy property, rendered as a setter call where the dialect needs one.
    pub fn lazy_property_assignment(
        &mut self,
        comment: Option<&str>,
        name: &str,
        value: impl Into<Expr>,
    ) -> &mut Self {
        self.statements
            .push(Statement::Property(PropertyAssignment::new(comment, name, value, false)));
        self
    }

    pub fn method_invocation(
        &mut self,
        comment: Option<&str>,
        name: &str,
        args: impl IntoIterator<Item = Expr>,
    ) -> &mut Self {
        self.push_call(comment, MethodCall::new(name, args))
    }

    pub fn method_invocation_on(
        &mut self,
        comment: Option<&str>,
        target: impl Into<Expr>,
        name: &str,
        args: impl IntoIterator<Item = Expr>,
    ) -> &mut Self {
        self.push_call(comment, MethodCall::on(target, name, args))
    }

    /// Open a nested `selector { }` block, filled by `f`.
    ///
    /// The block disappears from the output when nothing inside it prints.
    pub fn block(
        &mut self,
        comment: Option<&str>,
        selector: &str,
        f: impl FnOnce(&mut ScriptBlock),
    ) -> &mut Self {
        let mut body = ScriptBlock::new();
        f(&mut body);
        self.statements
            .push(BlockStatement::scoped(comment, selector, body.statements).into());
        self
    }

    /// Add a comment on its own, not attached to any code.
    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.statements.push(Statement::Comment(text.to_string()));
        self
    }

    pub fn statement(&mut self, statement: Statement) -> &mut Self {
        self.statements.push(statement);
        self
    }

    /// Create an element in `container` and configure it with `f`.
    pub fn container_element(
        &mut self,
        comment: Option<&str>,
        container: &str,
        element: &str,
        element_type: Option<&str>,
        f: impl FnOnce(&mut ScriptBlock),
    ) -> Expr {
        let mut body = ScriptBlock::new();
        f(&mut body);
        self.push_container_element(ContainerElement {
            comment: comment.map(str::to_string),
            container: container.to_string(),
            element_name: element.to_string(),
            element_type: element_type.map(str::to_string),
            var_name: None,
            body: body.statements,
        })
    }

    pub fn task_registration(
        &mut self,
        comment: Option<&str>,
        name: &str,
        task_type: &str,
        f: impl FnOnce(&mut ScriptBlock),
    ) -> Expr {
        self.push_unit(comment, UnitKind::TaskRegistration, name, task_type, f)
    }

    pub fn task_configuration(
        &mut self,
        comment: Option<&str>,
        name: &str,
        task_type: &str,
        f: impl FnOnce(&mut ScriptBlock),
    ) -> Expr {
        self.push_unit(comment, UnitKind::TaskConfiguration, name, task_type, f)
    }

    pub fn suite_registration(
        &mut self,
        comment: Option<&str>,
        name: &str,
        suite_type: &str,
        f: impl FnOnce(&mut ScriptBlock),
    ) -> Expr {
        self.push_unit(comment, UnitKind::SuiteRegistration, name, suite_type, f)
    }

    pub fn suite_configuration(
        &mut self,
        comment: Option<&str>,
        name: &str,
        suite_type: &str,
        f: impl FnOnce(&mut ScriptBlock),
    ) -> Expr {
        self.push_unit(comment, UnitKind::SuiteConfiguration, name, suite_type, f)
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn into_statements(self) -> Vec<Statement> {
        self.statements
    }

    pub(crate) fn push_container_element(&mut self, element: ContainerElement) -> Expr {
        let reference = element.reference();
        self.statements.push(Statement::ContainerElement(element));
        reference
    }

    fn push_call(&mut self, comment: Option<&str>, call: MethodCall) -> &mut Self {
        self.statements.push(Statement::Invocation(Invocation {
            comment: comment.map(str::to_string),
            call,
        }));
        self
    }

    fn push_unit(
        &mut self,
        comment: Option<&str>,
        kind: UnitKind,
        name: &str,
        unit_type: &str,
        f: impl FnOnce(&mut ScriptBlock),
    ) -> Expr {
        let mut body = ScriptBlock::new();
        f(&mut body);
        let unit = UnitDeclaration {
            comment: comment.map(str::to_string),
            kind,
            name: name.to_string(),
            unit_type: unit_type.to_string(),
            body: body.statements,
        };
        let reference = unit.reference();
        self.statements.push(Statement::Unit(unit));
        reference
    }
}
