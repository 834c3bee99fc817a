//! Dialect-neutral expressions.
//!
//! An [`Expr`] describes the *meaning* of a value appearing in a script (a string,
//! a property chain, a method call, a reference to a registered task...). Each
//! dialect decides how it is spelled through the [`Syntax`] trait.
//!
//! ```ignore
//! let call = MethodCall::on(Expr::ident("testTask"), "configure", [Expr::closure([
//!     MethodCall::new("shouldRunAfter", [Expr::ident("test")]),
//! ])]);
//!
//! // Both dialects: testTask.configure { shouldRunAfter(test) }
//! ```

use indexmap::IndexMap;

use crate::{Error, Result, Syntax};

/// A value or reference that can be rendered to any dialect.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// String literal, quoted by the dialect.
    String(String),
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// Floating point literal.
    Float(f64),
    /// Raw identifier or expression, rendered verbatim.
    Ident(String),
    /// Enum constant reference (e.g. `JavaVersion.VERSION_17`).
    EnumVariant {
        /// Simple name of the enum type.
        type_name: String,
        /// Constant name.
        variant: String,
    },
    /// Ordered map literal.
    Map(IndexMap<String, Expr>),
    /// Property access on another expression, always joined with a dot.
    Property {
        target: Box<Expr>,
        name: String,
    },
    /// Method invocation.
    Call(MethodCall),
    /// Lookup of an element in a named container.
    ContainerElement { container: String, element: String },
    /// Block literal made of argument-less invocations.
    Closure(Vec<MethodCall>),
    /// Reference to an element created by the builder.
    CreatedElement {
        container: String,
        element: String,
        var_name: Option<String>,
    },
    /// Reference to a task registered or configured by the builder.
    Task(String),
    /// Reference to a test suite registered or configured by the builder.
    Suite(String),
}

impl Expr {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn ident(value: impl Into<String>) -> Self {
        Self::Ident(value.into())
    }

    pub fn enum_variant(type_name: impl Into<String>, variant: impl Into<String>) -> Self {
        Self::EnumVariant {
            type_name: type_name.into(),
            variant: variant.into(),
        }
    }

    /// Create a map literal, keeping the iteration order of `entries`.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Expr>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Chain a property access onto `target` (`target.name`).
    pub fn property(target: impl Into<Expr>, name: impl Into<String>) -> Self {
        Self::Property {
            target: Box::new(target.into()),
            name: name.into(),
        }
    }

    pub fn call(name: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Self {
        Self::Call(MethodCall::new(name, args))
    }

    pub fn call_on(
        target: impl Into<Expr>,
        name: impl Into<String>,
        args: impl IntoIterator<Item = Expr>,
    ) -> Self {
        Self::Call(MethodCall::on(target, name, args))
    }

    pub fn container_element(container: impl Into<String>, element: impl Into<String>) -> Self {
        Self::ContainerElement {
            container: container.into(),
            element: element.into(),
        }
    }

    pub fn closure(calls: impl IntoIterator<Item = MethodCall>) -> Self {
        Self::Closure(calls.into_iter().collect())
    }

    /// Whether this expression is known to produce a boolean.
    ///
    /// Only literal booleans qualify; references are never inspected.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Render this expression with the given dialect.
    pub fn render(&self, syntax: &dyn Syntax) -> String {
        match self {
            Self::String(s) => syntax.string(s),
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Float(f) => render_float(*f),
            Self::Ident(s) => s.clone(),
            Self::EnumVariant { type_name, variant } => format!("{}.{}", type_name, variant),
            Self::Map(entries) => syntax.map_literal(entries),
            Self::Property { target, name } => format!("{}.{}", target.render(syntax), name),
            Self::Call(call) => call.render(syntax),
            Self::ContainerElement { container, element } => {
                syntax.container_element(container, element)
            }
            Self::Closure(calls) => {
                let body = calls
                    .iter()
                    .map(|call| call.render(syntax))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("{{ {} }}", body)
            }
            Self::CreatedElement {
                container,
                element,
                var_name,
            } => syntax.reference_created_container_element(container, element, var_name.as_deref()),
            Self::Task(name) => syntax.reference_task(name),
            Self::Suite(name) => syntax.reference_suite(name),
        }
    }
}

/// Floats always carry a decimal point so they never read as integers.
fn render_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<MethodCall> for Expr {
    fn from(value: MethodCall) -> Self {
        Self::Call(value)
    }
}

impl TryFrom<&toml::Value> for Expr {
    type Error = Error;

    fn try_from(value: &toml::Value) -> Result<Self> {
        match value {
            toml::Value::String(s) => Ok(Self::String(s.clone())),
            toml::Value::Integer(n) => Ok(Self::Int(*n)),
            toml::Value::Float(f) if f.is_finite() => Ok(Self::Float(*f)),
            toml::Value::Float(_) => Err(Error::UnsupportedValue {
                kind: "non-finite float".to_string(),
            }),
            toml::Value::Boolean(b) => Ok(Self::Bool(*b)),
            toml::Value::Table(table) => {
                let mut entries = IndexMap::with_capacity(table.len());
                for (key, value) in table {
                    entries.insert(key.clone(), Expr::try_from(value)?);
                }
                Ok(Self::Map(entries))
            }
            toml::Value::Array(_) | toml::Value::Datetime(_) => Err(Error::UnsupportedValue {
                kind: value.type_str().to_string(),
            }),
        }
    }
}

/// A method invocation with an optional receiver.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub target: Option<Box<Expr>>,
    pub name: String,
    pub args: Vec<Expr>,
}

impl MethodCall {
    pub fn new(name: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Self {
        Self {
            target: None,
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }

    pub fn on(
        target: impl Into<Expr>,
        name: impl Into<String>,
        args: impl IntoIterator<Item = Expr>,
    ) -> Self {
        Self {
            target: Some(Box::new(target.into())),
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Render the invocation.
    ///
    /// A sole block-literal argument uses block-call sugar (`name { ... } `);
    /// anything else is parenthesised, with the first argument routed through
    /// [`Syntax::first_arg`].
    pub fn render(&self, syntax: &dyn Syntax) -> String {
        let mut out = String::new();
        if let Some(target) = &self.target {
            out.push_str(&target.render(syntax));
            out.push('.');
        }
        out.push_str(&self.name);

        match self.args.as_slice() {
            [closure @ Expr::Closure(_)] => {
                out.push(' ');
                out.push_str(&closure.render(syntax));
                out.push(' ');
            }
            args => {
                out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i == 0 {
                        out.push_str(&syntax.first_arg(arg));
                    } else {
                        out.push_str(", ");
                        out.push_str(&arg.render(syntax));
                    }
                }
                out.push(')');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::PlainSyntax;

    #[test]
    fn test_literals() {
        let syntax = PlainSyntax;
        assert_eq!(Expr::from("x").render(&syntax), "<x>");
        assert_eq!(Expr::from(true).render(&syntax), "true");
        assert_eq!(Expr::from(42).render(&syntax), "42");
        assert_eq!(Expr::from(-3i64).render(&syntax), "-3");
        assert_eq!(Expr::ident("project").render(&syntax), "project");
    }

    #[test]
    fn test_float_keeps_decimal_point() {
        let syntax = PlainSyntax;
        assert_eq!(Expr::from(1.0).render(&syntax), "1.0");
        assert_eq!(Expr::from(2.5).render(&syntax), "2.5");
    }

    #[test]
    fn test_enum_variant() {
        let expr = Expr::enum_variant("JavaVersion", "VERSION_17");
        assert_eq!(expr.render(&PlainSyntax), "JavaVersion.VERSION_17");
    }

    #[test]
    fn test_property_chain() {
        let expr = Expr::property(Expr::property(Expr::ident("testing"), "suites"), "integrationTest");
        assert_eq!(expr.render(&PlainSyntax), "testing.suites.integrationTest");
    }

    #[test]
    fn test_call_without_args() {
        assert_eq!(Expr::call("mavenCentral", []).render(&PlainSyntax), "mavenCentral()");
    }

    #[test]
    fn test_call_with_target_and_args() {
        let expr = Expr::call_on(Expr::ident("java"), "toolchain", [Expr::from(17), Expr::from("a")]);
        assert_eq!(expr.render(&PlainSyntax), "java.toolchain(first:17, <a>)");
    }

    #[test]
    fn test_call_with_sole_closure_uses_block_sugar() {
        let expr = Expr::call_on(
            Expr::ident("testTask"),
            "configure",
            [Expr::closure([MethodCall::new("shouldRunAfter", [Expr::ident("test")])])],
        );
        assert_eq!(
            expr.render(&PlainSyntax),
            "testTask.configure { shouldRunAfter(first:test) } "
        );
    }

    #[test]
    fn test_closure_with_several_calls() {
        let expr = Expr::closure([
            MethodCall::new("a", []),
            MethodCall::new("b", []),
        ]);
        assert_eq!(expr.render(&PlainSyntax), "{ a()\nb() }");
    }

    #[test]
    fn test_closure_among_other_args_is_parenthesised() {
        let expr = Expr::call("f", [Expr::from(1), Expr::closure([MethodCall::new("g", [])])]);
        assert_eq!(expr.render(&PlainSyntax), "f(first:1, { g() })");
    }

    #[test]
    fn test_references_go_through_syntax() {
        assert_eq!(Expr::Task("jar".into()).render(&PlainSyntax), "task:jar");
        assert_eq!(Expr::Suite("test".into()).render(&PlainSyntax), "suite:test");
        assert_eq!(
            Expr::container_element("sourceSets", "main").render(&PlainSyntax),
            "sourceSets/main"
        );
    }

    #[test]
    fn test_is_boolean() {
        assert!(Expr::from(false).is_boolean());
        assert!(!Expr::from("true").is_boolean());
        assert!(!Expr::ident("enabled").is_boolean());
    }

    #[test]
    fn test_try_from_toml() {
        let value: toml::Value = toml::from_str::<toml::Table>("v = { a = 1, b = 'x' }")
            .unwrap()
            .remove("v")
            .unwrap();
        let expr = Expr::try_from(&value).unwrap();
        assert_eq!(expr, Expr::map([("a", Expr::from(1)), ("b", Expr::from("x"))]));
    }

    fn toml_value(src: &str) -> toml::Value {
        toml::from_str::<toml::Table>(&format!("v = {}", src))
            .unwrap()
            .remove("v")
            .unwrap()
    }

    #[test]
    fn test_try_from_toml_keeps_key_order() {
        let expr = Expr::try_from(&toml_value("{ zeta = 1, alpha = 2, mid = 3 }")).unwrap();
        let Expr::Map(entries) = expr else {
            panic!("expected a map");
        };
        let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_try_from_toml_rejects_non_finite_floats() {
        for src in ["nan", "inf", "-inf", "{ ratio = nan }"] {
            let err = Expr::try_from(&toml_value(src)).unwrap_err();
            assert!(
                matches!(err, Error::UnsupportedValue { ref kind } if kind == "non-finite float"),
                "{} was accepted",
                src
            );
        }
        assert_eq!(Expr::try_from(&toml_value("1.5")).unwrap(), Expr::Float(1.5));
    }

    #[test]
    fn test_try_from_toml_rejects_arrays() {
        let value = toml::Value::Array(vec![toml::Value::Integer(1)]);
        let err = Expr::try_from(&value).unwrap_err();
        assert!(matches!(err, Error::UnsupportedValue { ref kind } if kind == "array"));
    }

    #[test]
    fn test_try_from_toml_rejects_nested_arrays() {
        let value: toml::Value = toml::from_str::<toml::Table>("v = { a = [1] }")
            .unwrap()
            .remove("v")
            .unwrap();
        assert!(Expr::try_from(&value).is_err());
    }
}
