use super::DependenciesBlock;
use crate::model::{
    BlockStatement, Expr, Invocation, MethodCall, Statement, UnitDeclaration, UnitKind,
};

/// Name of the test suite every JVM project gets by default.
pub const DEFAULT_TEST_SUITE_NAME: &str = "test";

const SUITE_TYPE: &str = "JvmTestSuite";

/// Test framework used by a suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestFramework {
    JUnit,
    #[default]
    JUnitPlatform,
}

impl TestFramework {
    /// Method selecting the framework inside a suite.
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::JUnit => "useJUnit",
            Self::JUnitPlatform => "useJUnitPlatform",
        }
    }

    /// Artifact the default suite depends on for this framework.
    pub fn implementation_dependency(&self) -> &'static str {
        match self {
            Self::JUnit => "junit:junit:4.13",
            Self::JUnitPlatform => "org.junit.jupiter:junit-jupiter:5.7.2",
        }
    }
}

/// A target of a suite, e.g. `all`.
#[derive(Debug, Clone, PartialEq)]
struct TargetSpec {
    name: String,
    test_task_should_run_after: bool,
}

impl TargetSpec {
    fn to_statement(&self) -> Statement {
        let mut body = Vec::new();
        if self.test_task_should_run_after {
            // testTask.configure { shouldRunAfter(test) }
            let should_run_after = MethodCall::new("shouldRunAfter", [Expr::ident("test")]);
            body.push(Statement::Invocation(Invocation {
                comment: None,
                call: MethodCall::on(
                    Expr::ident("testTask"),
                    "configure",
                    [Expr::closure([should_run_after])],
                ),
            }));
        }
        BlockStatement::scoped(None, self.name.clone(), body).into()
    }
}

/// A JVM test suite declared in the `testing { suites { } }` block.
#[derive(Debug, Clone)]
pub struct SuiteSpec {
    name: String,
    framework: TestFramework,
    pub(crate) dependencies: DependenciesBlock,
    targets: Vec<TargetSpec>,
}

impl SuiteSpec {
    fn new(name: &str, framework: TestFramework) -> Self {
        let mut suite = Self {
            name: name.to_string(),
            framework,
            dependencies: DependenciesBlock::default(),
            targets: Vec::new(),
        };
        if suite.is_default_suite() {
            suite.dependencies.dependency(
                "implementation",
                None,
                [framework.implementation_dependency()],
            );
        } else {
            suite.dependencies.self_dependency("implementation", None);
            suite.targets.push(TargetSpec {
                name: "all".to_string(),
                test_task_should_run_after: true,
            });
        }
        suite
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn framework(&self) -> TestFramework {
        self.framework
    }

    pub fn is_default_suite(&self) -> bool {
        self.name == DEFAULT_TEST_SUITE_NAME
    }

    /// The default suite is configured; any other suite is registered.
    pub fn to_statement(&self) -> Statement {
        let mut body = Vec::new();
        if self.is_default_suite() || self.framework != TestFramework::default() {
            body.push(Statement::Invocation(Invocation {
                comment: None,
                call: MethodCall::new(self.framework.method_name(), []),
            }));
        }
        if !self.dependencies.is_empty() {
            body.push(self.dependencies.to_statement());
        }
        if !self.targets.is_empty() {
            let targets = self.targets.iter().map(TargetSpec::to_statement).collect();
            body.push(BlockStatement::scoped(None, "targets", targets).into());
        }

        let kind = if self.is_default_suite() {
            UnitKind::SuiteConfiguration
        } else {
            UnitKind::SuiteRegistration
        };
        Statement::Unit(UnitDeclaration {
            comment: None,
            kind,
            name: self.name.clone(),
            unit_type: SUITE_TYPE.to_string(),
            body,
        })
    }
}

/// The `testing { }` block.
#[derive(Debug, Clone, Default)]
pub struct TestingBlock {
    suites: Vec<SuiteSpec>,
}

impl TestingBlock {
    pub fn junit_suite(&mut self, name: &str) -> &mut Self {
        self.suites.push(SuiteSpec::new(name, TestFramework::JUnit));
        self
    }

    pub fn junit_platform_suite(&mut self, name: &str) -> &mut Self {
        self.suites
            .push(SuiteSpec::new(name, TestFramework::JUnitPlatform));
        self
    }

    pub fn suites(&self) -> &[SuiteSpec] {
        &self.suites
    }

    pub(crate) fn suite_mut(&mut self, name: &str) -> Option<&mut SuiteSpec> {
        self.suites.iter_mut().find(|s| s.name == name)
    }

    pub fn to_statement(&self) -> Statement {
        let suites = self.suites.iter().map(SuiteSpec::to_statement).collect();
        BlockStatement::scoped(
            None,
            "testing",
            vec![BlockStatement::scoped(None, "suites", suites).into()],
        )
        .into()
    }
}
