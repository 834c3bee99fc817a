//! Snapshot tests for Groovy DSL generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use buildscript_codegen::{
    BuildScriptBuilder, Error, Expr,
    testing::{assert_layout, generate_to_temp, read_generated},
};
use buildscript_codegen_groovy::GroovySyntax;
use buildscript_core::InsecureProtocol;

fn builder(insecure_protocol: InsecureProtocol) -> BuildScriptBuilder {
    BuildScriptBuilder::new(Box::new(GroovySyntax), "build", insecure_protocol)
}

fn application_build() -> BuildScriptBuilder {
    let mut b = builder(InsecureProtocol::Warn);
    b.plugin(
        Some("Apply the application plugin to add support for building a CLI application in Java."),
        "application",
    )
    .test_implementation_dependency(
        Some("Use JUnit Jupiter for testing."),
        ["org.junit.jupiter:junit-jupiter:5.7.2"],
    )
    .implementation_dependency(
        Some("This dependency is used by the application."),
        ["com.google.guava:guava:31.1-jre"],
    )
    .convention_property_assignment(
        Some("Define the main class for the application."),
        "application",
        "mainClass",
        "demo.App",
    )
    .task_method_invocation(
        Some("Use JUnit Platform for unit tests."),
        "test",
        "Test",
        "useJUnitPlatform",
        [],
    );
    b.repositories()
        .maven_central(Some("Use Maven Central for resolving dependencies."));
    b
}

fn insecure_repository(insecure_protocol: InsecureProtocol) -> BuildScriptBuilder {
    let mut b = builder(insecure_protocol);
    b.repositories()
        .maven(Some("Internal repository"), "http://example.org/repo")
        .unwrap();
    b
}

#[test]
fn test_application_build() {
    let out = application_build().render().unwrap();
    assert_layout(&out);
    insta::assert_snapshot!(out, @r"
/*
 * This file was generated by the Gradle 'init' task.
 */

plugins {
    // Apply the application plugin to add support for building a CLI application in Java.
    id 'application'
}

repositories {
    // Use Maven Central for resolving dependencies.
    mavenCentral()
}

dependencies {
    // Use JUnit Jupiter for testing.
    testImplementation 'org.junit.jupiter:junit-jupiter:5.7.2'

    // This dependency is used by the application.
    implementation 'com.google.guava:guava:31.1-jre'
}

// Define the main class for the application.
mainClass = 'demo.App'

tasks.named('test') {
    // Use JUnit Platform for unit tests.
    useJUnitPlatform()
}
");
}

#[test]
fn test_test_suites() {
    let mut b = builder(InsecureProtocol::Warn).with_incubating_apis();
    b.plugin(None, "java");
    b.repositories().maven_central(None);
    b.testing()
        .junit_platform_suite("test")
        .junit_suite("integrationTest");
    b.dependency_for_suite(
        "integrationTest",
        "implementation",
        Some("Extra assertions for integration tests."),
        ["org.assertj:assertj-core:3.24.2"],
    )
    .unwrap();

    let out = b.render().unwrap();
    assert_layout(&out);
    insta::assert_snapshot!(out, @r"
/*
 * This file was generated by the Gradle 'init' task.
 *
 * This project uses @Incubating APIs which are subject to change.
 */

plugins {
    id 'java'
}

repositories {
    mavenCentral()
}

testing {
    suites {
        test {
            useJUnitPlatform()

            dependencies {
                implementation 'org.junit.jupiter:junit-jupiter:5.7.2'
            }
        }

        integrationTest {
            useJUnit()

            dependencies {
                implementation project

                // Extra assertions for integration tests.
                implementation 'org.assertj:assertj-core:3.24.2'
            }

            targets {
                all {
                    testTask.configure { shouldRunAfter(test) } 
                }
            }
        }
    }
}

tasks.named('check') {
    dependsOn(testing.suites.integrationTest)
}
");
}

#[test]
fn test_blocks_containers_and_tasks() {
    let mut b = builder(InsecureProtocol::Warn);
    b.plugin_with_version(None, "org.example.greeting", "1.0");
    b.block(None, "java", |java| {
        java.block(None, "toolchain", |toolchain| {
            toolchain.lazy_property_assignment(
                None,
                "languageVersion",
                Expr::call_on(Expr::ident("JavaLanguageVersion"), "of", [Expr::from(17)]),
            );
        });
    });
    let custom = b.create_container_element(
        Some("A custom configuration"),
        "configurations",
        "custom",
        None,
    );
    b.task_registration(Some("Aggregate the docs"), "docs", "Javadoc", |docs| {
        docs.method_invocation(None, "dependsOn", [custom]);
    });
    b.task_type_property_assignment(None, "Javadoc", "failOnError", false);

    let out = b.render().unwrap();
    assert_layout(&out);
    insta::assert_snapshot!(out, @r"
/*
 * This file was generated by the Gradle 'init' task.
 */

plugins {
    id 'org.example.greeting' version '1.0'
}

java {
    toolchain {
        languageVersion = JavaLanguageVersion.of(17)
    }
}

// A custom configuration
configurations {
    custom {
    }
}

// Aggregate the docs
tasks.register('docs', Javadoc) {
    dependsOn(configurations.custom)
}

tasks.withType(Javadoc) {
    failOnError = false
}
");
}

#[test]
fn test_typed_container_element_in_block() {
    let mut b = builder(InsecureProtocol::Warn);
    b.block(None, "publishing", |publishing| {
        publishing.container_element(
            None,
            "publications",
            "maven",
            Some("MavenPublication"),
            |maven| {
                maven.method_invocation(
                    None,
                    "from",
                    [Expr::container_element("components", "java")],
                );
            },
        );
    });

    insta::assert_snapshot!(b.render().unwrap(), @r"
/*
 * This file was generated by the Gradle 'init' task.
 */

publishing {
    publications {
        maven(MavenPublication) {
            from(components.java)
        }
    }
}
");
}

#[test]
fn test_map_arguments() {
    let mut b = builder(InsecureProtocol::Warn);
    b.method_invocation(
        None,
        "apply",
        [Expr::map([("plugin", "java"), ("to", "project")])],
    );

    let out = b.render().unwrap();
    assert!(out.ends_with("\napply(plugin: 'java', to: 'project')\n"));
}

#[test]
fn test_insecure_repository_warn() {
    let out = insecure_repository(InsecureProtocol::Warn).render().unwrap();
    insta::assert_snapshot!(out, @r"
/*
 * This file was generated by the Gradle 'init' task.
 */

repositories {
    // Internal repository
    maven {
        url = uri('http://example.org/repo')

        // allowInsecureProtocol = true
    }
}
");
}

#[test]
fn test_insecure_repository_allow() {
    let out = insecure_repository(InsecureProtocol::Allow).render().unwrap();
    assert!(out.contains("        url = uri('http://example.org/repo')\n        allowInsecureProtocol = true\n"));
}

#[test]
fn test_insecure_repository_upgrade() {
    let out = insecure_repository(InsecureProtocol::Upgrade).render().unwrap();
    assert!(out.contains("url = uri('https://example.org/repo')"));
    assert!(!out.contains("allowInsecureProtocol"));
}

#[test]
fn test_loopback_repository_is_secure() {
    let mut b = builder(InsecureProtocol::Fail);
    b.repositories()
        .maven(None, "http://127.0.0.1:8080/repo")
        .unwrap();
    let out = b.render().unwrap();
    assert!(out.contains("url = uri('http://127.0.0.1:8080/repo')"));
}

#[test]
fn test_insecure_repository_fail_writes_nothing() {
    let err = generate_to_temp(insecure_repository(InsecureProtocol::Fail)).unwrap_err();
    assert!(
        matches!(err, Error::InsecureRepository { ref url } if url == "http://example.org/repo")
    );
}

#[test]
fn test_generate_writes_gradle_file() {
    let (_temp, path) = generate_to_temp(application_build()).unwrap();
    assert!(path.ends_with("build.gradle"));
    assert_eq!(read_generated(&path), application_build().render().unwrap());
}
