//! End-to-end tests: manifest in, build script out.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use buildscript::ops::{self, GenerateOptions, LowerOptions};
use buildscript::reports::GenerationResult;
use buildscript_codegen::testing::assert_layout;
use buildscript_core::{Dsl, InsecureProtocol};
use buildscript_manifest::{MANIFEST_FILE_NAME, Manifest, ScriptToml};

const APPLICATION: &str = r#"
[script]
header = ["This generated file contains a sample Java application project to get you started."]

[[plugins]]
id = "application"
comment = "Apply the application plugin to add support for building a CLI application in Java."

[[repositories]]
kind = "maven-central"
comment = "Use Maven Central for resolving dependencies."

[[dependencies]]
configuration = "testImplementation"
notations = ["org.junit.jupiter:junit-jupiter:5.7.2"]
comment = "Use JUnit Jupiter for testing."

[[dependencies]]
configuration = "implementation"
notations = ["com.google.guava:guava:31.1-jre"]
comment = "This dependency is used by the application."

[[conventions]]
name = "application"
properties = [
    { name = "mainClass", value = "demo.App", comment = "Define the main class for the application." },
]

[[tasks]]
name = "test"
type = "Test"
comment = "Run tests in parallel."
properties = [{ name = "maxParallelForks", value = 4 }]
"#;

fn options(dsl: Dsl) -> LowerOptions {
    LowerOptions {
        dsl,
        insecure_protocol: InsecureProtocol::Warn,
        external_comments: false,
    }
}

fn render(dsl: Dsl) -> String {
    let manifest = Manifest::from_str(APPLICATION).unwrap();
    let out = ops::lower(&manifest, &options(dsl)).unwrap().render().unwrap();
    assert_layout(&out);
    out
}

#[test]
fn test_application_manifest_groovy() {
    insta::assert_snapshot!(render(Dsl::Groovy), @r"
/*
 * This file was generated by the Gradle 'init' task.
 *
 * This generated file contains a sample Java application project to get you started.
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
    // Run tests in parallel.
    maxParallelForks = 4
}
");
}

#[test]
fn test_application_manifest_kotlin() {
    insta::assert_snapshot!(render(Dsl::Kotlin), @r#"
/*
 * This file was generated by the Gradle 'init' task.
 *
 * This generated file contains a sample Java application project to get you started.
 */

plugins {
    // Apply the application plugin to add support for building a CLI application in Java.
    application
}

repositories {
    // Use Maven Central for resolving dependencies.
    mavenCentral()
}

dependencies {
    // Use JUnit Jupiter for testing.
    testImplementation("org.junit.jupiter:junit-jupiter:5.7.2")

    // This dependency is used by the application.
    implementation("com.google.guava:guava:31.1-jre")
}

application {
    // Define the main class for the application.
    mainClass.set("demo.App")
}

tasks.named<Test>("test") {
    // Run tests in parallel.
    maxParallelForks = 4
}
"#);
}

#[test]
fn test_generate_next_to_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(MANIFEST_FILE_NAME);
    std::fs::write(&path, APPLICATION).unwrap();

    let script_toml = ScriptToml::open(&path).unwrap();
    for dsl in [Dsl::Groovy, Dsl::Kotlin] {
        let report = ops::generate(
            script_toml.manifest(),
            GenerateOptions {
                output_dir: script_toml.dir(),
                dry_run: false,
                lower: options(dsl),
            },
        )
        .unwrap();

        let GenerationResult::Written { path } = report.result else {
            panic!("expected a written script");
        };
        assert_eq!(path, dir.path().join(&report.file_name));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), render(dsl));
    }
    assert!(dir.path().join("build.gradle").exists());
    assert!(dir.path().join("build.gradle.kts").exists());
}

#[test]
fn test_dry_run_matches_written_script() {
    let manifest = Manifest::from_str(APPLICATION).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let report = ops::generate(
        &manifest,
        GenerateOptions {
            output_dir: dir.path(),
            dry_run: true,
            lower: options(Dsl::Kotlin),
        },
    )
    .unwrap();

    match report.result {
        GenerationResult::Preview { content } => assert_eq!(content, render(Dsl::Kotlin)),
        other => panic!("expected a preview, got {:?}", other),
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_external_comments_round_trip() {
    let manifest = Manifest::from_str(APPLICATION).unwrap();
    let opts = LowerOptions {
        external_comments: true,
        ..options(Dsl::Groovy)
    };
    let report = ops::comments(&manifest, &opts).unwrap();
    assert_eq!(report.file_name, "build.gradle");
    assert_eq!(report.comments.len(), 5);
    assert_eq!(report.comments[4], "Run tests in parallel.");

    let out = ops::lower(&manifest, &opts).unwrap().render().unwrap();
    assert!(out.contains("    maxParallelForks = 4 // <5>\n"));
    assert!(!out.contains("// Run tests in parallel."));
}
