use settler_core::version_catalog::{resolve_catalog, CatalogDefinition};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests/fixtures")
}

#[test]
fn resolve_fixture_catalog() {
    let def = CatalogDefinition::from_path(&fixtures_dir().join("libs.versions.toml")).unwrap();
    let catalog = resolve_catalog(&def).unwrap();

    assert_eq!(catalog.libraries.len(), 5);
    let stdlib = catalog.library("kotlin-stdlib").unwrap();
    assert_eq!(stdlib.group, "org.jetbrains.kotlin");
    assert_eq!(stdlib.artifact, "kotlin-stdlib");
    assert_eq!(stdlib.version.as_deref(), Some("2.0.0"));

    let jmh = catalog.library("jmh-core").unwrap();
    assert_eq!(jmh.to_string(), "org.openjdk.jmh:jmh-core:1.37");

    let gson = catalog.library("gson").unwrap();
    assert_eq!(gson.version.as_deref(), Some("2.11.0"));

    let jupiter = catalog.library("junit-jupiter").unwrap();
    assert!(jupiter.version.is_none());
    assert_eq!(jupiter.to_string(), "org.junit.jupiter:junit-jupiter");

    assert_eq!(catalog.bundles["testing"].len(), 2);
    assert_eq!(catalog.plugins.len(), 2);
    let kotlin_jvm = catalog.plugins.iter().find(|p| p.alias == "kotlin-jvm").unwrap();
    assert_eq!(kotlin_jvm.id, "org.jetbrains.kotlin.jvm");
    assert_eq!(kotlin_jvm.version.as_deref(), Some("2.0.0"));
    let shadow = catalog.plugins.iter().find(|p| p.alias == "shadow").unwrap();
    assert_eq!(shadow.id, "com.gradleup.shadow");
    assert_eq!(shadow.version.as_deref(), Some("8.3.0"));
}

#[test]
fn missing_version_ref_is_an_error() {
    let def = CatalogDefinition::from_str(
        r#"
[libraries]
lib = { module = "com.example:lib", version.ref = "nonexistent" }
"#,
    )
    .unwrap();
    let err = resolve_catalog(&def).unwrap_err();
    assert!(err.to_string().contains("nonexistent"), "got: {err}");
}

#[test]
fn malformed_notation_is_an_error() {
    let def = CatalogDefinition::from_str("[libraries]\nlib = \"just-a-name\"\n").unwrap();
    assert!(resolve_catalog(&def).is_err());
}

#[test]
fn module_with_version_suffix_is_an_error() {
    let def = CatalogDefinition::from_str(
        "[libraries]\nlib = { module = \"com.example:lib:1.0\" }\n",
    )
    .unwrap();
    let err = resolve_catalog(&def).unwrap_err();
    assert!(err.to_string().contains("expected 'group:artifact'"), "got: {err}");
}

#[test]
fn bundle_with_unknown_library_is_an_error() {
    let def = CatalogDefinition::from_str(
        r#"
[libraries]
a = "com.example:a:1.0"

[bundles]
all = ["a", "b"]
"#,
    )
    .unwrap();
    let err = resolve_catalog(&def).unwrap_err();
    assert!(err.to_string().contains("'b'"), "got: {err}");
}

#[test]
fn empty_catalog_resolves_to_nothing() {
    let def = CatalogDefinition::from_str("").unwrap();
    let catalog = resolve_catalog(&def).unwrap();
    assert!(catalog.libraries.is_empty());
    assert!(catalog.plugins.is_empty());
    assert!(catalog.bundles.is_empty());
}

#[test]
fn libraries_are_ordered_by_alias() {
    let def = CatalogDefinition::from_str(
        "[libraries]\nzeta = \"z:z:1\"\nalpha = \"a:a:1\"\n",
    )
    .unwrap();
    let catalog = resolve_catalog(&def).unwrap();
    let aliases: Vec<&str> = catalog.libraries.iter().map(|l| l.alias.as_str()).collect();
    assert_eq!(aliases, vec!["alpha", "zeta"]);
}
