//! Pipeline Integration Tests
//!
//! Tests for the validate -> write -> summarize pass against a real directory.

use forge_resources::core::run;
use forge_resources::{generate, Catalog, Category, License, Outcome, ResourceRecord, ResourceType};
use tempfile::TempDir;

fn extension_x() -> ResourceRecord {
    ResourceRecord::new(
        "extensions/x",
        "https://example.com/x.git",
        ResourceType::Extension,
        License::Mit,
    )
}

#[tokio::test]
async fn test_writes_manifest_and_summary() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("resources.txt");
    let catalog = Catalog::builtin();

    let outcome = run(&catalog, &output).await.unwrap();

    match outcome {
        Outcome::Written {
            path,
            records,
            summary,
        } => {
            assert_eq!(path, output);
            assert_eq!(records, 25);
            assert_eq!(summary.total_records(), 25);
            assert_eq!(summary.size_display(), "15.6 GB");
        }
        Outcome::Rejected(e) => panic!("Unexpected rejection: {}", e),
    }

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, generate(&catalog));
    assert!(written.ends_with('\n'));
}

#[tokio::test]
async fn test_duplicate_path_produces_no_file() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("resources.txt");
    let catalog = Catalog::new()
        .with(Category::Extensions, extension_x())
        .with(Category::Extensions, extension_x());

    let outcome = run(&catalog, &output).await.unwrap();

    assert!(matches!(outcome, Outcome::Rejected(_)));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_two_vae_summary() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("resources.txt");
    let vae = |path: &str| {
        ResourceRecord::new(path, "https://example.com/vae", ResourceType::Vae, License::CreativeMl)
            .with_size_mb(335)
    };
    let catalog = Catalog::new()
        .with(Category::Vae, vae("models/VAE/a.safetensors"))
        .with(Category::Vae, vae("models/VAE/b.safetensors"));

    match run(&catalog, &output).await.unwrap() {
        Outcome::Written { summary, .. } => assert_eq!(summary.size_display(), "0.7 GB"),
        Outcome::Rejected(e) => panic!("Unexpected rejection: {}", e),
    }
}

#[tokio::test]
async fn test_disabled_counted_in_summary_only() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("resources.txt");
    let catalog = Catalog::new()
        .with(Category::Extensions, extension_x())
        .with(
            Category::Extensions,
            ResourceRecord::new(
                "extensions/off",
                "https://example.com/off.git",
                ResourceType::Extension,
                License::Mit,
            )
            .disabled(),
        );

    let Outcome::Written { summary, .. } = run(&catalog, &output).await.unwrap() else {
        panic!("Expected manifest to be written");
    };

    assert_eq!(summary.total_records(), 2);
    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("extensions/x,https://example.com/x.git\n"));
    assert!(!written.contains("extensions/off"));
}

#[tokio::test]
async fn test_catalog_file_drives_pipeline() {
    let temp = TempDir::new().unwrap();
    let catalog_path = temp.path().join("catalog.yaml");
    std::fs::write(
        &catalog_path,
        r#"
vae:
  - target_path: models/VAE/custom.safetensors
    source_url: https://example.com/custom.safetensors
    resource_type: vae
    license: MIT
    size_mb: 512
"#,
    )
    .unwrap();

    let catalog = Catalog::from_file(&catalog_path).unwrap();
    let output = temp.path().join("out").join("resources.txt");
    let outcome = run(&catalog, &output).await.unwrap();

    assert!(outcome.is_written());
    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains(
        "models/VAE/custom.safetensors,https://example.com/custom.safetensors"
    ));
}
