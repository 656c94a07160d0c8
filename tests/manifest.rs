//! Manifest Integration Tests
//!
//! Tests for manifest layout, determinism and the installer's view of it.

use forge_resources::{
    generate, parse_manifest, Catalog, Category, License, ManifestEntry, ResourceRecord,
    ResourceType,
};
use pretty_assertions::assert_eq;

fn record(path: &str, resource_type: ResourceType) -> ResourceRecord {
    ResourceRecord::new(
        path,
        format!("https://example.com/{}", path),
        resource_type,
        License::Apache20,
    )
}

#[test]
fn test_full_layout() {
    let catalog = Catalog::new()
        .with(Category::Extensions, record("extensions/x", ResourceType::Extension))
        .with(Category::Vae, record("models/VAE/v", ResourceType::Vae))
        .with(Category::Vae, record("models/VAE/off", ResourceType::Vae).disabled());

    let expected = "\
# ================================================================
# Stable Diffusion WebUI Forge - Resources Configuration
# Auto-generated by forge-resources
# ================================================================

# ======== Extensions ========
extensions/x,https://example.com/extensions/x

# ======== ControlNet v1.1 Models (SD 1.5) ========

# ======== ControlNet SDXL Models (official HuggingFace sources) ========
# Recommended: get the Union model first (one model covers 10+ control conditions)

# ======== VAE Models ========
models/VAE/v,https://example.com/models/VAE/v

# ======== Upscaler Models ========
# Recommended for fabric/garment detail upscaling:
# - SwinIR Large (best detail, quality 9.7/10)
# - HAT (best on real photos)
# - Tile ControlNet + Ultimate SD Upscale (combined workflow)
";

    assert_eq!(generate(&catalog), expected);
}

#[test]
fn test_generate_is_deterministic() {
    let catalog = Catalog::builtin();
    assert_eq!(generate(&catalog), generate(&catalog));
}

#[test]
fn test_round_trip_matches_enabled_records_in_order() {
    let catalog = Catalog::builtin()
        .with(
            Category::Upscalers,
            record("models/ESRGAN/extra.pth", ResourceType::Upscaler).disabled(),
        )
        .with(Category::Extensions, record("extensions/late", ResourceType::Extension));

    let parsed = parse_manifest(&generate(&catalog));
    let expected: Vec<ManifestEntry> = catalog
        .iter()
        .filter(|r| r.enabled)
        .map(|r| ManifestEntry {
            target_path: r.target_path.clone(),
            source_url: r.source_url.clone(),
        })
        .collect();

    assert_eq!(parsed, expected);
    assert_eq!(parsed.len(), 26);
}

#[test]
fn test_disabled_records_never_emitted() {
    let catalog = Catalog::new().with(
        Category::Upscalers,
        record("models/ESRGAN/hidden.pth", ResourceType::Upscaler).disabled(),
    );

    let text = generate(&catalog);
    assert!(!text.contains("hidden.pth"));
    assert!(parse_manifest(&text).is_empty());
}

#[test]
fn test_builtin_manifest_order() {
    let parsed = parse_manifest(&generate(&Catalog::builtin()));

    assert_eq!(parsed.first().unwrap().target_path, "extensions/sd-webui-controlnet");
    assert_eq!(parsed.last().unwrap().target_path, "models/ESRGAN/4x-UltraSharp.pth");
}

#[test]
fn test_round_trip_preserves_whitespace_in_fields() {
    // Loaded catalogs can carry stray spaces; the installer sees them verbatim
    let catalog = Catalog::from_yaml(
        r#"
extensions:
  - target_path: "extensions/x"
    source_url: "https://example.com/x.git "
    resource_type: extension
    license: MIT
"#,
    )
    .unwrap();

    let parsed = parse_manifest(&generate(&catalog));

    assert_eq!(
        parsed,
        vec![ManifestEntry {
            target_path: "extensions/x".to_string(),
            source_url: "https://example.com/x.git ".to_string(),
        }]
    );
}
