//! Integration tests for the mod model built from backend payloads

use proptest::prelude::*;
use resolute_catalog::models::{
    LoadedMods, ModArtifact, ResoluteMod, UNRECOGNIZED_MOD_PREFIX, VersionStatus,
};
use resolute_catalog::{CatalogError, version};

const PAYLOAD: &str = r#"{
    "mods": {
        "net.example.tweaks": {
            "id": "net.example.tweaks",
            "name": "Tweaks",
            "description": "Small quality of life changes",
            "category": "Plugins",
            "authors": [
                { "name": "First", "url": "https://example.net/first" },
                { "name": "Second" }
            ],
            "tags": ["qol"],
            "flags": ["deprecated"],
            "versions": {
                "1.0.0": {
                    "semver": "1.0.0",
                    "artifacts": [{ "url": "https://example.net/dl/Tweaks.dll?token=1", "sha256": "aa" }]
                },
                "1.2.0-beta.1": { "semver": "1.2.0-beta.1", "artifacts": [] },
                "1.2.0": {
                    "semver": "1.2.0",
                    "artifacts": [{
                        "url": "https://example.net/dl/Tweaks.dll",
                        "sha256": "bb",
                        "filename": "TweaksRenamed.dll",
                        "installLocation": "/rml_libs"
                    }],
                    "dependencies": { "net.example.core": ">=2.0.0" }
                }
            },
            "installedVersion": "1.0.0"
        }
    },
    "removed": []
}"#;

fn tweaks() -> ResoluteMod {
    let loaded: LoadedMods = serde_json::from_str(PAYLOAD).unwrap();
    let raw = loaded.mods["net.example.tweaks"].clone();
    ResoluteMod::from_raw(raw).unwrap()
}

#[test]
fn test_payload_builds_ordered_mod() {
    let rmod = tweaks();

    let order: Vec<&str> = rmod.versions().keys().map(String::as_str).collect();
    assert_eq!(order, ["1.2.0", "1.2.0-beta.1", "1.0.0"]);
    assert_eq!(rmod.latest_version().unwrap().semver, "1.2.0");
    assert_eq!(rmod.primary_author().unwrap().name, "First");
    assert!(rmod.is_deprecated());
    assert!(rmod.active);
    assert!(rmod.has_update());
    assert_eq!(rmod.version_status(), VersionStatus::UpdateAvailable);
    assert_eq!(rmod.sortable_version_status(), 0);
}

#[test]
fn test_artifact_inference() {
    let rmod = tweaks();
    let old = &rmod.version("1.0.0").unwrap().artifacts[0];
    let new = &rmod.version("1.2.0").unwrap().artifacts[0];

    assert_eq!(old.effective_filename(), "Tweaks.dll");
    assert_eq!(old.effective_install_location(&rmod.category), "/Libraries");
    assert_eq!(new.effective_filename(), "TweaksRenamed.dll");
    assert_eq!(new.effective_install_location(&rmod.category), "/rml_libs");
    assert_eq!(ModArtifact::inferred_install_location("Misc"), "/rml_mods");
}

#[test]
fn test_to_raw_keeps_installed_version_and_order() {
    let rmod = tweaks();
    let raw = rmod.to_raw();

    assert_eq!(raw.installed_version.as_deref(), Some("1.0.0"));
    assert_eq!(raw.versions.keys().next().map(String::as_str), Some("1.2.0"));
    assert_eq!(
        raw.versions["1.2.0"].dependencies["net.example.core"],
        ">=2.0.0"
    );
    assert_eq!(ResoluteMod::from_raw(raw).unwrap(), rmod);
}

#[test]
fn test_unrecognized_mods() {
    let json = format!(
        r#"{{
            "id": "{UNRECOGNIZED_MOD_PREFIX}.SomeMod",
            "name": "SomeMod.dll",
            "versions": {{ "0.0.0-unknown": {{ "semver": "0.0.0-unknown" }} }},
            "installedVersion": "0.0.0-unknown"
        }}"#
    );
    let rmod = ResoluteMod::from_raw(serde_json::from_str(&json).unwrap()).unwrap();

    assert!(rmod.is_unrecognized());
    assert_eq!(rmod.version_status(), VersionStatus::Unrecognized);
    assert_eq!(rmod.installed().unwrap().label(), "Unknown");
}

#[test]
fn test_malformed_version_key_is_rejected() {
    let json = r#"{ "id": "bad", "name": "Bad", "versions": { "v1": { "semver": "v1" } } }"#;
    let err = ResoluteMod::from_raw(serde_json::from_str(json).unwrap()).unwrap_err();

    assert!(matches!(err, CatalogError::InvalidVersionFormat { ref version, .. } if version == "v1"));
}

proptest! {
    #[test]
    fn prop_versions_are_descending(versions in prop::collection::hash_set((0u64..10, 0u64..10, 0u64..10), 1..10)) {
        let keys: Vec<String> = versions.iter().map(|(a, b, c)| format!("{a}.{b}.{c}")).collect();
        let version_map: serde_json::Map<String, serde_json::Value> = keys
            .iter()
            .map(|k| (k.clone(), serde_json::json!({ "semver": k })))
            .collect();
        let json = serde_json::json!({
            "id": "prop",
            "name": "Prop",
            "versions": version_map,
            "installedVersion": keys[0],
        });
        let rmod = ResoluteMod::from_raw(serde_json::from_value(json).unwrap()).unwrap();

        let ordered: Vec<&String> = rmod.versions().keys().collect();
        for pair in ordered.windows(2) {
            prop_assert!(version::is_less(pair[1], pair[0]).unwrap());
        }
        prop_assert_eq!(rmod.versions().len(), keys.len());

        let latest = rmod.latest_version().unwrap();
        let expected_update = version::is_less(&keys[0], &latest.semver).unwrap();
        prop_assert_eq!(rmod.has_update(), expected_update);
    }
}
