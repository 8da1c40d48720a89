//! Integration tests for project generation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use modgen_templates::{
    normalize_namespace, normalize_slug, CollisionResolver, Generator, LockedVersions,
    ModManifest, NoProgress, RawMetadata, RenderContext, TemplateRenderer, TemplateSet,
    ENTRYPOINT_CLASS,
};
use tempfile::tempdir;
use walkdir::WalkDir;

fn sample(out: &Path) -> RawMetadata {
    RawMetadata::new()
        .output_dir(out)
        .project_folder_name("CBClient_client")
        .display_name("CBClient")
        .module_id("cbclient")
        .namespace("com.example")
        .version("0.1.0")
        .authors(["GuilhermeBedYT"])
        .description("Custom Fabric client mod")
        .license("MIT")
}

/// Map of relative path -> bytes for every file under `root`.
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let relative = e.path().strip_prefix(root).unwrap().to_path_buf();
            (relative, fs::read(e.path()).unwrap())
        })
        .collect()
}

#[test]
fn test_generate_full_tree() {
    let temp = tempdir().unwrap();
    let generator = Generator::new(LockedVersions::default());

    let outcome = generator.generate_quiet(&sample(temp.path())).unwrap();
    let root = outcome.root();
    assert_eq!(root, temp.path().join("CBClient_client"));

    for file in [
        "settings.gradle",
        "gradle.properties",
        "build.gradle",
        "gradle/wrapper/gradle-wrapper.properties",
        ".gitignore",
        "README.md",
        "src/main/resources/fabric.mod.json",
        "src/main/resources/cbclient.mixins.json",
        "src/main/resources/assets/cbclient/lang/en_us.json",
        "src/main/resources/assets/cbclient/icon.png",
        "src/main/java/com/example/cbclient/CBClient.java",
        "src/main/java/com/example/cbclient/module/Module.java",
        "src/main/java/com/example/cbclient/module/ModuleManager.java",
        "src/main/java/com/example/cbclient/module/ExampleModule.java",
        "src/main/java/com/example/cbclient/gui/ClientScreen.java",
        "src/main/java/com/example/cbclient/mixin/MinecraftClientMixin.java",
    ] {
        assert!(root.join(file).is_file(), "Missing generated file: {}", file);
    }

    assert_eq!(snapshot(root).len(), generator.templates().len());
}

#[test]
fn test_text_files_end_with_single_newline() {
    let temp = tempdir().unwrap();
    let outcome = Generator::new(LockedVersions::default())
        .generate_quiet(&sample(temp.path()))
        .unwrap();

    for (path, bytes) in snapshot(outcome.root()) {
        if path.extension().is_some_and(|e| e == "png") {
            continue;
        }
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.ends_with('\n'), "{:?} lacks trailing newline", path);
        assert!(!text.ends_with("\n\n"), "{:?} has extra trailing newlines", path);
        assert!(
            text.lines().all(|l| l == l.trim_end()),
            "{:?} has trailing whitespace",
            path
        );
    }
}

#[test]
fn test_manifest_on_disk() {
    let temp = tempdir().unwrap();
    let raw = sample(temp.path())
        .module_id("Nova Client")
        .namespace("Dev.Ann")
        .authors(["Ann", " ", "Ben "]);
    let outcome = Generator::new(LockedVersions::default())
        .generate_quiet(&raw)
        .unwrap();

    let content =
        fs::read_to_string(outcome.root().join("src/main/resources/fabric.mod.json")).unwrap();
    let manifest: ModManifest = serde_json::from_str(&content).unwrap();

    assert_eq!(manifest.schema_version, 1);
    assert_eq!(manifest.id, "nova_client");
    assert_eq!(manifest.version, "${version}");
    assert_eq!(manifest.authors, vec!["Ann", "Ben"]);
    assert_eq!(manifest.icon, "assets/nova_client/icon.png");
    assert_eq!(manifest.mixins, vec!["nova_client.mixins.json"]);
    assert_eq!(manifest.depends.java, ">=21");
    assert!(outcome
        .root()
        .join("src/main/resources/assets/nova_client/icon.png")
        .is_file());
}

#[test]
fn test_entrypoint_ends_with_derived_namespace_and_class() {
    for (namespace, module_id) in [
        ("com.example", "cbclient"),
        ("Com-Example..Test", "My Mod!"),
        ("", ""),
        ("123", "9lives"),
        ("org.acme", "acme-tools"),
    ] {
        let meta = RawMetadata::new()
            .namespace(namespace)
            .module_id(module_id)
            .normalize();
        let manifest = ModManifest::client(&meta, &LockedVersions::default());
        let entrypoint = &manifest.entrypoints.client[0];

        assert!(
            entrypoint.ends_with(&format!("{}.{}", meta.derived_namespace(), ENTRYPOINT_CLASS)),
            "{} does not end with the derived namespace",
            entrypoint
        );
    }
}

#[test]
fn test_rendering_is_deterministic() {
    let meta = sample(Path::new("/unused")).normalize();
    let versions = LockedVersions::default();
    let set = TemplateSet::fabric_client();

    let first = TemplateRenderer::new(RenderContext::new(&meta, &versions))
        .render_all(&set)
        .unwrap();
    let second = TemplateRenderer::new(RenderContext::new(&meta, &versions))
        .render_all(&set)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_generate_twice_into_same_directory() {
    let temp = tempdir().unwrap();
    let generator = Generator::new(LockedVersions::default());
    let raw = sample(temp.path());

    let first = generator.generate_quiet(&raw).unwrap();
    let second = generator.generate(&raw, &mut NoProgress).unwrap();

    assert_ne!(first.root(), second.root());
    assert!(second.target.is_suffixed());
    assert_eq!(second.target.primary(), first.root());

    let second_name = second.root().file_name().unwrap().to_string_lossy().to_string();
    assert!(second_name.starts_with("CBClient_client_"));

    // Both trees are complete and identical in content.
    assert_eq!(snapshot(first.root()), snapshot(second.root()));
}

#[test]
fn test_existing_empty_directory_is_reused() {
    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("CBClient_client")).unwrap();

    let target = CollisionResolver::new()
        .resolve(temp.path(), "CBClient_client")
        .unwrap();
    assert!(!target.is_suffixed());
}

#[test]
fn test_locked_versions_flow_into_build_files() {
    let temp = tempdir().unwrap();
    let versions = LockedVersions {
        minecraft_version: "1.21.5".to_string(),
        java_version: "22".to_string(),
        ..LockedVersions::default()
    };
    let outcome = Generator::new(versions)
        .generate_quiet(&sample(temp.path()))
        .unwrap();

    let properties = fs::read_to_string(outcome.root().join("gradle.properties")).unwrap();
    assert!(properties.contains("minecraft_version=1.21.5"));

    let build = fs::read_to_string(outcome.root().join("build.gradle")).unwrap();
    assert!(build.contains("JavaLanguageVersion.of(22)"));

    let mixins =
        fs::read_to_string(outcome.root().join("src/main/resources/cbclient.mixins.json")).unwrap();
    assert!(mixins.contains("\"JAVA_22\""));
}

#[test]
fn test_end_to_end_normalization_scenarios() {
    let slug = normalize_slug("123 Cool!!");
    assert!(slug.starts_with('c'));
    assert!(!slug.contains('!') && !slug.contains(' '));

    assert_eq!(normalize_namespace("Com-Example..Test"), "com_example.test");

    let meta = RawMetadata::new().authors([""]).normalize();
    assert_eq!(meta.authors(), ["Unknown".to_string()]);
}
