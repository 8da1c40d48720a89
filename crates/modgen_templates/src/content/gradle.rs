//! Build descriptors and project-root files.

use crate::catalog::RenderContext;
use crate::versions::LockedVersions;

/// `settings.gradle`
pub struct Settings<'a> {
    pub project_name: &'a str,
}

impl<'a> Settings<'a> {
    pub fn from_context(ctx: &RenderContext<'a>) -> Self {
        Self {
            project_name: ctx.metadata.project_folder_name(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            r#"pluginManagement {{
    repositories {{
        maven {{ url = 'https://maven.fabricmc.net/' }}
        gradlePluginPortal()
    }}
}}
rootProject.name = '{project_name}'
"#,
            project_name = self.project_name.replace('\'', "\\'"),
        )
    }
}

/// `gradle.properties`
pub struct Properties<'a> {
    pub maven_group: &'a str,
    pub archives_base_name: &'a str,
    pub mod_version: &'a str,
    pub versions: &'a LockedVersions,
}

impl<'a> Properties<'a> {
    pub fn from_context(ctx: &RenderContext<'a>) -> Self {
        Self {
            maven_group: ctx.metadata.namespace(),
            archives_base_name: ctx.metadata.module_id(),
            mod_version: ctx.metadata.version(),
            versions: ctx.versions,
        }
    }

    pub fn render(&self) -> String {
        let v = self.versions;
        format!(
            r#"org.gradle.jvmargs=-Xmx2G -Dfile.encoding=UTF-8
org.gradle.parallel=true

minecraft_version={minecraft}
yarn_mappings={yarn}
loader_version={loader}
fabric_api_version={fabric_api}
loom_version={loom}

maven_group={group}
archives_base_name={base_name}
mod_version={mod_version}
"#,
            minecraft = v.minecraft_version,
            yarn = v.yarn_mappings,
            loader = v.loader_version,
            fabric_api = v.fabric_api_version,
            loom = v.loom_version,
            group = self.maven_group,
            base_name = self.archives_base_name,
            mod_version = self.mod_version,
        )
    }
}

/// `build.gradle`
pub struct BuildScript<'a> {
    pub versions: &'a LockedVersions,
}

impl<'a> BuildScript<'a> {
    pub fn from_context(ctx: &RenderContext<'a>) -> Self {
        Self {
            versions: ctx.versions,
        }
    }

    pub fn render(&self) -> String {
        format!(
            r#"plugins {{
    id 'fabric-loom' version '{loom}'
    id 'maven-publish'
}}

version = project.mod_version
group = project.maven_group

base {{
    archivesName = project.archives_base_name
}}

repositories {{
    maven {{ url = 'https://maven.fabricmc.net/' }}
    mavenCentral()
}}

dependencies {{
    minecraft "com.mojang:minecraft:${{project.minecraft_version}}"
    mappings "net.fabricmc:yarn:${{project.yarn_mappings}}:v2"
    modImplementation "net.fabricmc:fabric-loader:${{project.loader_version}}"
    modImplementation "net.fabricmc.fabric-api:fabric-api:${{project.fabric_api_version}}"
}}

tasks.withType(JavaCompile).configureEach {{
    it.options.encoding = 'UTF-8'
    it.options.release = {java}
}}

java {{
    toolchain {{
        languageVersion = JavaLanguageVersion.of({java})
    }}
    withSourcesJar()
}}

processResources {{
    inputs.property "version", project.version
    filesMatching("fabric.mod.json") {{
        expand "version": project.version
    }}
}}
"#,
            loom = self.versions.loom_version,
            java = self.versions.java_version,
        )
    }
}

/// `gradle/wrapper/gradle-wrapper.properties`
pub struct WrapperProperties<'a> {
    pub gradle_version: &'a str,
}

impl<'a> WrapperProperties<'a> {
    pub fn from_context(ctx: &RenderContext<'a>) -> Self {
        Self {
            gradle_version: &ctx.versions.gradle_version,
        }
    }

    pub fn render(&self) -> String {
        format!(
            r#"distributionBase=GRADLE_USER_HOME
distributionPath=wrapper/dists
distributionUrl=https\://services.gradle.org/distributions/gradle-{version}-bin.zip
networkTimeout=10000
validateDistributionUrl=true
zipStoreBase=GRADLE_USER_HOME
zipStorePath=wrapper/dists
"#,
            version = self.gradle_version,
        )
    }
}

/// `.gitignore`
pub fn gitignore() -> String {
    [
        ".gradle/", "build/", "out/", ".idea/", "*.iml", "run/", "logs/",
    ]
    .join("\n")
}

/// `README.md`
pub struct Readme<'a> {
    pub display_name: &'a str,
    pub description: &'a str,
    pub minecraft_version: &'a str,
}

impl<'a> Readme<'a> {
    pub fn from_context(ctx: &RenderContext<'a>) -> Self {
        Self {
            display_name: ctx.metadata.display_name(),
            description: ctx.metadata.description(),
            minecraft_version: &ctx.versions.minecraft_version,
        }
    }

    pub fn render(&self) -> String {
        format!(
            r#"# {name} (Fabric {minecraft})

{description}

Run: `./gradlew runClient` (or `.\gradlew.bat runClient` on Windows)
Build: `./gradlew build`

Press Right Shift in-game to open the GUI.
"#,
            name = self.display_name,
            minecraft = self.minecraft_version,
            description = self.description,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::RawMetadata;

    #[test]
    fn test_properties_use_normalized_fields() {
        let meta = RawMetadata::new()
            .module_id("Nova Client")
            .namespace("Dev-Ann")
            .version("2.0.0")
            .normalize();
        let versions = LockedVersions::default();
        let ctx = RenderContext::new(&meta, &versions);

        let rendered = Properties::from_context(&ctx).render();
        assert!(rendered.contains("maven_group=dev_ann\n"));
        assert!(rendered.contains("archives_base_name=nova_client\n"));
        assert!(rendered.contains("mod_version=2.0.0\n"));
        assert!(rendered.contains("minecraft_version=1.21.4\n"));
    }

    #[test]
    fn test_build_script_keeps_gradle_interpolation() {
        let meta = RawMetadata::new().normalize();
        let versions = LockedVersions::default();
        let ctx = RenderContext::new(&meta, &versions);

        let rendered = BuildScript::from_context(&ctx).render();
        assert!(rendered.contains("id 'fabric-loom' version '1.14.9'"));
        assert!(rendered.contains("${project.minecraft_version}"));
        assert!(rendered.contains("JavaLanguageVersion.of(21)"));
    }

    #[test]
    fn test_wrapper_uses_gradle_version() {
        let meta = RawMetadata::new().normalize();
        let versions = LockedVersions::default();
        let ctx = RenderContext::new(&meta, &versions);

        let rendered = WrapperProperties::from_context(&ctx).render();
        assert!(rendered.contains("gradle-9.3.1-bin.zip"));
    }
}
