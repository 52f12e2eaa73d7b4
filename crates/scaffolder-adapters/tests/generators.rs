//! End-to-end generator runs against a temporary directory with the
//! built-in templates.

use std::{fs, path::Path};

use scaffolder_adapters::{
    InMemoryStore, JsonRepoConfig, LocalFilesystem, MemoryFilesystem, SimpleRenderer,
};
use scaffolder_core::prelude::*;
use tempfile::TempDir;

fn service() -> GeneratorService {
    GeneratorService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(InMemoryStore::with_builtin().unwrap()),
        Box::new(SimpleRenderer::new()),
        Box::new(JsonRepoConfig::new()),
        PlatformDefaults::default(),
    )
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative))
        .unwrap_or_else(|e| panic!("{relative}: {e}"))
}

fn artifact(name: &str) -> ArtifactId {
    ArtifactId::parse(name).unwrap()
}

fn ident(name: &str) -> JavaIdentifier {
    JavaIdentifier::parse(name).unwrap()
}

fn platform(generators: &GeneratorService, root: &Path, add_workflows: bool) {
    let report = generators.generate_platform(&PlatformAnswers {
        root: root.to_path_buf(),
        group_id: Some("com.acme".into()),
        add_workflows,
    });
    assert!(report.succeeded(), "{:?}", report.failure);
}

fn lib(generators: &GeneratorService, root: &Path, name: &str) -> GeneratorReport {
    generators.generate_lib(&LibAnswers {
        root: root.to_path_buf(),
        name: artifact(name),
        group_id: None,
        base_package: None,
        register_in_root_pom: None,
        register_in_bom: None,
    })
}

fn service_named(generators: &GeneratorService, root: &Path, name: &str, libs: &[&str]) -> GeneratorReport {
    generators.generate_service(&ServiceAnswers {
        root: root.to_path_buf(),
        name: artifact(name),
        group_id: None,
        root_package: None,
        add_workflows: None,
        register_in_root_pom: None,
        autowire_internal_libs: true,
        internal_libs: Some(libs.iter().map(|l| artifact(l)).collect()),
    })
}

#[test]
fn platform_renders_root_bom_and_starter() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    platform(&service(), root, true);

    let root_pom = read(root, "pom.xml");
    assert!(root_pom.contains("<module>bom</module>"));
    assert!(root_pom.contains("<module>platform-starter</module>"));
    assert!(root_pom.contains("<quarkus.platform.version>3.19.1</quarkus.platform.version>"));
    assert!(root_pom.contains("<archunit.version>1.3.0</archunit.version>"));
    assert!(!root_pom.contains("{{"));

    assert!(read(root, "bom/pom.xml").contains("<relativePath>../pom.xml</relativePath>"));
    assert!(read(root, "platform-starter/pom.xml").contains("<artifactId>platform-bom</artifactId>"));
    assert!(root.join("services").is_dir());
    assert!(root.join("libs").is_dir());

    let ci = read(root, ".github/workflows/ci.yml");
    assert!(ci.contains("name: ci"));
    assert!(ci.contains("fetch-depth: 0"));
    assert!(ci.contains("pull_request"));
    assert!(ci.contains("services_json"));
    let publish = read(root, ".github/workflows/publish-ghcr.yml");
    assert!(publish.contains("name: publish-ghcr"));
    assert!(publish.contains("IMAGE_REGISTRY"));
    assert!(!publish.contains("ghcr.io"));
}

#[test]
fn platform_twice_fails_without_touching_files() {
    let tmp = TempDir::new().unwrap();
    let generators = service();
    platform(&generators, tmp.path(), false);
    let before = read(tmp.path(), "pom.xml");

    let report = generators.generate_platform(&PlatformAnswers {
        root: tmp.path().to_path_buf(),
        group_id: Some("org.other".into()),
        add_workflows: false,
    });

    assert!(!report.succeeded());
    assert_eq!(read(tmp.path(), "pom.xml"), before);
}

#[test]
fn lib_registers_in_root_and_bom_once() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let generators = service();
    platform(&generators, root, false);

    let report = lib(&generators, root, "observability");
    assert!(report.succeeded(), "{:?}", report.failure);

    let pom = read(root, "libs/observability/pom.xml");
    assert!(pom.contains("<artifactId>observability</artifactId>"));
    assert!(pom.contains("<artifactId>platform-starter</artifactId>"));
    assert!(pom.contains("<artifactId>junit-jupiter</artifactId>"));
    assert!(root.join("libs/observability/src/main/java/com/acme/observability/.gitkeep").exists());
    assert!(root
        .join("libs/observability/src/test/java/com/acme/observability/LibTest.java")
        .exists());

    let root_pom = read(root, "pom.xml");
    assert_eq!(root_pom.matches("<module>libs/observability</module>").count(), 1);
    let bom = read(root, "bom/pom.xml");
    assert!(bom.contains("<artifactId>observability</artifactId>"));
    assert!(bom.contains("<version>${project.version}</version>"));

    // A second lib leaves the first registration alone.
    assert!(lib(&generators, root, "shared-kernel").succeeded());
    let root_pom = read(root, "pom.xml");
    assert_eq!(root_pom.matches("<module>libs/observability</module>").count(), 1);
    assert_eq!(root_pom.matches("<module>libs/shared-kernel</module>").count(), 1);
}

#[test]
fn service_writes_skeleton_and_registers_everything() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let generators = service();
    platform(&generators, root, false);
    assert!(lib(&generators, root, "shared-kernel").succeeded());

    let report = service_named(&generators, root, "bff", &["shared-kernel"]);
    assert!(report.succeeded(), "{:?}", report.failure);

    let pom = read(root, "services/bff/pom.xml");
    assert!(pom.contains("<artifactId>bff</artifactId>"));
    assert!(pom.contains("<groupId>com.acme</groupId>"));
    assert!(pom.contains("<artifactId>platform-starter</artifactId>"));
    assert!(pom.contains("<artifactId>shared-kernel</artifactId>"));
    assert!(pom.contains("<artifactId>quarkus-rest</artifactId>"));
    assert!(pom.contains("<root.package>com.acme.bff</root.package>"));

    let dockerfile = read(root, "services/bff/src/main/docker/Dockerfile.native");
    assert!(dockerfile.contains("registry.access.redhat.com/ubi9/ubi-minimal:9.5"));
    assert!(dockerfile.contains(r#"ENTRYPOINT ["/work/application""#));

    let resource = read(root, "services/bff/src/main/java/com/acme/bff/api/HealthResource.java");
    assert!(resource.contains(r#"Path("/healthz")"#));
    assert!(resource.contains(r#""service", "bff""#));

    assert!(read(root, "pom.xml").contains("<module>services/bff</module>"));
    assert_eq!(read(root, "bom/pom.xml").matches("<artifactId>shared-kernel</artifactId>").count(), 1);
    assert!(root.join(".github/workflows/ci.yml").exists());
}

#[test]
fn usecase_and_eventbus_extend_an_existing_service() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let generators = service();
    platform(&generators, root, false);
    assert!(service_named(&generators, root, "bff", &[]).succeeded());

    let usecase = UsecaseAnswers {
        root: root.to_path_buf(),
        service: artifact("bff"),
        root_package: None,
        module: ident("profile"),
        usecase: ident("getProfile"),
    };
    let report = generators.generate_usecase(&usecase);
    assert!(report.succeeded(), "{:?}", report.failure);

    let slice = "services/bff/src/main/java/com/acme/bff/module/profile/getprofileusecase";
    let resource = read(root, &format!("{slice}/api/GetProfileResource.java"));
    assert!(resource.contains("package com.acme.bff.module.profile.getprofileusecase.api;"));
    assert!(resource.contains(r#"@Path("/profile/get-profile")"#));
    assert!(read(root, &format!("{slice}/domain/error/GetProfileErrorCodes.java")).contains("com.acme.core"));

    let pom = read(root, "services/bff/pom.xml");
    assert!(pom.contains("<artifactId>quarkus-hibernate-validator</artifactId>"));
    assert_eq!(pom.matches("<artifactId>archunit-junit5</artifactId>").count(), 1);

    let eventbus = EventBusAnswers {
        root: root.to_path_buf(),
        service: artifact("bff"),
        root_package: None,
    };
    assert!(generators.generate_eventbus(&eventbus).succeeded());
    assert!(generators.generate_eventbus(&eventbus).succeeded());

    let props = read(root, "services/bff/src/main/resources/application.properties");
    assert_eq!(props.matches("# scaffolder:eventbus:bff").count(), 1);
    assert!(props.contains("eventbus.adapter=in-memory"));
}

#[test]
fn usecase_bootstraps_missing_service_pom() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let generators = service();
    platform(&generators, root, false);

    let report = generators.generate_usecase(&UsecaseAnswers {
        root: root.to_path_buf(),
        service: artifact("orders"),
        root_package: Some(JavaPackage::parse("com.acme.orders").unwrap()),
        module: ident("billing"),
        usecase: ident("createInvoice"),
    });
    assert!(report.succeeded(), "{:?}", report.failure);

    let pom = read(root, "services/orders/pom.xml");
    assert!(pom.contains("<version>1.0.0-SNAPSHOT</version>"));
    assert!(pom.contains("<artifactId>quarkus-rest-jackson</artifactId>"));
    assert!(read(root, "pom.xml").contains("<module>services/orders</module>"));
    assert!(root
        .join("services/orders/src/main/java/com/acme/orders/boot/Application.java")
        .exists());
}

#[test]
fn platform_and_lib_in_memory() {
    let fs = MemoryFilesystem::new();
    let generators = GeneratorService::new(
        Box::new(fs.clone()),
        Box::new(InMemoryStore::with_builtin().unwrap()),
        Box::new(SimpleRenderer::new()),
        Box::new(JsonRepoConfig::new()),
        PlatformDefaults::default(),
    );
    let root = Path::new("/mem/platform");

    platform(&generators, root, true);
    let report = lib(&generators, root, "observability");
    assert!(report.succeeded(), "{:?}", report.failure);

    let root_pom = fs.read_file(&root.join("pom.xml")).unwrap();
    assert!(root_pom.contains("<module>libs/observability</module>"));
    assert!(fs
        .list_files()
        .contains(&root.join("libs/observability/pom.xml")));
    let readme = fs.read_file(&root.join("libs/observability/README.md")).unwrap();
    assert!(readme.contains("Scaffolded on 20"));
    assert!(!readme.contains("{{"));
    assert!(!Path::new("/mem/platform").exists());
}
