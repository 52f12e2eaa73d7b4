//! `service`: Quarkus service skeleton under `services/<name>`.

use std::path::Path;

use tracing::instrument;

use crate::{
    application::{
        ApplicationError,
        services::{
            generator_service::{GeneratorService, java_root, render_dependencies, service_dir},
            generators::lib::PROJECT_VERSION,
            materializer::DependencyRegion,
            report::{GeneratorReport, StepRunner},
        },
    },
    domain::{ArtifactId, Dependency, InsertionOutcome, JavaPackage, ServiceAnswers},
    error::ScaffolderResult,
};

const QUARKUS_GROUP_ID: &str = "io.quarkus";

/// Main-source files, relative to the root package directory.
const MAIN_SOURCES: &[(&str, &str)] = &[
    ("boot/Application.java", "service/boot/Application.java"),
    ("boot/Wiring.java", "service/boot/Wiring.java"),
    ("api/HealthResource.java", "service/api/HealthResource.java"),
    ("shared/contract/result/Result.java", "service/shared/contract/result/Result.java"),
    ("shared/contract/result/Success.java", "service/shared/contract/result/Success.java"),
    ("shared/contract/result/Failure.java", "service/shared/contract/result/Failure.java"),
    ("shared/contract/error/Error.java", "service/shared/contract/error/Error.java"),
    ("shared/contract/error/ErrorCategory.java", "service/shared/contract/error/ErrorCategory.java"),
    ("shared/contract/error/ErrorDetails.java", "service/shared/contract/error/ErrorDetails.java"),
    ("shared/contract/event/EventEnvelope.java", "service/shared/contract/event/EventEnvelope.java"),
    ("shared/contract/event/EventMetadata.java", "service/shared/contract/event/EventMetadata.java"),
    ("shared/contract/event/EventPublisherPort.java", "service/shared/contract/event/EventPublisherPort.java"),
    ("shared/contract/event/EventSubscriberPort.java", "service/shared/contract/event/EventSubscriberPort.java"),
    (
        "shared/infrastructure/eventbus/inmemory/InMemoryEventBusAdapter.java",
        "service/shared/infrastructure/eventbus/inmemory/InMemoryEventBusAdapter.java",
    ),
    ("module/.gitkeep", "common/gitkeep"),
];

/// Test-source files, relative to the root package directory.
const TEST_SOURCES: &[(&str, &str)] = &[
    ("ArchitectureTest.java", "service/test/ArchitectureTest.java"),
    ("ServiceTest.java", "service/test/ServiceTest.java"),
];

struct Resolved {
    group_id: String,
    root_package: JavaPackage,
    internal_libs: Option<Vec<ArtifactId>>,
    register_in_root_pom: bool,
    add_workflows: bool,
}

impl GeneratorService {
    #[instrument(skip_all, fields(root = %answers.root.display(), service = %answers.name))]
    pub fn generate_service(&self, answers: &ServiceAnswers) -> GeneratorReport {
        let root = answers.root.as_path();
        let svc_dir = service_dir(root, &answers.name);
        let mut run = StepRunner::new("service");

        let prepared = run.value("prepare", || {
            if self.fs().exists(&svc_dir.join("pom.xml")) {
                return Err(ApplicationError::AlreadyExists {
                    what: "Service",
                    path: svc_dir.clone(),
                }
                .into());
            }

            let root_pom = root.join("pom.xml");
            let coords = self.read_coordinates(&root_pom);
            let platform_version = coords.version.ok_or_else(|| ApplicationError::UnresolvedCoordinates {
                what: "platform version",
                path: root_pom.clone(),
            })?;
            let platform_artifact_id =
                coords.artifact_id.ok_or_else(|| ApplicationError::UnresolvedCoordinates {
                    what: "platform artifactId",
                    path: root_pom.clone(),
                })?;

            let config = self.repo_config(root);
            let defaults = &config.defaults.service;
            let docker_base_image = defaults
                .docker_base_image
                .clone()
                .filter(|image| !image.trim().is_empty())
                .ok_or_else(|| {
                    ApplicationError::missing_default("defaults.service.dockerBaseImage", root)
                })?;
            if defaults.quarkus_extensions.is_empty() {
                return Err(
                    ApplicationError::missing_default("defaults.service.quarkusExtensions", root).into(),
                );
            }
            if defaults.test_dependencies.is_empty() {
                return Err(
                    ApplicationError::missing_default("defaults.service.testDependencies", root).into(),
                );
            }

            let group_id = answers
                .group_id
                .clone()
                .or_else(|| config.non_empty_group_id().map(str::to_string))
                .or(coords.group_id)
                .ok_or_else(|| ApplicationError::UnresolvedCoordinates {
                    what: "groupId",
                    path: root_pom.clone(),
                })?;
            let root_package = match &answers.root_package {
                Some(pkg) => pkg.clone(),
                None => JavaPackage::derive(&group_id, &answers.name)?,
            };

            let internal_libs = if answers.autowire_internal_libs {
                let libs = match &answers.internal_libs {
                    Some(libs) => libs.clone(),
                    None => defaults
                        .internal_libs
                        .iter()
                        .map(ArtifactId::parse)
                        .collect::<Result<Vec<_>, _>>()?,
                };
                Some(libs)
            } else {
                None
            };

            let extensions: Vec<Dependency> = defaults
                .quarkus_extensions
                .iter()
                .map(|ext| Dependency::new(QUARKUS_GROUP_ID, ext.as_str()))
                .collect();
            let lib_dependencies: Vec<Dependency> = internal_libs
                .iter()
                .flatten()
                .map(|lib| Dependency::new(group_id.as_str(), lib.as_str()))
                .collect();
            let test_dependencies: Vec<Dependency> = defaults
                .test_dependencies
                .iter()
                .cloned()
                .map(|d| d.or_scope("test"))
                .collect();

            let ctx = self
                .base_context()
                .with_variable("GROUP_ID", group_id.as_str())
                .with_variable("PLATFORM_ARTIFACT_ID", platform_artifact_id)
                .with_variable("PLATFORM_VERSION", platform_version)
                .with_name("SERVICE_NAME", answers.name.as_str())
                .with_variable("ROOT_PACKAGE", root_package.as_str())
                .with_variable("DOCKER_BASE_IMAGE", docker_base_image)
                .with_variable("QUARKUS_EXTENSIONS", render_dependencies(&extensions, "    "))
                .with_variable("INTERNAL_LIB_DEPENDENCIES", render_dependencies(&lib_dependencies, "    "))
                .with_variable("SERVICE_TEST_DEPENDENCIES", render_dependencies(&test_dependencies, "    "));

            let resolved = Resolved {
                group_id,
                root_package,
                internal_libs,
                register_in_root_pom: answers
                    .register_in_root_pom
                    .unwrap_or_else(|| config.register_service_in_root_pom()),
                add_workflows: answers
                    .add_workflows
                    .unwrap_or_else(|| config.add_service_workflows()),
            };
            Ok(("OK".to_string(), (ctx, resolved)))
        });

        let Some((ctx, resolved)) = prepared else {
            return run.finish();
        };

        run.step("pom", || self.add(root, &svc_dir.join("pom.xml"), "service/pom.xml", &ctx));
        run.step("dockerfile", || {
            self.add(
                root,
                &svc_dir.join("src/main/docker/Dockerfile.native"),
                "service/Dockerfile.native",
                &ctx,
            )
        });
        run.step("properties", || {
            self.add(
                root,
                &svc_dir.join("src/main/resources/application.properties"),
                "service/application.properties",
                &ctx,
            )
        });

        let main_root = java_root(&svc_dir, "main", &resolved.root_package);
        for &(relative, template) in MAIN_SOURCES {
            run.step(relative, || self.add(root, &main_root.join(relative), template, &ctx));
        }
        let test_root = java_root(&svc_dir, "test", &resolved.root_package);
        for &(relative, template) in TEST_SOURCES {
            run.step(relative, || self.add(root, &test_root.join(relative), template, &ctx));
        }
        run.step("readme", || self.add(root, &svc_dir.join("README.md"), "service/README.md", &ctx));

        run.step("bom", || self.register_internal_libs(root, &resolved));

        run.step("root-pom", || {
            if !resolved.register_in_root_pom {
                return Ok("Skipped root pom module registration".into());
            }
            self.register_module(root, &format!("services/{}", answers.name))
        });

        run.step("workflows", || {
            if !resolved.add_workflows {
                return Ok("Skipped workflows".into());
            }
            self.add_workflows(root)
        });

        run.finish()
    }

    fn register_internal_libs(
        &self,
        root: &Path,
        resolved: &Resolved,
    ) -> ScaffolderResult<String> {
        let Some(libs) = &resolved.internal_libs else {
            return Ok("Skipped BOM registration for internal libs".into());
        };
        if libs.is_empty() {
            return Ok("No internal libs to register in BOM".into());
        }
        let bom = root.join("bom").join("pom.xml");
        if !self.fs().exists(&bom) {
            return Ok("Skipped BOM registration (no bom/pom.xml)".into());
        }

        let materializer = self.materializer();
        let mut outcomes = Vec::with_capacity(libs.len());
        for lib in libs {
            let dependency =
                Dependency::new(resolved.group_id.as_str(), lib.as_str()).with_version(PROJECT_VERSION);
            outcomes.push(materializer.insert_dependency_entry(
                &bom,
                &dependency,
                DependencyRegion::Management,
            )?);
        }

        Ok(if outcomes.contains(&InsertionOutcome::Unsupported) {
            "Skipped BOM registration (no dependencyManagement/dependencies)".into()
        } else if outcomes.iter().all(|o| *o == InsertionOutcome::AlreadyPresent) {
            "BOM dependencies already present".into()
        } else {
            "Registered internal libs in BOM (if missing)".into()
        })
    }
}
