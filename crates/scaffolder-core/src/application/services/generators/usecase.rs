//! `usecase`: vertical slice under `module/<module>/<usecase>usecase/`.
//!
//! A service without a POM gets a minimal one first, registered in the root
//! aggregator. The service POM then receives the configured usecase
//! dependencies before any source file is written.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        services::{
            generator_service::{GeneratorService, display_relative, java_root, service_dir},
            materializer::DependencyRegion,
            report::{GeneratorReport, StepRunner},
        },
    },
    domain::{Dependency, JavaPackage, RenderContext, UsecaseAnswers},
    error::ScaffolderResult,
};

/// Skeleton files, relative to the usecase package directory. `{}` is the
/// usecase name in Pascal case.
const SLICE: &[(&str, &str)] = &[
    ("api/{}Resource.java", "usecase/api/UseCaseResource.java"),
    ("api/request/{}Request.java", "usecase/api/request/UseCaseRequest.java"),
    ("api/response/{}Response.java", "usecase/api/response/UseCaseResponse.java"),
    ("application/{}Service.java", "usecase/application/UseCaseService.java"),
    ("domain/{}Model.java", "usecase/domain/UseCaseModel.java"),
    ("domain/port/{}RepositoryPort.java", "usecase/domain/port/UseCaseRepositoryPort.java"),
    ("domain/error/{}ErrorCodes.java", "usecase/domain/error/UseCaseErrorCodes.java"),
    ("domain/error/{}ErrorFactory.java", "usecase/domain/error/UseCaseErrorFactory.java"),
    (
        "infrastructure/persistence/{}Entity.java",
        "usecase/infrastructure/persistence/UseCaseEntity.java",
    ),
    (
        "infrastructure/persistence/{}PersistenceMapper.java",
        "usecase/infrastructure/persistence/UseCasePersistenceMapper.java",
    ),
    (
        "infrastructure/persistence/{}RepositoryAdapter.java",
        "usecase/infrastructure/persistence/UseCaseRepositoryAdapter.java",
    ),
];

impl GeneratorService {
    #[instrument(skip_all, fields(service = %answers.service, module = %answers.module, usecase = %answers.usecase))]
    pub fn generate_usecase(&self, answers: &UsecaseAnswers) -> GeneratorReport {
        let root = answers.root.as_path();
        let svc_dir = service_dir(root, &answers.service);
        let svc_pom = svc_dir.join("pom.xml");
        let mut run = StepRunner::new("usecase");

        let package = run.value("prepare", || {
            let package =
                self.resolve_root_package(root, &answers.service, answers.root_package.as_ref())?;
            let message = if self.fs().exists(&svc_pom) {
                "OK".to_string()
            } else {
                self.bootstrap_service_pom(root, answers, &package)?
            };
            Ok((message, package))
        });

        let core_package = run.value("pom-deps", || {
            let core_package = self.ensure_usecase_dependencies(root, &svc_pom)?;
            Ok(("Ensured service pom deps".to_string(), core_package))
        });

        let (Some(package), Some(core_package)) = (package, core_package) else {
            return run.finish();
        };

        let usecase_pascal = answers.usecase.pascal();
        let usecase_package = format!("{}usecase", answers.usecase.package_segment());
        let module = answers.module.package_segment();
        let ctx = self
            .base_context()
            .with_variable("SERVICE_NAME", answers.service.as_str())
            .with_variable("ROOT_PACKAGE", package.as_str())
            .with_variable("CORE_PACKAGE", core_package)
            .with_name("MODULE", &module)
            .with_name("USECASE", answers.usecase.as_str())
            .with_variable("USECASE_PACKAGE", usecase_package.as_str());

        let main_root = java_root(&svc_dir, "main", &package);
        let test_root = java_root(&svc_dir, "test", &package);
        let bootstrap: [(&str, PathBuf, &str); 3] = [
            ("boot/Application", main_root.join("boot/Application.java"), "service/boot/Application.java"),
            ("boot/Wiring", main_root.join("boot/Wiring.java"), "service/boot/Wiring.java"),
            ("ArchitectureTest", test_root.join("ArchitectureTest.java"), "service/test/ArchitectureTest.java"),
        ];
        for (name, path, template) in &bootstrap {
            run.step(name, || {
                self.add_if_absent(path, template, &ctx)?;
                Ok(format!("Bootstrapped {name} (if absent)"))
            });
        }

        let slice_dir = main_root
            .join("module")
            .join(&module)
            .join(&usecase_package);
        for &(pattern, template) in SLICE {
            let relative = pattern.replace("{}", &usecase_pascal);
            run.step(template, || self.add(root, &slice_dir.join(&relative), template, &ctx));
        }

        let report = run.finish();
        if report.succeeded() {
            info!(path = %display_relative(root, &slice_dir), "Usecase created");
        }
        report
    }

    /// Minimal service POM with an empty `<dependencies>` section, registered
    /// in the root aggregator.
    fn bootstrap_service_pom(
        &self,
        root: &Path,
        answers: &UsecaseAnswers,
        package: &JavaPackage,
    ) -> ScaffolderResult<String> {
        let root_pom = root.join("pom.xml");
        let coords = self.read_coordinates(&root_pom);
        let (Some(group_id), Some(version)) = (coords.group_id, coords.version) else {
            return Err(ApplicationError::UnresolvedCoordinates {
                what: "groupId/version",
                path: root_pom,
            }
            .into());
        };

        let ctx = RenderContext::new()
            .with_variable("GROUP_ID", group_id)
            .with_variable("PLATFORM_VERSION", version)
            .with_variable("SERVICE_NAME", answers.service.as_str())
            .with_variable("ROOT_PACKAGE", package.as_str());
        let svc_pom = service_dir(root, &answers.service).join("pom.xml");
        self.materializer()
            .write_new(&svc_pom, &self.render("usecase/service-pom.xml", &ctx)?)?;
        info!(service = %answers.service, "Bootstrapped service pom");

        let registered = self.register_module(root, &format!("services/{}", answers.service))?;
        Ok(format!("Bootstrapped service pom; {registered}"))
    }

    /// Insert `defaults.usecase.pom` dependencies into the service POM and
    /// return `core.package`.
    fn ensure_usecase_dependencies(&self, root: &Path, svc_pom: &Path) -> ScaffolderResult<String> {
        let config = self.repo_config(root);
        let core_package = config
            .core
            .package
            .clone()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| ApplicationError::missing_default("core.package", root))?;
        let pom_defaults = &config.defaults.usecase.pom;
        if pom_defaults.dependencies.is_empty() {
            return Err(
                ApplicationError::missing_default("defaults.usecase.pom.dependencies", root).into(),
            );
        }
        if pom_defaults.test_dependencies.is_empty() {
            return Err(ApplicationError::missing_default(
                "defaults.usecase.pom.testDependencies",
                root,
            )
            .into());
        }

        let materializer = self.materializer();
        materializer.ensure_dependencies_section(svc_pom)?;

        let test_dependencies: Vec<Dependency> = pom_defaults
            .test_dependencies
            .iter()
            .cloned()
            .map(|d| d.or_scope("test"))
            .collect();
        for dependency in pom_defaults.dependencies.iter().chain(&test_dependencies) {
            materializer.insert_dependency_entry(svc_pom, dependency, DependencyRegion::Project)?;
        }
        Ok(core_package)
    }
}
