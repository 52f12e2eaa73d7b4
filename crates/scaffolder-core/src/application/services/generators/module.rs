//! `module`: package container `module/<name>/` inside a service.

use tracing::instrument;

use crate::{
    application::services::{
        generator_service::{GeneratorService, java_root},
        report::{GeneratorReport, StepRunner},
    },
    domain::ModuleAnswers,
};

impl GeneratorService {
    #[instrument(skip_all, fields(service = %answers.service, module = %answers.module))]
    pub fn generate_module(&self, answers: &ModuleAnswers) -> GeneratorReport {
        let root = answers.root.as_path();
        let mut run = StepRunner::new("module");

        let located = run.value("prepare", || {
            let svc_dir = self.require_service(root, &answers.service)?;
            let package =
                self.resolve_root_package(root, &answers.service, answers.root_package.as_ref())?;
            Ok(("OK".to_string(), java_root(&svc_dir, "main", &package)))
        });

        if let Some(main_root) = located {
            let module_dir = main_root.join("module").join(answers.module.package_segment());
            run.step("gitkeep", || {
                self.add(
                    root,
                    &module_dir.join(".gitkeep"),
                    "common/gitkeep",
                    &self.base_context(),
                )
            });
        }

        run.finish()
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::{
        application::{ApplicationError, services::test_support::{TestRepo, artifact}},
        domain::{JavaIdentifier, JavaPackage},
        error::ScaffolderError,
    };

    const SERVICE_POM: &str =
        "<project>\n  <properties>\n    <root.package>com.acme.bff</root.package>\n  </properties>\n</project>\n";

    fn answers(module: &str) -> ModuleAnswers {
        ModuleAnswers {
            root: PathBuf::from("/repo"),
            service: artifact("bff"),
            root_package: None,
            module: JavaIdentifier::parse(module).unwrap(),
        }
    }

    #[test]
    fn creates_module_keep_file_under_pom_package() {
        let repo = TestRepo::platform().with_file("/repo/services/bff/pom.xml", SERVICE_POM);
        let report = repo.service().generate_module(&answers("identity"));

        assert!(report.succeeded(), "{:?}", report.failure);
        assert!(repo.fs.has(Path::new(
            "/repo/services/bff/src/main/java/com/acme/bff/module/identity/.gitkeep"
        )));
    }

    #[test]
    fn explicit_package_wins() {
        let repo = TestRepo::platform().with_file("/repo/services/bff/pom.xml", SERVICE_POM);
        let mut a = answers("profile");
        a.root_package = Some(JavaPackage::parse("org.example.gateway").unwrap());

        repo.service().generate_module(&a);

        assert!(repo.fs.has(Path::new(
            "/repo/services/bff/src/main/java/org/example/gateway/module/profile/.gitkeep"
        )));
    }

    #[test]
    fn unknown_service_is_fatal() {
        let repo = TestRepo::platform();
        let report = repo.service().generate_module(&answers("identity"));

        assert!(matches!(
            report.failure,
            Some(ScaffolderError::Application(ApplicationError::NotFound { what: "Service", .. }))
        ));
    }

    #[test]
    fn existing_module_is_fatal() {
        let repo = TestRepo::platform()
            .with_file("/repo/services/bff/pom.xml", SERVICE_POM)
            .with_file(
                "/repo/services/bff/src/main/java/com/acme/bff/module/identity/.gitkeep",
                "",
            );

        let report = repo.service().generate_module(&answers("identity"));

        assert!(!report.succeeded());
    }
}
