//! `platform`: bootstrap a new platform repository.

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        services::{
            generator_service::GeneratorService,
            report::{GeneratorReport, StepRunner},
        },
    },
    domain::{PlatformAnswers, RenderContext},
};

const FILES: &[(&str, &str)] = &[
    ("pom.xml", "platform/root.pom.xml"),
    ("bom/pom.xml", "platform/bom.pom.xml"),
    ("platform-starter/pom.xml", "platform/platform-starter.pom.xml"),
    (".platform-scaffolder.json", "platform/platform-scaffolder.json"),
    (".gitignore", "platform/gitignore"),
    ("config/checkstyle/checkstyle.xml", "platform/checkstyle.xml"),
    ("config/spotbugs/exclude.xml", "platform/spotbugs-exclude.xml"),
];

impl GeneratorService {
    /// Root aggregator, BOM, starter parent, repo config and base folders.
    #[instrument(skip_all, fields(root = %answers.root.display()))]
    pub fn generate_platform(&self, answers: &PlatformAnswers) -> GeneratorReport {
        let root = answers.root.as_path();
        let mut run = StepRunner::new("platform");

        let ctx = run.value("prepare", || {
            if self.is_platform_root(root) {
                return Err(ApplicationError::AlreadyExists {
                    what: "Platform",
                    path: root.join("pom.xml"),
                }
                .into());
            }
            self.fs().create_dir_all(root)?;

            let group_id = answers
                .group_id
                .clone()
                .or_else(|| self.defaults().group_id.clone())
                .unwrap_or_else(|| "com.yourorg".to_string());
            let ctx: RenderContext = self.base_context().with_variable("GROUP_ID", group_id);
            Ok(("OK".to_string(), ctx))
        });

        if let Some(ctx) = ctx {
            for &(relative, template) in FILES {
                run.step(relative, || self.add(root, &root.join(relative), template, &ctx));
            }
        }

        run.step("folders", || {
            self.fs().create_dir_all(&root.join("services"))?;
            self.fs().create_dir_all(&root.join("libs"))?;
            Ok("Created services/ and libs/".into())
        });

        run.step("workflows", || {
            if !answers.add_workflows {
                return Ok("Skipped workflows".into());
            }
            self.add_workflows(root)
        });

        let report = run.finish();
        if report.succeeded() {
            info!("Platform created");
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::application::services::test_support::{TestRepo, platform_answers};

    #[test]
    fn creates_every_platform_file() {
        let repo = TestRepo::empty();
        let report = repo.service().generate_platform(&platform_answers("/repo", true));

        assert!(report.succeeded(), "{:?}", report.failure);
        for (relative, _) in FILES {
            assert!(repo.fs.has(&Path::new("/repo").join(relative)), "missing {relative}");
        }
        assert!(repo.fs.has_dir(Path::new("/repo/services")));
        assert!(repo.fs.has_dir(Path::new("/repo/libs")));
        assert!(repo.fs.has(Path::new("/repo/.github/workflows/ci.yml")));
        assert_eq!(report.messages().last(), Some(&"Added workflows (if absent)"));
    }

    #[test]
    fn group_id_reaches_templates() {
        let repo = TestRepo::empty();
        let mut answers = platform_answers("/repo", false);
        answers.group_id = Some("com.acme".into());

        repo.service().generate_platform(&answers);

        let pom = repo.fs.read(Path::new("/repo/pom.xml"));
        assert!(pom.contains("GROUP_ID=com.acme"));
        assert!(!repo.fs.has(Path::new("/repo/.github/workflows/ci.yml")));
    }

    #[test]
    fn existing_root_pom_is_fatal() {
        let repo = TestRepo::empty().with_file("/repo/pom.xml", "<project/>");
        let report = repo.service().generate_platform(&platform_answers("/repo", true));

        assert!(!report.succeeded());
        assert_eq!(repo.fs.read(Path::new("/repo/pom.xml")), "<project/>");
        assert!(!repo.fs.has(Path::new("/repo/bom/pom.xml")));
    }
}
