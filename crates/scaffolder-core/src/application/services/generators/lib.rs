//! `lib`: internal library under `libs/<name>`.

use tracing::instrument;

use crate::{
    application::{
        ApplicationError,
        services::{
            generator_service::{GeneratorService, java_root, render_dependencies},
            materializer::DependencyRegion,
            report::{GeneratorReport, StepRunner},
        },
    },
    domain::{Dependency, InsertionOutcome, JavaPackage, LibAnswers},
};

/// Version expression for platform-internal artifacts in the BOM.
pub(crate) const PROJECT_VERSION: &str = "${project.version}";

impl GeneratorService {
    #[instrument(skip_all, fields(root = %answers.root.display(), lib = %answers.name))]
    pub fn generate_lib(&self, answers: &LibAnswers) -> GeneratorReport {
        let root = answers.root.as_path();
        let lib_dir = root.join("libs").join(answers.name.as_str());
        let mut run = StepRunner::new("lib");

        let resolved = run.value("prepare", || {
            if self.fs().exists(&lib_dir.join("pom.xml")) {
                return Err(ApplicationError::AlreadyExists {
                    what: "Lib",
                    path: lib_dir.clone(),
                }
                .into());
            }

            let config = self.repo_config(root);
            let coords = self.read_coordinates(&root.join("pom.xml"));

            let group_id = answers
                .group_id
                .clone()
                .or_else(|| config.non_empty_group_id().map(str::to_string))
                .or(coords.group_id)
                .ok_or_else(|| ApplicationError::UnresolvedCoordinates {
                    what: "groupId",
                    path: root.join("pom.xml"),
                })?;
            let platform_version = coords
                .version
                .or(config.platform_version.clone())
                .unwrap_or_else(|| self.defaults().platform_version.clone());
            let platform_artifact_id = coords
                .artifact_id
                .or(config.platform_artifact_id.clone())
                .unwrap_or_else(|| self.defaults().platform_artifact_id.clone());
            let base_package = match &answers.base_package {
                Some(pkg) => pkg.clone(),
                None => JavaPackage::derive(&group_id, &answers.name)?,
            };

            let mut test_dependencies = config.defaults.lib.test_dependencies.clone();
            if test_dependencies.is_empty() {
                test_dependencies.push(Dependency::new("org.junit.jupiter", "junit-jupiter"));
            }
            let test_dependencies: Vec<Dependency> = test_dependencies
                .into_iter()
                .map(|d| d.or_scope("test"))
                .collect();

            let ctx = self
                .base_context()
                .with_variable("GROUP_ID", group_id.as_str())
                .with_variable("PLATFORM_ARTIFACT_ID", platform_artifact_id)
                .with_variable("PLATFORM_VERSION", platform_version)
                .with_name("LIB_NAME", answers.name.as_str())
                .with_variable("BASE_PACKAGE", base_package.as_str())
                .with_variable("LIB_TEST_DEPENDENCIES", render_dependencies(&test_dependencies, "    "));

            let register_in_root_pom = answers
                .register_in_root_pom
                .unwrap_or_else(|| config.register_lib_in_root_pom());
            let register_in_bom = answers
                .register_in_bom
                .unwrap_or_else(|| config.register_lib_in_bom());

            Ok((
                "OK".to_string(),
                (ctx, group_id, base_package, register_in_root_pom, register_in_bom),
            ))
        });

        let Some((ctx, group_id, base_package, register_in_root_pom, register_in_bom)) = resolved
        else {
            return run.finish();
        };

        let main_root = java_root(&lib_dir, "main", &base_package);
        let test_root = java_root(&lib_dir, "test", &base_package);

        run.step("pom", || self.add(root, &lib_dir.join("pom.xml"), "lib/pom.xml", &ctx));
        run.step("readme", || self.add(root, &lib_dir.join("README.md"), "lib/README.md", &ctx));
        run.step("package", || self.add(root, &main_root.join(".gitkeep"), "common/gitkeep", &ctx));
        run.step("test", || self.add(root, &test_root.join("LibTest.java"), "lib/LibTest.java", &ctx));

        run.step("root-pom", || {
            if !register_in_root_pom {
                return Ok("Skipped root pom module registration".into());
            }
            self.register_module(root, &format!("libs/{}", answers.name))
        });

        run.step("bom", || {
            if !register_in_bom {
                return Ok("Skipped BOM registration".into());
            }
            let bom = root.join("bom").join("pom.xml");
            if !self.fs().exists(&bom) {
                return Ok("Skipped BOM registration (no bom/pom.xml)".into());
            }
            let dependency =
                Dependency::new(group_id.as_str(), answers.name.as_str()).with_version(PROJECT_VERSION);
            let name = answers.name.as_str();
            Ok(
                match self.materializer().insert_dependency_entry(
                    &bom,
                    &dependency,
                    DependencyRegion::Management,
                )? {
                    InsertionOutcome::Inserted => format!("Registered BOM dependency: {name}"),
                    InsertionOutcome::AlreadyPresent => format!("BOM dependency already present: {name}"),
                    InsertionOutcome::Unsupported => {
                        "Skipped BOM registration (no dependencyManagement/dependencies)".into()
                    }
                },
            )
        });

        run.finish()
    }
}
