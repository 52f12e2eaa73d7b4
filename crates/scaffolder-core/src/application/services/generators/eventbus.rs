//! `eventbus`: in-memory event bus wiring for an existing service.

use tracing::instrument;

use crate::{
    application::services::{
        generator_service::{GeneratorService, java_root},
        materializer::DependencyRegion,
        report::{GeneratorReport, StepRunner},
    },
    domain::{EventBusAnswers, InsertionOutcome},
};

const SOURCES: &[(&str, &str, &str)] = &[
    (
        "EventEnvelope",
        "shared/contract/event/EventEnvelope.java",
        "service/shared/contract/event/EventEnvelope.java",
    ),
    (
        "EventMetadata",
        "shared/contract/event/EventMetadata.java",
        "service/shared/contract/event/EventMetadata.java",
    ),
    (
        "EventPublisherPort",
        "shared/contract/event/EventPublisherPort.java",
        "service/shared/contract/event/EventPublisherPort.java",
    ),
    (
        "InMemoryEventBusAdapter",
        "shared/infrastructure/eventbus/inmemory/InMemoryEventBusAdapter.java",
        "service/shared/infrastructure/eventbus/inmemory/InMemoryEventBusAdapter.java",
    ),
];

/// Used when `defaults.eventbus.properties` is empty.
const DEFAULT_PROPERTIES: &[&str] = &["eventbus.adapter=in-memory"];

impl GeneratorService {
    #[instrument(skip_all, fields(service = %answers.service))]
    pub fn generate_eventbus(&self, answers: &EventBusAnswers) -> GeneratorReport {
        let root = answers.root.as_path();
        let mut run = StepRunner::new("eventbus");

        let located = run.value("prepare", || {
            let svc_dir = self.require_service(root, &answers.service)?;
            let package =
                self.resolve_root_package(root, &answers.service, answers.root_package.as_ref())?;
            Ok(("OK".to_string(), (svc_dir, package)))
        });
        let Some((svc_dir, package)) = located else {
            return run.finish();
        };

        let ctx = self
            .base_context()
            .with_variable("SERVICE_NAME", answers.service.as_str())
            .with_variable("ROOT_PACKAGE", package.as_str());
        let main_root = java_root(&svc_dir, "main", &package);
        for &(name, relative, template) in SOURCES {
            run.step(name, || {
                Ok(if self.add_if_absent(&main_root.join(relative), template, &ctx)? {
                    format!("Added {name}")
                } else {
                    format!("{name} already present")
                })
            });
        }

        let config = self.repo_config(root);
        let pom = svc_dir.join("pom.xml");
        run.step("pom-deps", || {
            let dependencies = &config.defaults.eventbus.dependencies;
            if dependencies.is_empty() {
                return Ok("No eventbus dependencies configured".into());
            }
            let materializer = self.materializer();
            materializer.ensure_dependencies_section(&pom)?;
            let (mut inserted, mut unsupported) = (0, 0);
            for dependency in dependencies {
                match materializer.insert_dependency_entry(&pom, dependency, DependencyRegion::Project)? {
                    InsertionOutcome::Inserted => inserted += 1,
                    InsertionOutcome::Unsupported => unsupported += 1,
                    InsertionOutcome::AlreadyPresent => {}
                }
            }
            Ok(if unsupported > 0 {
                format!("Skipped {unsupported} eventbus dependencies (no usable <dependencies> in service pom)")
            } else if inserted > 0 {
                "Added eventbus dependencies".into()
            } else {
                "Eventbus dependencies already present".into()
            })
        });

        run.step("properties", || {
            let lines: Vec<String> = if config.defaults.eventbus.properties.is_empty() {
                DEFAULT_PROPERTIES.iter().map(|l| l.to_string()).collect()
            } else {
                config.defaults.eventbus.properties.clone()
            };
            let marker = format!("eventbus:{}", answers.service);
            let path = svc_dir.join("src/main/resources/application.properties");
            Ok(if self.materializer().append_property_lines(&path, &marker, &lines)? {
                "Appended eventbus properties".into()
            } else {
                "Eventbus properties already present".into()
            })
        });

        run.finish()
    }
}
