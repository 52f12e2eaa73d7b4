pub mod answers;
pub mod defaults;
pub mod dependency;
pub mod repo_config;
pub mod template;

pub use answers::{
    EventBusAnswers, LibAnswers, ModuleAnswers, PlatformAnswers, ServiceAnswers, UsecaseAnswers,
};
pub use defaults::PlatformDefaults;
pub use dependency::Dependency;
pub use repo_config::{REPO_CONFIG_FILE, RepoConfig};
pub use template::{RenderContext, Template, TemplateId, TemplateSource};
