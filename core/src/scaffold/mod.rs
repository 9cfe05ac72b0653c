use crate::config::Config;
use crate::disk::prepare_target;
use crate::error::Result;
use crate::runner::CommandRunner;
use crate::runner::git::create_git;
use crate::runner::npm::{DependencyKind, install_with};
use crate::templates::emit_all;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Preflight,
    Templates,
    Install,
    DevInstall,
    Repository,
}

impl Stage {
    pub fn title(self) -> &'static str {
        match self {
            Self::Preflight => "Checking target directory",
            Self::Templates => "Writing project files",
            Self::Install => "Installing dependencies",
            Self::DevInstall => "Installing dev dependencies",
            Self::Repository => "Creating git repository",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub dir: PathBuf,
    pub description: String,
    pub package_manager: String,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    pub install: bool,
    pub commit_message: Option<String>,
}

impl ScaffoldPlan {
    pub fn from_config(dir: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            dir: dir.into(),
            description: String::new(),
            package_manager: config.package_manager.clone(),
            dependencies: config.dependencies.clone(),
            dev_dependencies: config.dev_dependencies.clone(),
            install: config.install,
            commit_message: config.git.then(|| config.commit_message.clone()),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn stages(&self) -> Vec<Stage> {
        let mut stages = vec![Stage::Preflight, Stage::Templates];
        if self.install && !self.dependencies.is_empty() {
            stages.push(Stage::Install);
        }
        if self.install && !self.dev_dependencies.is_empty() {
            stages.push(Stage::DevInstall);
        }
        if self.commit_message.is_some() {
            stages.push(Stage::Repository);
        }
        stages
    }
}

/// `on_stage(step, total, stage)` fires before each stage starts.
pub async fn run(
    plan: &ScaffoldPlan,
    runner: &dyn CommandRunner,
    mut on_stage: impl FnMut(usize, usize, Stage),
) -> Result<()> {
    let stages = plan.stages();
    let total = stages.len();

    for (index, stage) in stages.into_iter().enumerate() {
        on_stage(index + 1, total, stage);
        tracing::debug!(stage = ?stage, "Starting stage");

        match stage {
            Stage::Preflight => prepare_target(&plan.dir).await?,
            Stage::Templates => emit_all(&plan.dir, &plan.description).await?,
            Stage::Install => {
                install_with(
                    runner,
                    &plan.package_manager,
                    &plan.dir,
                    DependencyKind::Normal,
                    &plan.dependencies,
                )
                .await?
            }
            Stage::DevInstall => {
                install_with(
                    runner,
                    &plan.package_manager,
                    &plan.dir,
                    DependencyKind::Dev,
                    &plan.dev_dependencies,
                )
                .await?
            }
            Stage::Repository => {
                if let Some(message) = &plan.commit_message {
                    create_git(runner, &plan.dir, message).await?;
                }
            }
        }
    }

    tracing::info!(path = %plan.dir.display(), stages = total, "Scaffold complete");
    Ok(())
}

pub fn created_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|entry| {
            let name = entry.file_name();
            name != "node_modules" && name != ".git"
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.path().strip_prefix(dir).ok().map(Path::to_path_buf))
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn stages_follow_config() {
        let plan = ScaffoldPlan::from_config("app", &Config::default());
        assert_eq!(
            plan.stages(),
            vec![
                Stage::Preflight,
                Stage::Templates,
                Stage::Install,
                Stage::DevInstall,
                Stage::Repository,
            ]
        );

        let config = Config {
            install: false,
            git: false,
            ..Default::default()
        };
        let plan = ScaffoldPlan::from_config("app", &config);
        assert_eq!(plan.stages(), vec![Stage::Preflight, Stage::Templates]);
        assert!(plan.commit_message.is_none());
    }

    #[test]
    fn empty_dev_list_drops_its_stage() {
        let config = Config {
            dev_dependencies: Vec::new(),
            ..Default::default()
        };
        let plan = ScaffoldPlan::from_config("app", &config);
        assert!(!plan.stages().contains(&Stage::DevInstall));
        assert!(plan.stages().contains(&Stage::Install));
    }

    #[test]
    fn created_files_skips_tool_directories() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        std::fs::create_dir_all(root.join("node_modules/choo")).unwrap();
        std::fs::create_dir_all(root.join(".git/objects")).unwrap();
        std::fs::create_dir_all(root.join("views")).unwrap();
        std::fs::write(root.join("node_modules/choo/index.js"), "").unwrap();
        std::fs::write(root.join(".git/HEAD"), "").unwrap();
        std::fs::write(root.join("views/main.js"), "").unwrap();
        std::fs::write(root.join("index.js"), "").unwrap();

        let files = created_files(root);

        assert_eq!(
            files,
            vec![PathBuf::from("index.js"), PathBuf::from("views/main.js")]
        );
    }
}
