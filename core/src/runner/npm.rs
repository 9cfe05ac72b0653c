use super::{CommandRunner, CommandSpec};
use crate::error::Result;
use std::path::Path;

pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Normal,
    Dev,
}

impl DependencyKind {
    fn save_flag(self) -> &'static str {
        match self {
            Self::Normal => "--save",
            Self::Dev => "--save-dev",
        }
    }
}

/// The whole package list goes into a single invocation.
pub fn install_command(program: &str, kind: DependencyKind, packages: &[String]) -> CommandSpec {
    CommandSpec::new(program)
        .args(["install", kind.save_flag(), "--loglevel", "error"])
        .args(packages.iter().cloned())
}

pub async fn install_with(
    runner: &dyn CommandRunner,
    program: &str,
    dir: &Path,
    kind: DependencyKind,
    packages: &[String],
) -> Result<()> {
    if packages.is_empty() {
        tracing::debug!(?kind, "No packages to install");
        return Ok(());
    }

    let command = install_command(program, kind, packages);
    runner.run(&command, dir).await?;

    tracing::info!(?kind, count = packages.len(), "Packages installed");
    Ok(())
}

pub async fn install(runner: &dyn CommandRunner, dir: &Path, packages: &[String]) -> Result<()> {
    install_with(
        runner,
        DEFAULT_PACKAGE_MANAGER,
        dir,
        DependencyKind::Normal,
        packages,
    )
    .await
}

pub async fn dev_install(
    runner: &dyn CommandRunner,
    dir: &Path,
    packages: &[String],
) -> Result<()> {
    install_with(
        runner,
        DEFAULT_PACKAGE_MANAGER,
        dir,
        DependencyKind::Dev,
        packages,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::tests::RecordingRunner;

    fn packages(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn installs_all_packages_in_one_command() {
        let runner = RecordingRunner::default();

        install(&runner, Path::new("app"), &packages(&["a", "b"]))
            .await
            .unwrap();

        assert_eq!(
            runner.calls(),
            vec!["npm install --save --loglevel error a b"]
        );
    }

    #[tokio::test]
    async fn dev_install_uses_save_dev() {
        let runner = RecordingRunner::default();

        dev_install(&runner, Path::new("app"), &packages(&["standard"]))
            .await
            .unwrap();

        assert_eq!(
            runner.calls(),
            vec!["npm install --save-dev --loglevel error standard"]
        );
    }

    #[tokio::test]
    async fn failure_names_the_exact_command() {
        let runner = RecordingRunner::failing_on("npm");

        let err = install(&runner, Path::new("app"), &packages(&["a", "b"]))
            .await
            .unwrap_err();

        assert!(
            err.to_string()
                .contains("npm install --save --loglevel error a b")
        );
    }

    #[tokio::test]
    async fn empty_list_runs_nothing() {
        let runner = RecordingRunner::default();

        install(&runner, Path::new("app"), &[]).await.unwrap();

        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn custom_program_is_used() {
        let runner = RecordingRunner::default();

        install_with(
            &runner,
            "/opt/node/bin/npm",
            Path::new("app"),
            DependencyKind::Normal,
            &packages(&["choo"]),
        )
        .await
        .unwrap();

        assert_eq!(
            runner.calls(),
            vec!["/opt/node/bin/npm install --save --loglevel error choo"]
        );
    }
}
