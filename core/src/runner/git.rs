use super::{CommandRunner, CommandSpec, run_steps};
use crate::error::Result;
use std::path::Path;

pub const DEFAULT_COMMIT_MESSAGE: &str = "initial commit";

pub fn init_steps(message: &str) -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("git").arg("init"),
        CommandSpec::new("git").args(["add", "-A"]),
        // Fails when no committer identity is configured, before commit does.
        CommandSpec::new("git").args(["config", "user.email"]),
        CommandSpec::new("git").args(["commit", "-m", message]),
    ]
}

pub async fn create_git(runner: &dyn CommandRunner, dir: &Path, message: &str) -> Result<()> {
    run_steps(runner, dir, &init_steps(message)).await?;
    tracing::info!(path = %dir.display(), "Repository initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaffoldError;
    use crate::runner::tests::RecordingRunner;

    #[tokio::test]
    async fn runs_four_commands_in_order() {
        let runner = RecordingRunner::default();

        create_git(&runner, Path::new("app"), "initial commit")
            .await
            .unwrap();

        assert_eq!(
            runner.calls(),
            vec![
                "git init",
                "git add -A",
                "git config user.email",
                r#"git commit -m "initial commit""#,
            ]
        );
    }

    #[tokio::test]
    async fn identity_failure_skips_commit() {
        let runner = RecordingRunner::failing_on("git config");

        let err = create_git(&runner, Path::new("app"), "first")
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::CommandFailed { .. }));
        assert_eq!(err.command(), Some("git config user.email"));
        assert_eq!(runner.calls().len(), 3);
        assert!(!runner.calls().iter().any(|c| c.starts_with("git commit")));
    }

    #[tokio::test]
    async fn init_failure_stops_immediately() {
        let runner = RecordingRunner::failing_on("git init");

        let err = create_git(&runner, Path::new("app"), "first")
            .await
            .unwrap_err();

        assert_eq!(err.command(), Some("git init"));
        assert_eq!(runner.calls(), vec!["git init"]);
    }
}
