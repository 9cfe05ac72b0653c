use anyhow::{Context, Result};
use console::style;
use dialoguer::Input;
use std::path::PathBuf;
use webseed_core::scaffold::{self, ScaffoldPlan};
use webseed_core::templates::project_name;
use webseed_core::{Config, ScaffoldError, SystemRunner};

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Target directory; its last path segment becomes the project name
    pub dir: PathBuf,

    /// Short description for README.md and manifest.json
    #[arg(short, long)]
    pub description: Option<String>,

    /// Message for the initial commit
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Skip installing dependencies
    #[arg(long)]
    pub no_install: bool,

    /// Skip creating a git repository
    #[arg(long)]
    pub no_git: bool,

    /// Package manager executable to install with
    #[arg(long, value_name = "BIN")]
    pub package_manager: Option<String>,
}

fn print_step(step: usize, total: usize, title: &str) {
    println!();
    println!(
        "{}",
        style(format!("[{}/{}] {}", step, total, title))
            .cyan()
            .bold()
    );
}

fn prompt_description() -> Result<String> {
    if !console::user_attended() {
        return Ok(String::new());
    }

    Input::<String>::new()
        .with_prompt("Describe your project")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read description")
}

/// Command-line flags win over the config file.
pub fn build_plan(args: &NewArgs, config: &Config, description: String) -> ScaffoldPlan {
    let mut plan = ScaffoldPlan::from_config(args.dir.clone(), config).with_description(description);

    if let Some(program) = &args.package_manager {
        plan.package_manager = program.clone();
    }
    if args.no_install {
        plan.install = false;
    }
    if args.no_git {
        plan.commit_message = None;
    } else if let Some(message) = &args.message {
        plan.commit_message = Some(message.clone());
    }

    plan
}

fn report_failure(err: &ScaffoldError) {
    eprintln!();
    eprintln!("  {} {}", style("✗").red().bold(), err);

    if let ScaffoldError::CommandFailed { stderr, .. } = err
        && !stderr.is_empty()
    {
        for line in stderr.lines() {
            eprintln!("    {}", style(line).dim());
        }
    }
}

fn print_summary(plan: &ScaffoldPlan) {
    let name = project_name(&plan.dir);

    println!();
    println!(
        "  {} Created {} at {}",
        style("✓").green().bold(),
        style(&name).white().bold(),
        style(plan.dir.display()).cyan()
    );
    for file in scaffold::created_files(&plan.dir) {
        println!("  {} - {}", style("  ").dim(), file.display());
    }

    println!();
    println!("  {} Next steps:", style("→").green());
    println!("    cd {}", plan.dir.display());
    if !plan.install {
        println!("    {} install", plan.package_manager);
    }
    println!("    {} start", plan.package_manager);
    println!();
}

pub async fn run_new(args: NewArgs) -> Result<()> {
    let config = Config::load_or_init()?;

    let description = match &args.description {
        Some(description) => description.clone(),
        None => prompt_description()?,
    };

    let plan = build_plan(&args, &config, description);
    tracing::debug!(?plan, "Scaffold plan");

    if let Err(e) = scaffold::run(&plan, &SystemRunner, |step, total, stage| {
        print_step(step, total, stage.title())
    })
    .await
    {
        report_failure(&e);
        return Err(e).with_context(|| format!("Could not scaffold {}", plan.dir.display()));
    }

    print_summary(&plan);
    Ok(())
}
