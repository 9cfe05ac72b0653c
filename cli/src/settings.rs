use anyhow::{Context, Result};
use console::style;
use webseed_core::config::{self, Config};

pub fn handle_command(init: bool) -> Result<()> {
    let config_path = config::get_config_path();

    if init {
        if config::config_exists() {
            println!(
                "{} Config already exists at {}",
                style("!").yellow(),
                style(config_path.display()).cyan()
            );
        } else {
            config::save_config(&Config::default())?;
            println!(
                "{} Config written to {}",
                style("✓").green().bold(),
                style(config_path.display()).cyan()
            );
        }
        println!();
    }

    let config = Config::load_or_init()?;
    let source = if config::config_exists() {
        style(config_path.display().to_string()).cyan()
    } else {
        style("built-in defaults".to_string()).dim()
    };
    println!("{} Using {}", style("→").cyan(), source);
    println!();

    let rendered =
        toml::to_string_pretty(&config).with_context(|| "Failed to serialize config to TOML")?;
    print!("{}", rendered);

    Ok(())
}
