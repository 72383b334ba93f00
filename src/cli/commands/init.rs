use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command: write the default configuration file.
///
/// An existing file is left alone so user edits survive a second `init`.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::resolve_file(cli.config.as_deref());

    if path.exists() {
        warning(format!(
            "Configuration file already exists: {}",
            path.display()
        ));
        return Ok(());
    }

    info("Initializing rTimeRecorder…");
    Config::default().save_to(&path)?;
    success(format!("Config file: {}", path.display()));

    Ok(())
}
