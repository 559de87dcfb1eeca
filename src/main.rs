use clap::Parser;
use zenodo_deposit::commands::{handle_deposit_commands, handle_inspect_commands};
use zenodo_deposit::logging::init_logging;
use zenodo_deposit::{default_settings_path, Cli, HostSettings};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.log_level.as_deref()) {
        eprintln!("warning: {}", e);
    }

    let settings = match cli.settings.clone().or_else(|| default_settings_path().ok()) {
        Some(path) => HostSettings::load(&path)?,
        None => HostSettings::from_env(),
    };

    if handle_inspect_commands(&cli, &settings)? {
        return Ok(());
    }
    if handle_deposit_commands(&cli, &settings)? {
        return Ok(());
    }

    Ok(())
}
