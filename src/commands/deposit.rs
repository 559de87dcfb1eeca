use crate::*;
use std::io::Read;
use std::path::Path;

fn connect(
    cli: &Cli,
    settings: &HostSettings,
) -> anyhow::Result<RepositoryClient<BlockingTransport>> {
    let environment = Environment::from_production_flag(cli.production);
    let client = RepositoryClient::initialize(
        settings,
        environment,
        BlockingTransport::new(cli.timeout_ms)?,
    )?;
    Ok(client.with_error_summary(cli.error_summary))
}

fn read_metadata(path: &Path) -> anyhow::Result<DepositionMetadata> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    match serde_json::from_str::<serde_json::Value>(&raw)? {
        serde_json::Value::Object(map) => Ok(map),
        _ => anyhow::bail!("metadata must be a JSON object: {}", path.display()),
    }
}

fn describe(d: &Deposition) -> String {
    match d.id {
        Some(id) => format!("ok id={}", id),
        None => "ok".to_string(),
    }
}

pub fn handle_deposit_commands(cli: &Cli, settings: &HostSettings) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Create { metadata } => {
            let metadata = read_metadata(metadata)?;
            let client = connect(cli, settings)?;
            let deposition = client.create_deposition(&metadata)?;
            print_one(cli.json, deposition, describe)?;
        }
        Commands::Upload { deposition, file } => {
            let client = connect(cli, settings)?;
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .ok_or_else(|| anyhow::anyhow!("not a file path: {}", file.display()))?;
            let bytes = std::fs::read(file)?;
            let uploaded = client.upload_file(*deposition, &file_name, bytes)?;
            print_one(cli.json, uploaded, describe)?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}
