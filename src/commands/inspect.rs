use crate::*;

pub fn handle_inspect_commands(cli: &Cli, settings: &HostSettings) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Status => {
            let environment = Environment::from_production_flag(cli.production);
            let config = resolve_config(settings, environment);
            let report = StatusReport {
                environment,
                configured: config.is_configured(),
                token_key: environment.token_key().to_string(),
            };
            print_one(cli.json, report, |r| {
                format!(
                    "environment={} configured={} token_key={}",
                    r.environment, r.configured, r.token_key
                )
            })?;
        }
        Commands::Url { deposition } => {
            let environment = Environment::from_production_flag(cli.production);
            let client = RepositoryClient::new(
                resolve_config(settings, environment),
                BlockingTransport::new(cli.timeout_ms)?,
            );
            let url = match deposition {
                Some(id) => client.files_url(*id),
                None => client.deposition_url(),
            }
            .ok_or(ClientError::Unconfigured)?;
            print_one(cli.json, url, |u| u.to_string())?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}
