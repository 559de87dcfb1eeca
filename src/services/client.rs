use crate::domain::constants::{
    DEPOSITION_ID_PLACEHOLDER, PATH_DEPOSITIONS_CREATE, PATH_DEPOSITIONS_FILES_UPLOAD, STATUS_OK,
};
use crate::domain::models::{
    ClientConfig, Deposition, DepositionMetadata, Environment, ErrorSummary, RemoteResult,
};
use crate::error::ClientError;
use crate::services::settings::SettingsSource;
use crate::services::transport::HttpTransport;
use log::{debug, info, warn};

/// Client for the repository's deposition API.
///
/// The config is fixed at construction. Every operation is a single blocking
/// request through the injected transport.
pub struct RepositoryClient<T: HttpTransport> {
    config: ClientConfig,
    transport: T,
    summary: ErrorSummary,
}

/// Reads the token for `environment` without checking it.
pub fn resolve_config(settings: &dyn SettingsSource, environment: Environment) -> ClientConfig {
    if environment == Environment::Production {
        info!("event=environment_select environment=production");
    } else {
        debug!("event=environment_select environment=sandbox");
    }
    ClientConfig::new(environment, settings.app_value(environment.token_key()))
}

impl<T: HttpTransport> RepositoryClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            summary: ErrorSummary::default(),
        }
    }

    /// Resolves the token for `environment`; fails when it is empty.
    pub fn initialize(
        settings: &dyn SettingsSource,
        environment: Environment,
        transport: T,
    ) -> Result<Self, ClientError> {
        let config = resolve_config(settings, environment);
        if !config.is_configured() {
            warn!("event=client_init status=token_missing environment={}", environment);
            return Err(ClientError::TokenMissing { environment });
        }
        Ok(Self::new(config, transport))
    }

    pub fn with_error_summary(mut self, summary: ErrorSummary) -> Self {
        self.summary = summary;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn generate_url(&self, path: &str) -> Option<String> {
        if !self.is_configured() {
            return None;
        }
        Some(format!(
            "{}{}access_token={}",
            self.config.environment().domain(),
            path,
            self.config.token()
        ))
    }

    pub fn deposition_url(&self) -> Option<String> {
        self.generate_url(PATH_DEPOSITIONS_CREATE)
    }

    pub fn files_url(&self, deposition_id: u64) -> Option<String> {
        let path = PATH_DEPOSITIONS_FILES_UPLOAD
            .replace(DEPOSITION_ID_PLACEHOLDER, &deposition_id.to_string());
        self.generate_url(&path)
    }

    pub fn create_deposition(
        &self,
        metadata: &DepositionMetadata,
    ) -> Result<Deposition, ClientError> {
        let url = self.deposition_url().ok_or(ClientError::Unconfigured)?;
        let json = serde_json::to_string(metadata)?;
        let result = self.transport.post_json(&url, &json)?;

        debug!("event=create_deposition metadata={}", json);
        debug!(
            "event=create_deposition result={}",
            result
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "null".to_string())
        );

        self.interpret(result)
    }

    pub fn upload_file(
        &self,
        deposition_id: u64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Deposition, ClientError> {
        let url = self.files_url(deposition_id).ok_or(ClientError::Unconfigured)?;
        let result = self.transport.post_file(&url, file_name, bytes)?;
        debug!(
            "event=upload_file deposition={} file={} result_present={}",
            deposition_id,
            file_name,
            result.is_some()
        );
        self.interpret(result)
    }

    fn interpret(&self, body: Option<serde_json::Value>) -> Result<Deposition, ClientError> {
        let body = body.ok_or_else(|| {
            ClientError::InvalidResponse("response body is not valid JSON".to_string())
        })?;
        let result: RemoteResult = serde_json::from_value(body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        if result.status == STATUS_OK {
            return Ok(result.into());
        }

        let message = self.summary.summarize(&result.errors);
        warn!(
            "event=remote_rejected status={} errors={}",
            result.status,
            result.errors.len()
        );
        Err(ClientError::RemoteRejected {
            code: result.status,
            message,
            errors: result.errors,
        })
    }
}
