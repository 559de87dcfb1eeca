pub const DOMAIN_SANDBOX: &str = "https://sandbox.zenodo.org/";
pub const DOMAIN_PRODUCTION: &str = "https://zenodo.org/";

pub const PATH_DEPOSITIONS_CREATE: &str = "api/deposit/depositions?";
pub const PATH_DEPOSITIONS_FILES_UPLOAD: &str = "api/deposit/depositions/%ID%/files?";
pub const DEPOSITION_ID_PLACEHOLDER: &str = "%ID%";

pub const SETTING_TOKEN_PRODUCTION: &str = "ZENODO_TOKEN_PRODUCTION";
pub const SETTING_TOKEN_SANDBOX: &str = "ZENODO_TOKEN_SANDBOX";

pub const STATUS_OK: i64 = 200;

pub const CODE_TOKEN_MISSING: i64 = 1;
pub const CODE_UNCONFIGURED: i64 = 2;
pub const CODE_INVALID_RESPONSE: i64 = 3;
pub const CODE_TRANSPORT: i64 = 4;
pub const CODE_ENCODE: i64 = 5;

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
