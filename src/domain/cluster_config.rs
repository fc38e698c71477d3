//! Cluster parameters read from the process environment and an optional `.env` file.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{AppError, AuthMethod, ReplicaIndex};

/// Env file read from the current directory when none is named explicitly.
pub const DEFAULT_ENV_FILE: &str = ".env";

pub const DEFAULT_PG_HBA_AUTH_METHOD: AuthMethod = AuthMethod::ScramSha256;
pub const DEFAULT_LOCAL_AUTH_METHOD: AuthMethod = AuthMethod::Trust;
pub const DEFAULT_REPLICATION_COUNT: u32 = 2;
pub const DEFAULT_PRIMARY_HOST: &str = "postgres-master";

pub const POSTGRES_USER: &str = "POSTGRES_USER";
pub const POSTGRES_PASSWORD: &str = "POSTGRES_PASSWORD";
pub const POSTGRES_DB: &str = "POSTGRES_DB";
pub const REPLICATION_USER: &str = "REPLICATION_USER";
pub const REPLICATION_PASSWORD: &str = "REPLICATION_PASSWORD";
pub const PG_HBA_AUTH_METHOD: &str = "PG_HBA_AUTH_METHOD";
pub const LOCAL_AUTH_METHOD: &str = "LOCAL_AUTH_METHOD";
pub const REPLICATION_COUNT: &str = "REPLICATION_COUNT";
pub const PRIMARY_HOST: &str = "PRIMARY_HOST";

/// Every variable the generator reads.
pub const ENV_VARS: [&str; 9] = [
    POSTGRES_USER,
    POSTGRES_PASSWORD,
    POSTGRES_DB,
    REPLICATION_USER,
    REPLICATION_PASSWORD,
    PG_HBA_AUTH_METHOD,
    LOCAL_AUTH_METHOD,
    REPLICATION_COUNT,
    PRIMARY_HOST,
];

/// Immutable parameter set for one generator run.
#[derive(Clone, PartialEq, Eq)]
pub struct ClusterConfig {
    pub postgres_user: Option<String>,
    pub postgres_password: Option<String>,
    pub postgres_db: Option<String>,
    pub replication_user: String,
    pub replication_password: String,
    pub pg_hba_auth_method: AuthMethod,
    pub local_auth_method: AuthMethod,
    pub replication_count: u32,
    pub primary_host: String,
}

impl ClusterConfig {
    /// Load from the process environment, falling back to `env_file` (or `./.env`) for unset keys.
    pub fn load(env_file: Option<&Path>) -> Result<Self, AppError> {
        let file_vars = read_env_file(env_file)?;
        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| file_vars.get(key).cloned()))
    }

    /// Build from an arbitrary key lookup.
    ///
    /// Missing replication credentials become empty strings so generation still completes;
    /// use [`ClusterConfig::check_credentials`] to reject them.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let replication_user = required(&lookup, REPLICATION_USER);
        let replication_password = required(&lookup, REPLICATION_PASSWORD);

        let pg_hba_auth_method = match non_empty(PG_HBA_AUTH_METHOD) {
            Some(value) => parse_auth_method(PG_HBA_AUTH_METHOD, value)?,
            None => DEFAULT_PG_HBA_AUTH_METHOD,
        };
        let local_auth_method = match non_empty(LOCAL_AUTH_METHOD) {
            Some(value) => parse_auth_method(LOCAL_AUTH_METHOD, value)?,
            None => DEFAULT_LOCAL_AUTH_METHOD,
        };
        let replication_count = match non_empty(REPLICATION_COUNT) {
            Some(value) => parse_count(value)?,
            None => DEFAULT_REPLICATION_COUNT,
        };

        Ok(Self {
            postgres_user: lookup(POSTGRES_USER),
            postgres_password: lookup(POSTGRES_PASSWORD),
            postgres_db: lookup(POSTGRES_DB),
            replication_user,
            replication_password,
            pg_hba_auth_method,
            local_auth_method,
            replication_count,
            primary_host: non_empty(PRIMARY_HOST).unwrap_or_else(|| DEFAULT_PRIMARY_HOST.to_string()),
        })
    }

    /// Replicas to generate, in ascending order.
    pub fn replicas(&self) -> impl Iterator<Item = ReplicaIndex> {
        ReplicaIndex::up_to(self.replication_count)
    }

    /// Reject credentials that would break the generated SQL or conninfo syntax.
    ///
    /// Generated files embed credentials verbatim, so a quote in the password ends the
    /// SQL string literal and whitespace splits the conninfo keyword list.
    pub fn check_credentials(&self) -> Result<(), AppError> {
        if self.replication_user.is_empty() {
            return Err(AppError::UnsafeCredential(format!("{} is not set", REPLICATION_USER)));
        }
        if self.replication_password.is_empty() {
            return Err(AppError::UnsafeCredential(format!("{} is not set", REPLICATION_PASSWORD)));
        }
        if !is_plain_identifier(&self.replication_user) {
            return Err(AppError::UnsafeCredential(format!(
                "{} '{}' must start with a letter or underscore and contain only letters, digits, or underscores",
                REPLICATION_USER, self.replication_user
            )));
        }
        if let Some(c) =
            self.replication_password.chars().find(|c| *c == '\'' || *c == '\\' || c.is_whitespace())
        {
            return Err(AppError::UnsafeCredential(format!(
                "{} contains {:?}, which cannot be embedded without escaping",
                REPLICATION_PASSWORD, c
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for ClusterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterConfig")
            .field("postgres_user", &self.postgres_user)
            .field("postgres_password", &self.postgres_password.as_ref().map(|_| "<redacted>"))
            .field("postgres_db", &self.postgres_db)
            .field("replication_user", &self.replication_user)
            .field("replication_password", &"<redacted>")
            .field("pg_hba_auth_method", &self.pg_hba_auth_method)
            .field("local_auth_method", &self.local_auth_method)
            .field("replication_count", &self.replication_count)
            .field("primary_host", &self.primary_host)
            .finish()
    }
}

fn required<F>(lookup: &F, key: &'static str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_default();
    if value.is_empty() {
        warn!("{} is not set; generated files will contain an empty value", key);
    }
    value
}

fn parse_auth_method(name: &'static str, value: String) -> Result<AuthMethod, AppError> {
    AuthMethod::from_name(&value).ok_or_else(|| AppError::InvalidVariable {
        name,
        reason: format!("expected one of {}", AuthMethod::accepted_names()),
        value,
    })
}

fn parse_count(value: String) -> Result<u32, AppError> {
    value.trim().parse().map_err(|_| AppError::InvalidVariable {
        name: REPLICATION_COUNT,
        reason: "expected a non-negative integer".into(),
        value,
    })
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn read_env_file(env_file: Option<&Path>) -> Result<HashMap<String, String>, AppError> {
    match env_file {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::EnvFileNotFound(path.to_path_buf()));
            }
            parse_env_file(path)
        }
        None => {
            let path = PathBuf::from(DEFAULT_ENV_FILE);
            if path.exists() { parse_env_file(&path) } else { Ok(HashMap::new()) }
        }
    }
}

/// Parse `KEY=value` lines without touching the process environment.
pub fn parse_env_file(path: &Path) -> Result<HashMap<String, String>, AppError> {
    let to_error = |source| AppError::EnvFile { path: path.to_path_buf(), source };

    let vars = dotenv::from_path_iter(path)
        .map_err(to_error)?
        .collect::<Result<HashMap<_, _>, _>>()
        .map_err(to_error)?;

    debug!("Loaded {} variable(s) from {}", vars.len(), path.display());
    Ok(vars)
}
