use crate::domain::model::DEFAULT_ADMIN_EMAIL;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::{Args, Parser};
use std::fmt;

pub const DEFAULT_API_ENDPOINT: &str = "https://secure-api.com/get-data";
pub const DEFAULT_MAIL_PROGRAM: &str = "mail";

#[derive(Debug, Clone, Parser)]
#[command(name = "intake-relay")]
#[command(about = "Ask for a name, store a remote payload, and notify the admin")]
pub struct CliConfig {
    /// Endpoint the payload is fetched from
    #[arg(long, default_value = DEFAULT_API_ENDPOINT, hide = true)]
    pub api_endpoint: String,

    /// Recipient of the admin notice
    #[arg(long, default_value = DEFAULT_ADMIN_EMAIL)]
    pub admin_email: String,

    /// Mail-sending program, invoked as `<program> -s <subject> <to>`
    #[arg(long, default_value = DEFAULT_MAIL_PROGRAM)]
    pub mail_program: String,

    /// Legacy behaviour: build the unescaped `echo ... | mail ...` line and
    /// run it through `sh -c`
    #[arg(long)]
    pub mail_via_shell: bool,

    #[command(flatten)]
    pub db: DbConfig,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

/// Database settings. Anything left unset falls through to the client
/// library defaults.
#[derive(Clone, Default, Args)]
pub struct DbConfig {
    #[arg(long = "db-host", env = "DB_HOST")]
    pub host: Option<String>,

    #[arg(long = "db-port", env = "DB_PORT")]
    pub port: Option<u16>,

    #[arg(long = "db-user", env = "DB_USER")]
    pub user: Option<String>,

    #[arg(long = "db-password", env = "DB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[arg(long = "db-name", env = "DB_NAME")]
    pub database: Option<String>,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .finish()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("admin_email", &self.admin_email)?;
        validate_non_empty_string("mail_program", &self.mail_program)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::try_parse_from(["intake-relay"]).unwrap();
        assert_eq!(config.api_endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(config.admin_email, "admin@example.com");
        assert_eq!(config.mail_program, "mail");
        assert!(!config.mail_via_shell);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_db_flags() {
        let config = CliConfig::try_parse_from([
            "intake-relay",
            "--db-host",
            "db.internal",
            "--db-port",
            "3307",
            "--db-user",
            "relay",
            "--db-password",
            "hunter2",
            "--db-name",
            "intake",
        ])
        .unwrap();

        assert_eq!(config.db.host.as_deref(), Some("db.internal"));
        assert_eq!(config.db.port, Some(3307));
        assert_eq!(config.db.user.as_deref(), Some("relay"));
        assert_eq!(config.db.database.as_deref(), Some("intake"));

        let rendered = format!("{:?}", config.db);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_shell_flag_help_names_legacy_mode() {
        use clap::CommandFactory;

        let help = CliConfig::command().render_long_help().to_string();
        assert!(help.contains("--mail-via-shell"));
        assert!(help.contains("Legacy behaviour"));
        assert!(help.contains("unescaped"));
    }

    #[test]
    fn test_blank_mail_settings_rejected() {
        let config =
            CliConfig::try_parse_from(["intake-relay", "--admin-email", " "]).unwrap();
        assert!(config.validate().is_err());

        let config = CliConfig::try_parse_from(["intake-relay", "--mail-program", ""]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_db_port_is_usage_error() {
        let err = CliConfig::try_parse_from(["intake-relay", "--db-port", "not-a-port"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_bad_endpoint_rejected() {
        let config =
            CliConfig::try_parse_from(["intake-relay", "--api-endpoint", "ftp://nope"]).unwrap();
        assert!(config.validate().is_err());
    }
}
