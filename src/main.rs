use clap::Parser;
use intake_relay::utils::{logger, validation::Validate};
use intake_relay::{
    CliConfig, CommandMailer, HttpFetcher, MailMode, MySqlStore, Orchestrator, TerminalPrompt,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose, config.log_json);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mode = if config.mail_via_shell {
        tracing::warn!("Mail command runs through the shell; input is not escaped");
        MailMode::Shell
    } else {
        MailMode::Direct
    };

    let mailer = CommandMailer::new(config.mail_program.clone(), mode);
    let orchestrator = Orchestrator::new(
        TerminalPrompt::new(),
        HttpFetcher::new(config.api_endpoint.clone()),
        MySqlStore::new(&config.db),
        mailer,
        config.admin_email.clone(),
    );

    // Failures are logged inside; the exit code stays 0.
    if let Some(tasks) = orchestrator.execute().await {
        tracing::debug!("Waiting for {} background tasks", tasks.len());
        tasks.join().await;
    }

    Ok(())
}
