mod render;
mod session;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use wikichat_client::config::Timeouts;
use wikichat_client::{ClientConfig, ConfigError, HttpBackend, Outcome, PageController};

use render::RenderOptions;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "wikichat", about = "Crawl a web page and ask questions about it")]
struct Cli {
    /// Backend base URL; overrides WIKICHAT_BACKEND_URL.
    #[arg(long)]
    backend_url: Option<String>,

    /// Whole-request timeout; overrides WIKICHAT_REQUEST_TIMEOUT_SECS.
    #[arg(long)]
    request_timeout_secs: Option<u64>,

    /// Connect timeout; overrides WIKICHAT_CONNECT_TIMEOUT_SECS.
    #[arg(long)]
    connect_timeout_secs: Option<u64>,

    /// Print the full crawled markdown instead of a preview.
    #[arg(long, global = true, default_value_t = false)]
    show_markdown: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl a URL and show the page.
    Crawl { url: String },
    /// Crawl a URL, then ask a question about it.
    Ask { url: String, question: String },
    /// Interactive page driven from stdin. Exits non-zero when the last
    /// crawl or question that actually ran failed.
    Session,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e @ CliError::Config(_)) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_config(cli: &Cli) -> Result<ClientConfig, ConfigError> {
    apply_overrides(ClientConfig::from_env()?, cli)
}

/// Layer command-line flags over the environment-derived config.
fn apply_overrides(mut config: ClientConfig, cli: &Cli) -> Result<ClientConfig, ConfigError> {
    if let Some(url) = &cli.backend_url {
        config = config.with_backend_url(url)?;
    }
    let timeouts = Timeouts::validated(
        cli.request_timeout_secs.or(config.timeouts.request_secs),
        cli.connect_timeout_secs.or(config.timeouts.connect_secs),
    )?;
    Ok(config.with_timeouts(timeouts))
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let config = build_config(&cli)?;
    let backend = HttpBackend::new(&config)?;
    tracing::debug!(backend = %backend.base_url(), "backend configured");

    let controller = PageController::new(backend);
    let options = RenderOptions { full_markdown: cli.show_markdown };
    let mut stdout = std::io::stdout();

    let outcomes = match cli.command {
        Command::Crawl { url } => {
            controller.set_url(&url);
            vec![controller.crawl().await]
        }
        Command::Ask { url, question } => {
            controller.set_url(&url);
            let crawled = controller.crawl().await;
            if crawled.is_success() {
                controller.set_chat_query(&question);
                vec![crawled, controller.chat().await]
            } else {
                vec![crawled]
            }
        }
        Command::Session => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let last = session::run(&controller, stdin, &mut stdout, options).await?;
            return Ok(session_exit_code(last.as_ref()));
        }
    };

    render::write_page(&mut stdout, &controller.view(), options)?;
    if outcomes.contains(&Outcome::Ignored) {
        eprintln!("nothing to do: the URL or question was empty");
    }
    Ok(if outcomes.iter().all(Outcome::is_success) { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn session_exit_code(last: Option<&Outcome>) -> ExitCode {
    match last {
        Some(Outcome::Failed(_)) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}
