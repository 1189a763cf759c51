use anyhow::Context;
use clap::{Parser, Subcommand};
use project_util::protocol::{self, Request, Response};
use project_util::util;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILTER: &str = "project_util=warn";

#[derive(Parser)]
#[command(name = "project_util")]
#[command(about = "Small numeric and message utilities")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Double an integer
    Double {
        /// Value to double
        #[arg(allow_negative_numbers = true)]
        value: i64,

        /// Print the result as a JSON response
        #[arg(long)]
        json: bool,
    },
    /// Format "<NAME> has <COUNT> items"
    Message {
        /// Name to put in the message
        name: String,

        /// Number of items
        #[arg(allow_negative_numbers = true)]
        count: i64,

        /// Print the result as a JSON response
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    fn to_request(&self) -> Request {
        match self {
            Commands::Double { value, .. } => Request::Double { value: *value },
            Commands::Message { name, count, .. } => Request::FormatMessage {
                name: name.clone(),
                count: *count,
            },
        }
    }

    fn json(&self) -> bool {
        match self {
            Commands::Double { json, .. } | Commands::Message { json, .. } => *json,
        }
    }
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // 結果は stdout、ログは stderr
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let request = cli.command.to_request();
    info!("Running {}: {:?}", request.method(), request);

    if cli.command.json() {
        return print_json(&protocol::handle(&request));
    }

    match request {
        Request::Double { value } => {
            println!("{}", util::double(value)?);
        }
        Request::FormatMessage { name, count } => {
            println!("{}", util::format_message(&name, count));
        }
    }

    Ok(())
}

fn print_json(response: &Response) -> Result<(), anyhow::Error> {
    let output = serde_json::to_string_pretty(response).context("Failed to serialize response")?;
    println!("{output}");

    if let Some(error) = &response.error {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }

    Ok(())
}
