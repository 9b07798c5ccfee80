use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};
use tweetdump::{App, Config};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, value_name = "config.toml")]
    config_path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Save a user's recent tweets to `<output_dir>/<username>.json`
    Fetch {
        /// Twitter username, overrides the config file.
        #[arg(short, long)]
        username: Option<String>,
        /// Maximum number of tweets to request.
        #[arg(short, long)]
        max_results: Option<u32>,
        /// Tweet fields, it's a comma separated string.
        #[arg(short, long, value_delimiter = ',')]
        tweet_fields: Option<Vec<String>>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(&cli.config_path).await?;
    match cli.command {
        Command::Fetch {
            username,
            max_results,
            tweet_fields,
        } => {
            config.override_fetch(username, max_results, tweet_fields);
            App::new(config)?.fetch().await?;
        }
    }
    Ok(())
}
