use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use movielog::{
    cli::App,
    config::{AppConfig, CliConfig, FileConfig},
    lookup::{omdb::OmdbClient, MetadataLookup},
    persist::sqlite::SqliteRecordStore,
    session::handle::Session,
};

fn parse_path(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().map_err(|e| format!("Failed to get current dir: {}", e))?;
    Ok(cwd.join(path))
}

#[derive(Parser, Debug)]
#[command(version, about = "Personal movie catalog")]
struct CliArgs {
    /// Path to TOML configuration file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// SQLite database holding the movie table.
    #[clap(long, env = "MOVIELOG_DB", value_parser = parse_path)]
    pub db: Option<PathBuf>,

    /// OMDb API key. Without one, movies can only be added manually.
    #[clap(long, env = "OMDB_API_KEY")]
    pub api_key: Option<String>,

    /// OMDb endpoint override.
    #[clap(long)]
    pub omdb_endpoint: Option<String>,

    /// HTML template used by website generation.
    #[clap(long, value_parser = parse_path)]
    pub template: Option<PathBuf>,

    /// Where the generated page is written.
    #[clap(long, value_parser = parse_path)]
    pub output: Option<PathBuf>,

    /// Default log directive when RUST_LOG is unset.
    #[clap(long, default_value = "warn")]
    pub log_level: String,
}

fn init_tracing(default_directive: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    init_tracing(&cli_args.log_level);

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let cli_config = CliConfig {
        db_path: cli_args.db,
        api_key: cli_args.api_key,
        omdb_endpoint: cli_args.omdb_endpoint,
        template_path: cli_args.template,
        output_path: cli_args.output,
    };
    let config = AppConfig::resolve(&cli_config, file_config);
    info!("Using database {}", config.db_path.display());

    let store = SqliteRecordStore::open(&config.db_path)
        .with_context(|| format!("Could not open database {}", config.db_path.display()))?;
    let session = Session::open(Box::new(store)).context("Could not load movies")?;

    let lookup: Option<Box<dyn MetadataLookup>> = match &config.lookup {
        Some(settings) => Some(Box::new(
            OmdbClient::new(&settings.endpoint, &settings.api_key, settings.timeout)
                .context("Could not build OMDb client")?,
        )),
        None => None,
    };

    let stdin = io::stdin();
    let mut app = App::new(session, lookup, config.site, stdin.lock(), io::stdout());
    app.run()
}
