//! ytgate server entry point.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ytgate_axum::{ServerConfig, start_server};

#[derive(Debug, Parser)]
#[command(name = "ytgate", about = "HTTP gateway around yt-dlp", version)]
struct Cli {
    /// Port for the HTTP server.
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Directory for transient download files (default: system temp).
    #[arg(long)]
    scratch_dir: Option<PathBuf>,

    /// Directory with the browser client assets (default: ./web if present).
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Path or name of the yt-dlp binary.
    #[arg(long, default_value = "yt-dlp")]
    ytdlp: PathBuf,

    /// Path or name of the ffmpeg binary.
    #[arg(long, default_value = "ffmpeg")]
    ffmpeg: PathBuf,

    /// Allowed CORS origins (repeatable; default allows all).
    #[arg(long = "allow-origin")]
    allow_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = ServerConfig::with_defaults()
        .with_port(cli.port);
    config.ytdlp_path = cli.ytdlp;
    config.ffmpeg_path = cli.ffmpeg;

    if let Some(scratch) = cli.scratch_dir {
        config = config.with_scratch_dir(scratch);
    }
    if !cli.allow_origins.is_empty() {
        config = config.with_allowed_origins(cli.allow_origins);
    }

    // Serve the bundled client when present, unless overridden
    let static_dir = cli.static_dir.or_else(|| {
        let web = PathBuf::from("web");
        web.is_dir().then_some(web)
    });
    if let Some(dir) = static_dir {
        config = config.with_static_dir(dir);
    }

    start_server(config).await
}
