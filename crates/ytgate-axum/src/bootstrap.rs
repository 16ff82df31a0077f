//! Server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together for
//! the web adapter: the yt-dlp fetcher, the ffmpeg probe, and the scratch
//! directory are all instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use ytgate_core::{MediaFetcher, ToolProbe};
use ytgate_runtime::{FfmpegProbe, ScratchDir, YtDlpFetcher};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path or name of the yt-dlp binary.
    pub ytdlp_path: PathBuf,
    /// Path or name of the ffmpeg binary.
    pub ffmpeg_path: PathBuf,
    /// Directory for transient per-request output files.
    pub scratch_dir: PathBuf,
    /// Optional path to static assets for the browser client.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default paths: binaries from `$PATH`, scratch under
    /// the system temp directory.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            port: 3000,
            ytdlp_path: PathBuf::from("yt-dlp"),
            ffmpeg_path: PathBuf::from("ffmpeg"),
            scratch_dir: std::env::temp_dir().join("ytgate"),
            static_dir: None,
            cors: CorsConfig::default(),
        }
    }

    /// Set the HTTP port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the scratch directory for per-request temp files.
    #[must_use]
    pub fn with_scratch_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.scratch_dir = path.into();
        self
    }

    /// Set the static directory for serving the browser client.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds all initialized services needed by API handlers. Tests construct it
/// directly with stub ports; production goes through [`bootstrap`].
pub struct AxumContext {
    /// Media fetcher port (yt-dlp in production).
    pub fetcher: Arc<dyn MediaFetcher>,
    /// Collaborator tool probe for health reporting.
    pub probe: Arc<dyn ToolProbe>,
    /// Scratch directory for per-request output files.
    pub scratch: ScratchDir,
}

/// Bootstrap the web adapter with all services.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "ytgate.paths",
        ytdlp = %config.ytdlp_path.display(),
        ffmpeg = %config.ffmpeg_path.display(),
        scratch_dir = %config.scratch_dir.display(),
        static_dir = ?config.static_dir,
        "bootstrap resolved paths"
    );

    let scratch = ScratchDir::new(&config.scratch_dir)?;
    let fetcher: Arc<dyn MediaFetcher> = Arc::new(YtDlpFetcher::new(&config.ytdlp_path));
    let probe: Arc<dyn ToolProbe> = Arc::new(FfmpegProbe::new(&config.ffmpeg_path));

    Ok(AxumContext {
        fetcher,
        probe,
        scratch,
    })
}

/// Start the web server on the configured port.
///
/// If `config.static_dir` is set, serves the browser client with an
/// `index.html` fallback. Otherwise, serves only the API endpoints.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config)?;

    let app = if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
        crate::routes::create_spa_router(ctx, static_dir, &config.cors)
    } else {
        crate::routes::create_router(ctx, &config.cors)
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    if config.static_dir.is_some() {
        info!("ytgate (with UI) listening on http://{addr}");
    } else {
        info!("ytgate (API only) listening on http://{addr}");
    }

    axum::serve(listener, app).await?;
    Ok(())
}
