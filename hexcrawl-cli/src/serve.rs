//! Serve command - start the map server

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use hexcrawl_server::{run_server, ServerConfig};

#[derive(Args)]
pub struct ServeArgs {
    /// Port number to listen on
    #[arg(long, default_value = "3000")]
    pub port: u16,

    /// Directory containing the built client bundle
    #[arg(long, default_value = "client/dist")]
    pub static_dir: PathBuf,

    /// JSON data file backing the map
    #[arg(long, default_value = "hexcrawl-data.json")]
    pub data: PathBuf,

    /// Keep the map in memory only (no data file)
    #[arg(long)]
    pub ephemeral: bool,
}

/// Run serve command:
/// 1. Configure server
/// 2. Start server (blocking)
pub fn run(args: ServeArgs) -> Result<()> {
    let config = configure_server(&args)?;

    tracing::info!("Starting hexcrawl server on port {}", config.port);

    start_server(config)
}

/// Configure server from command arguments
fn configure_server(args: &ServeArgs) -> Result<ServerConfig> {
    validate_static_dir(&args.static_dir)?;

    Ok(ServerConfig {
        port: args.port,
        static_dir: args.static_dir.to_string_lossy().to_string(),
        data_file: if args.ephemeral {
            None
        } else {
            Some(args.data.clone())
        },
    })
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    // Create tokio runtime for async server
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async { run_server(config).await })
}

/// Validate that static directory exists
fn validate_static_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::warn!(
            "Static directory does not exist: {}. Server will start but may not serve files.",
            path.display()
        );
    } else if !path.is_dir() {
        anyhow::bail!(
            "Static path exists but is not a directory: {}",
            path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_server_defaults() {
        let args = ServeArgs {
            port: 3000,
            static_dir: PathBuf::from("test_static"),
            data: PathBuf::from("test-data.json"),
            ephemeral: false,
        };

        let config = configure_server(&args).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, "test_static");
        assert_eq!(config.data_file, Some(PathBuf::from("test-data.json")));
    }

    #[test]
    fn test_ephemeral_drops_data_file() {
        let args = ServeArgs {
            port: 3000,
            static_dir: PathBuf::from("test_static"),
            data: PathBuf::from("test-data.json"),
            ephemeral: true,
        };

        let config = configure_server(&args).unwrap();
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn test_validate_static_dir_nonexistent() {
        // Should not error, just warn
        let result = validate_static_dir(Path::new("/nonexistent/path"));
        assert!(result.is_ok());
    }
}
