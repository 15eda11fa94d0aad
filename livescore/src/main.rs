use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use args::Args;
use clap::Parser;
use config::Config;
use server::ServeConfig;
use tokio_util::sync::CancellationToken;

mod args;
mod logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.config()?;

    logger::init(&args);

    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_signal(shutdown.clone()));

    if let Err(e) = server::serve(serve_config(&args, config, shutdown)).await {
        log::error!("Server failed to start: {e}");
        std::process::exit(1);
    }

    log::info!("Server stopped");

    Ok(())
}

fn serve_config(args: &Args, config: Config, shutdown: CancellationToken) -> ServeConfig {
    let listen_address = args
        .listen_address
        .or(config.server.listen_address)
        .unwrap_or(SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, args.port)));

    let public_url = args
        .public_url
        .clone()
        .or_else(|| config.server.public_url.clone())
        .unwrap_or_else(|| format!("http://localhost:{}", listen_address.port()));

    ServeConfig {
        listen_address,
        config,
        public_url,
        shutdown,
    }
}

/// Cancel `shutdown` on Ctrl-C, or SIGTERM on unix.
async fn cancel_on_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    log::info!("Shutting down");
    shutdown.cancel();
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use config::Config;
    use tokio_util::sync::CancellationToken;

    use super::serve_config;
    use crate::args::{Args, LogLevel, LogStyle};

    // Built directly rather than parsed, so PORT, PUBLIC_URL and the
    // LIVESCORE_* variables of the test machine play no part.
    fn args(port: u16, listen_address: Option<&str>, public_url: Option<&str>) -> Args {
        Args {
            listen_address: listen_address.map(|address| address.parse::<SocketAddr>().unwrap()),
            port,
            public_url: public_url.map(str::to_string),
            config: "./livescore.toml".into(),
            log_level: LogLevel::default(),
            log_style: LogStyle::Text,
        }
    }

    #[test]
    fn port_on_all_interfaces() {
        let serve = serve_config(&args(9090, None, None), Config::default(), CancellationToken::new());

        assert_eq!(serve.listen_address.to_string(), "0.0.0.0:9090");
        assert_eq!(serve.public_url, "http://localhost:9090");
    }

    #[test]
    fn config_listen_address_beats_port() {
        let mut config = Config::default();
        config.server.listen_address = Some("127.0.0.1:7000".parse().unwrap());
        config.server.public_url = Some("https://config.example".to_string());

        let serve = serve_config(&args(8080, None, None), config, CancellationToken::new());

        assert_eq!(serve.listen_address.to_string(), "127.0.0.1:7000");
        assert_eq!(serve.public_url, "https://config.example");
    }

    #[test]
    fn flags_beat_config() {
        let mut config = Config::default();
        config.server.public_url = Some("https://config.example".to_string());

        let serve = serve_config(
            &args(8080, Some("127.0.0.1:7001"), Some("https://livescoremcp.com")),
            config,
            CancellationToken::new(),
        );

        assert_eq!(serve.listen_address.to_string(), "127.0.0.1:7001");
        assert_eq!(serve.public_url, "https://livescoremcp.com");
    }
}
