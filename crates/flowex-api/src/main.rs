//! FlowEx 모의 거래소 API 서버.
//!
//! Axum 기반 REST API 서버를 시작합니다.
//! 헬스 체크, 모의 로그인, 거래쌍/티커/잔고 조회 엔드포인트를 제공합니다.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use clap::Parser;
use tracing::{error, info, warn};

use flowex_api::metrics::install_metrics_exporter;
use flowex_api::server::create_router;
use flowex_api::state::AppState;
use flowex_core::{init_logging, AppConfig, LogConfig};

/// 명령줄 인자.
#[derive(Parser, Debug)]
#[command(name = "flowex-api", version, about = "FlowEx mock exchange backend")]
struct Cli {
    /// 설정 파일 경로 (없으면 기본값과 환경 변수만 사용)
    #[arg(short, long, default_value = "config/default.toml")]
    config: PathBuf,

    /// 바인딩할 호스트 (설정 파일보다 우선)
    #[arg(long)]
    host: Option<String>,

    /// 바인딩할 포트 (설정 파일보다 우선)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 파일은 선택 사항
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;

    init_logging(LogConfig::from(&config.logging))
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    info!(
        service = %config.server.service_name,
        version = env!("CARGO_PKG_VERSION"),
        "Starting FlowEx API server"
    );

    // Prometheus 익스포터는 API 포트와 분리된 리스너에서 동작
    if config.metrics.enabled {
        let metrics_addr: SocketAddr = config.metrics.listen_addr.parse()?;
        install_metrics_exporter(metrics_addr)
            .map_err(|e| anyhow!("failed to install metrics exporter: {e}"))?;
        info!(addr = %metrics_addr, "Prometheus metrics exporter listening");
    }

    let state = Arc::new(AppState::new(&config));
    info!(
        pairs = state.store.trading_pairs().len(),
        balances = state.store.balances().len(),
        "Mock store seeded"
    );

    let app = create_router(
        state,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    info!(addr = %listener.local_addr()?, "API server listening");
    info!("Demo login: {} / {}", flowex_core::DEMO_EMAIL, config.auth.demo_password);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

/// Graceful shutdown 시그널 대기.
///
/// Ctrl+C 또는 SIGTERM 시그널을 수신하면 반환합니다.
/// 핸들러 설치에 실패한 시그널은 무시하고 나머지 시그널을 기다립니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
