use std::{error::Error, process::ExitCode};

use inn::{store::ReservationStore, InnConfig};
use tracing::{error, info, warn, Level};

#[tokio::main]
async fn main() -> ExitCode {
    match InnConfig::load() {
        Ok(config) => {
            tracing_subscriber::fmt()
                .with_max_level(Level::from(&config.logger.level))
                .init();
            match audit(&config).await {
                Ok(0) => ExitCode::SUCCESS,
                Ok(_) => ExitCode::FAILURE,
                Err(error) => {
                    error!("アプリケーションエラー: {}", error);
                    ExitCode::FAILURE
                }
            }
        }
        Err(error) => {
            tracing_subscriber::fmt::init();
            error!("アプリケーションエラー: {}", error);
            ExitCode::FAILURE
        }
    }
}

/// 不整合の件数を返す
async fn audit(config: &InnConfig) -> Result<usize, Box<dyn Error>> {
    info!(
        directory = %config.storage.directory.display(),
        "整合性チェックを開始"
    );
    let store = ReservationStore::open(&config.storage);
    let discrepancies = store.audit().await?;
    for discrepancy in &discrepancies {
        warn!("不整合を検出: {}", discrepancy);
    }
    info!(count = discrepancies.len(), "整合性チェックが完了");
    Ok(discrepancies.len())
}
