use std::{error::Error, net::SocketAddr};

use axum_server::tls_rustls::RustlsConfig;
use tracing::{error, info, Level};
use venue::{infrastructure::SqliteStorage, VenueConfig};
use venue_web::{router, AppState};

#[tokio::main]
async fn main() {
    match VenueConfig::load() {
        Ok(config) => {
            tracing_subscriber::fmt()
                .with_max_level(Level::from(&config.logger.level))
                .init();
            if let Err(error) = serve(&config).await {
                error!("アプリケーションエラー: {}", error);
            }
        }
        Err(error) => {
            tracing_subscriber::fmt::init();
            error!("設定の読み込みに失敗しました: {}", error)
        }
    }
}

async fn serve(config: &VenueConfig) -> Result<(), Box<dyn Error>> {
    let address = config.server.address.parse::<SocketAddr>()?;
    let storage = SqliteStorage::connect(&config.database).await?;
    let app = router(AppState::new(&storage));

    match &config.server.tls {
        Some(tls) => {
            let rustls = RustlsConfig::from_pem_file(&tls.cert, &tls.key).await?;
            info!("会場予約システムを起動しました: https://{}", address);
            axum_server::bind_rustls(address, rustls)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            info!("会場予約システムを起動しました: http://{}", address);
            axum_server::bind(address)
                .serve(app.into_make_service())
                .await?;
        }
    }
    Ok(())
}
