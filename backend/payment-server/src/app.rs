use std::net::SocketAddr;

use tokio::{
    signal::unix::{signal, SignalKind},
    sync::oneshot,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    configs::Config,
    error::ConfigurationError,
    http::{router, state::AppState},
    logger,
};

/// Build and run the HTTP server until a shutdown signal arrives.
pub async fn server_builder(config: Config) -> Result<(), ConfigurationError> {
    let listener = config.server.tcp_listener().await?;
    let environment = config.common.environment;

    let state = AppState::new(config);
    let app = router::create_router(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    // Signal handler
    let (tx, rx) = oneshot::channel();

    #[allow(clippy::expect_used)]
    tokio::spawn(async move {
        let mut sig_int =
            signal(SignalKind::interrupt()).expect("Failed to initialize SIGINT signal handler");
        let mut sig_term =
            signal(SignalKind::terminate()).expect("Failed to initialize SIGTERM signal handler");

        tokio::select! {
            _ = sig_int.recv() => {
                logger::info!("Received SIGINT");
            }
            _ = sig_term.recv() => {
                logger::info!("Received SIGTERM");
            }
        }
        tx.send(()).expect("Failed to send shutdown signal");
    });

    logger::info!(environment = %environment, "payment server started");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        let _ = rx.await;
    })
    .await?;

    Ok(())
}
