use payment_server::{self, app, configs, logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[allow(clippy::expect_used)]
    let config = configs::Config::new().expect("Failed while parsing config");
    let _guard = logger::setup(
        &config.log,
        payment_server::service_name!(),
        [
            payment_server::service_name!(),
            "connector_integration",
            "tower_http",
        ],
    );

    app::server_builder(config).await?;

    Ok(())
}
