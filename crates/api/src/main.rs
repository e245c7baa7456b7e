#[tokio::main]
async fn main() -> anyhow::Result<()> {
    botdesk_observability::init();

    let config = botdesk_api::config::Config::from_env()?;
    let app = botdesk_api::app::build_app(&config)?;

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
