#[cfg(feature = "web")]
fn main() {
    sf_web::app::logging::init();
    dioxus::launch(sf_web::app_root::app_root);
}

#[cfg(all(feature = "server", not(feature = "web")))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = sf_web::WebServerConfig::from_env();
    sf_web::run_web_server(config, sf_web::app_root::app_root).await
}

#[cfg(all(feature = "server", not(feature = "web")))]
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}

#[cfg(not(any(feature = "web", feature = "server")))]
fn main() {
    eprintln!("sf-web must be built with the `web` or `server` feature");
}
