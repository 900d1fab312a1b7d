use std::env;
use std::sync::Arc;

use aquasync_api::restful::LoginRequest;
use aquasync_client::configs::settings::Settings;
use aquasync_client::errors::Result;
use aquasync_client::services::auth_service::AuthClient;
use aquasync_client::services::device_service::DeviceRegistryClient;
use aquasync_client::services::schedule_service::ScheduleExchange;
use aquasync_client::services::session::SessionContext;

#[tokio::main]
async fn main() {
    let settings = Arc::new(Settings::new().expect("Failed to load settings."));

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let app_name = env!("CARGO_PKG_NAME").replace('-', "_");
            let level = settings.logger.level.as_str();

            format!("{app_name}={level}").into()
        }))
        .init();

    if let Err(err) = run(&settings).await {
        tracing::error!(%err, "exchange failed");
        std::process::exit(1);
    }
}

/// Walks the whole client surface once: sign in, authorize the token, list
/// the user's devices and pull the first one's schedule. Credentials come
/// from AQUASYNC_EMAIL / AQUASYNC_AUTH, the device from AQUASYNC_DEVICE
/// when the listing should be skipped.
async fn run(settings: &Settings) -> Result<()> {
    let email = env::var("AQUASYNC_EMAIL").unwrap_or_default();
    let auth = env::var("AQUASYNC_AUTH").unwrap_or_default();

    let auth_client = AuthClient::new(settings.api.auth_url.clone());
    let registry = DeviceRegistryClient::new(settings.api.device_registry_url.clone());
    let mut context = SessionContext::new();

    let session = auth_client.login(&LoginRequest { email, auth }).await?;
    context.establish(session);

    if let Some(token) = context.token() {
        auth_client.authorize(token).await?;
    }

    let device_id = match env::var("AQUASYNC_DEVICE") {
        Ok(device) => device,
        Err(_) => {
            let user = context.current().expect("session was just established");
            let devices = registry.user_devices(&user.email).await?;
            for device in &devices {
                tracing::info!(mac = %device.mac, name = %device.name, "registered device");
            }

            match devices.into_iter().next() {
                Some(device) => device.mac,
                None => {
                    tracing::info!("no devices registered for this user");
                    return Ok(());
                }
            }
        }
    };

    let mut exchange = ScheduleExchange::new(registry, device_id);
    exchange.load().await?;
    tracing::info!(schedule = ?exchange.form().schedule(), "current device schedule");

    Ok(())
}
