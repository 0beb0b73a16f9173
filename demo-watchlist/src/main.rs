mod protected;
mod server;

use std::env;

use server::{init_tracing, spawn_http_server};
use watchlist_auth_axum::{AuthService, AuthState, ServerSecret, gated_router, store_from_env};

const DEFAULT_PORT: u16 = 3001;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing("demo_watchlist");

    // A missing or empty secret is fatal
    let secret = ServerSecret::from_env()?;
    let store = store_from_env().await?;
    let service = AuthService::from_env(&secret, store)?;
    let state = AuthState::new(service);

    let app = gated_router(protected::router(), state);

    let port = match env::var("PORT") {
        Ok(port) => port.parse()?,
        Err(_) => DEFAULT_PORT,
    };

    spawn_http_server(port, app).await??;
    Ok(())
}
