//! Super Heroes fight UI - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use superheroes_player::application::services::FightService;
use superheroes_player::application::Api;
use superheroes_player::infrastructure::config::PlayerConfig;
use superheroes_player::infrastructure::http_client::ApiAdapter;
use superheroes_player::ports::outbound::{FightSourcePort, RawApiPort};

fn main() {
    // Before the subscriber, so RUST_LOG from .env is honoured.
    #[cfg(not(target_arch = "wasm32"))]
    let dotenv = superheroes_player::infrastructure::config::load_dotenv();

    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "superheroes_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    #[cfg(not(target_arch = "wasm32"))]
    match dotenv {
        Ok(Some(path)) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
    }

    let config = PlayerConfig::from_env();
    tracing::info!(api = %config.api_base_url, "Starting Super Heroes fight UI");

    // HTTP
    let raw_api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::new(&config));
    let fight: Arc<dyn FightSourcePort> = Arc::new(FightService::new(Api::new(raw_api)));

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title("Super Heroes");
        let cfg = dioxus_desktop::Config::new().with_window(window);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(superheroes_player::presentation::Services::new(fight))
        .launch(superheroes_player::ui::app);
}
