use dioxus::prelude::*;

use store::DraftlyConfig;
use ui::views::AppShell;
use ui::AppStateProvider;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const DEFAULT_CONFIG: &str = include_str!("../draftly.toml");

fn main() {
    dioxus::launch(App);
}

/// Embedded configuration, with the API base URL optionally replaced at build
/// time. A broken file falls back to the defaults.
fn load_config() -> DraftlyConfig {
    let config = match DraftlyConfig::from_toml(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}: {}; using defaults", DraftlyConfig::filename(), e);
            DraftlyConfig::default()
        }
    };
    match option_env!("DRAFTLY_API_URL") {
        Some(url) if !url.is_empty() => config.with_base_url(url),
        _ => config,
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    tracing::debug!(base_url = %config.api.base_url, mode = ?config.generation.mode, "configured");

    rsx! {
        document::Link { rel: "icon", href: FAVICON }

        AppStateProvider {
            config,
            AppShell {}
        }
    }
}
