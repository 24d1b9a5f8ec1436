//! Application state context and hooks for the UI.
//!
//! [`AppStateProvider`] owns the single [`AppState`] signal, the configured
//! backend services and the generation worker. Generation runs on tasks
//! owned by the provider, so a run keeps going when the settings page that
//! started it unmounts and always reaches `finish_generation`.

use std::time::Duration;

use api::BackendClient;
use dioxus::prelude::*;
use futures::StreamExt;
use store::{run_generation, AppState, DraftlyConfig, GenerationTicket};

use crate::generator::ConfiguredGenerator;
use crate::notice::{use_notice_provider, Notice};

/// Backend handles shared by every view.
#[derive(Clone, Debug)]
pub struct Services {
    pub backend: BackendClient,
    pub generator: ConfiguredGenerator,
    pub generation_timeout: Option<Duration>,
}

impl Services {
    pub fn from_config(config: &DraftlyConfig) -> Self {
        let backend = BackendClient::new(&config.api);
        let generator = ConfiguredGenerator::from_config(&config.generation, &backend);
        Self {
            backend,
            generator,
            generation_timeout: config.generation.timeout(),
        }
    }
}

/// Get the application state.
/// Returns a signal that updates on every transition.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Provider component for state, services and the generation worker.
/// Wrap your app with this component.
#[component]
pub fn AppStateProvider(config: DraftlyConfig, children: Element) -> Element {
    let state = use_signal(AppState::initial);
    let notice = use_notice_provider();
    let services = use_hook(|| Services::from_config(&config));

    use_context_provider(|| state);
    use_context_provider(|| services.clone());

    // Each ticket runs as its own task in this scope, so a run left over from
    // an earlier session never delays the next one. `finish_generation`
    // drops the stale result when it lands.
    use_coroutine(move |mut tickets: UnboundedReceiver<GenerationTicket>| {
        let services = services.clone();
        async move {
            while let Some(ticket) = tickets.next().await {
                spawn(run_ticket(services.clone(), ticket, state, notice));
            }
        }
    });

    rsx! {
        {children}
    }
}

async fn run_ticket(
    services: Services,
    ticket: GenerationTicket,
    mut state: Signal<AppState>,
    mut notice: Signal<Notice>,
) {
    let result = run_generation(
        &services.generator,
        &ticket.request,
        services.generation_timeout,
    )
    .await;
    let outcome = state.write().finish_generation(ticket, result);
    if let Err(e) = outcome {
        notice.set(Notice::error(e.to_string()));
    }
}
