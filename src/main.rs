//! ui-store - loads the session UI state and prints it
//!
//! Wires the HTTP client, local storage, chat bridge and session into a store
//! actor, loads the server config, and prints the resulting snapshot as JSON.

use std::path::PathBuf;
use std::sync::Arc;

use ui_store::chat::ChatBridge;
use ui_store::collaborators::LocalStorage;
use ui_store::constants::APP_VERSION;
use ui_store::network::ApiClient;
use ui_store::session::SessionState;
use ui_store::storage::FileStorage;
use ui_store::{Collaborators, Settings, StoreActor, UiState, UiStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(settings_path.as_deref())?;

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", &settings.log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!(version = APP_VERSION, api_url = %settings.api_url, "Starting ui-store");

    let api = Arc::new(ApiClient::from_settings(&settings)?);
    let storage: Arc<dyn LocalStorage> = Arc::new(FileStorage::open(&settings.data_dir));
    let session = Arc::new(SessionState::new());
    let (chat, mut chat_rx) = ChatBridge::new();

    // Stand-in widget host
    tokio::spawn(async move {
        while let Some(visible) = chat_rx.recv().await {
            tracing::info!(visible, "Support chat visibility changed");
        }
    });

    let collaborators = Collaborators {
        remote: api.clone(),
        people: api,
        chat: Arc::new(chat),
        storage: Some(storage),
        session,
    };
    let store = UiStore::new(UiState::default(), collaborators);

    let (actor, handle) = StoreActor::new(store);
    let actor_task = tokio::spawn(actor.run());

    handle.set_main_config().await?;
    let snapshot = handle.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    handle.shutdown()?;
    actor_task.await?;

    Ok(())
}
