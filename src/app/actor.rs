//! Store actor - message loop serializing actions onto the store

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinSet;

use crate::app::actions::fetch_main_config;
use crate::app::UiStore;
use crate::error::{Result, StoreError};
use crate::messages::{Mutation, StoreCommand, UiSnapshot};
use crate::models::{Event, EventWindow, MainConfig, SearchQuery, SearchResults};

/// Config fetch finished in the background
struct ConfigLoaded {
    config: MainConfig,
    reply: Option<oneshot::Sender<MainConfig>>,
}

/// Actor owning the store. Commands are applied one at a time; I/O runs in
/// spawned tasks so a slow server never stalls other commands.
pub struct StoreActor {
    store: UiStore,
    cmd_rx: mpsc::UnboundedReceiver<StoreCommand>,
    snapshot_tx: watch::Sender<UiSnapshot>,
    loaded_tx: mpsc::UnboundedSender<ConfigLoaded>,
    loaded_rx: mpsc::UnboundedReceiver<ConfigLoaded>,
    tasks: JoinSet<()>,
}

impl StoreActor {
    /// Build the actor and its caller-side handle
    pub fn new(store: UiStore) -> (Self, StoreHandle) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(store.snapshot());
        let (loaded_tx, loaded_rx) = mpsc::unbounded_channel();

        let actor = StoreActor {
            store,
            cmd_rx,
            snapshot_tx,
            loaded_tx,
            loaded_rx,
            tasks: JoinSet::new(),
        };
        let handle = StoreHandle { cmd_tx, snapshot_rx };
        (actor, handle)
    }

    /// Run the actor message loop
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                cmd = self.cmd_rx.recv() => {
                    match cmd {
                        Some(StoreCommand::Shutdown) | None => break,
                        Some(cmd) => {
                            tracing::debug!(action = cmd.name(), "Handling store command");
                            self.handle_command(cmd);
                            self.publish();
                        }
                    }
                }

                Some(loaded) = self.loaded_rx.recv() => {
                    let config = self.store.apply_main_config(loaded.config);
                    self.publish();
                    if let Some(reply) = loaded.reply {
                        let _ = reply.send(config);
                    }
                }

                // Reap finished background tasks
                Some(_result) = self.tasks.join_next() => {}
            }
        }

        tracing::info!("Store actor stopped");
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(self.store.snapshot());
    }

    fn handle_command(&mut self, cmd: StoreCommand) {
        match cmd {
            StoreCommand::ChangeTheme(theme) => {
                self.store.change_theme_and_sync(&theme);
            }
            StoreCommand::ToggleDarkTheme => {
                self.store.toggle_dark_theme();
            }
            StoreCommand::SetSupportChat(visible) => self.store.set_support_chat(visible),
            StoreCommand::ToggleSidebar => self.store.toggle_sidebar(),
            StoreCommand::ToggleUserMenu => self.store.toggle_user_menu(),
            StoreCommand::SetCurrentSection(section) => self.store.set_current_section(section),
            StoreCommand::SetLastProductionScreen(screen) => {
                self.store.set_last_production_screen(screen)
            }
            StoreCommand::Commit(mutation) => self.store.commit(mutation),

            StoreCommand::SetMainConfig { reply } => {
                let remote = self.store.remote();
                let loaded_tx = self.loaded_tx.clone();
                self.tasks.spawn(async move {
                    let config = fetch_main_config(remote.as_ref()).await;
                    let _ = loaded_tx.send(ConfigLoaded { config, reply });
                });
            }
            StoreCommand::LoadEvents { window, reply } => {
                let remote = self.store.remote();
                self.tasks.spawn(async move {
                    let _ = reply.send(remote.get_events(window).await);
                });
            }
            StoreCommand::SearchData { query, reply } => {
                let remote = self.store.remote();
                self.tasks.spawn(async move {
                    let _ = reply.send(remote.search_data(&query).await);
                });
            }

            StoreCommand::Shutdown => {}
        }
    }
}

/// Cloneable caller side of the store actor
#[derive(Clone)]
pub struct StoreHandle {
    cmd_tx: mpsc::UnboundedSender<StoreCommand>,
    snapshot_rx: watch::Receiver<UiSnapshot>,
}

impl StoreHandle {
    fn send(&self, cmd: StoreCommand) -> Result<()> {
        self.cmd_tx.send(cmd).map_err(|_| StoreError::Closed)
    }

    /// Latest published state
    pub fn snapshot(&self) -> UiSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Receiver notified after every applied command
    pub fn subscribe(&self) -> watch::Receiver<UiSnapshot> {
        self.snapshot_rx.clone()
    }

    pub fn change_theme_and_sync(&self, theme: impl Into<String>) -> Result<()> {
        self.send(StoreCommand::ChangeTheme(theme.into()))
    }

    pub fn toggle_dark_theme(&self) -> Result<()> {
        self.send(StoreCommand::ToggleDarkTheme)
    }

    pub fn set_support_chat(&self, visible: bool) -> Result<()> {
        self.send(StoreCommand::SetSupportChat(visible))
    }

    pub fn toggle_sidebar(&self) -> Result<()> {
        self.send(StoreCommand::ToggleSidebar)
    }

    pub fn toggle_user_menu(&self) -> Result<()> {
        self.send(StoreCommand::ToggleUserMenu)
    }

    pub fn set_current_section(&self, section: impl Into<String>) -> Result<()> {
        self.send(StoreCommand::SetCurrentSection(section.into()))
    }

    pub fn set_last_production_screen(&self, screen: impl Into<String>) -> Result<()> {
        self.send(StoreCommand::SetLastProductionScreen(screen.into()))
    }

    pub fn commit(&self, mutation: Mutation) -> Result<()> {
        self.send(StoreCommand::Commit(mutation))
    }

    /// Fetch and commit the server config; resolves to what was committed
    pub async fn set_main_config(&self) -> Result<MainConfig> {
        let (reply, rx) = oneshot::channel();
        self.send(StoreCommand::SetMainConfig { reply: Some(reply) })?;
        rx.await.map_err(|_| StoreError::Closed)
    }

    pub async fn load_events(&self, window: EventWindow) -> Result<Vec<Event>> {
        let (reply, rx) = oneshot::channel();
        self.send(StoreCommand::LoadEvents { window, reply })?;
        rx.await.map_err(|_| StoreError::Closed)?
    }

    pub async fn search_data(&self, query: SearchQuery) -> Result<SearchResults> {
        let (reply, rx) = oneshot::channel();
        self.send(StoreCommand::SearchData { query, reply })?;
        rx.await.map_err(|_| StoreError::Closed)?
    }

    pub fn shutdown(&self) -> Result<()> {
        self.send(StoreCommand::Shutdown)
    }
}
