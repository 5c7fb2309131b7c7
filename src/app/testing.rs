//! In-memory collaborators for store tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::app::{Collaborators, UiState, UiStore};
use crate::collaborators::{ChatWidget, LocalStorage, PeopleApi, RemoteClient, SessionContext};
use crate::error::{Result, StoreError};
use crate::models::{
    Event, EventWindow, MainConfig, PersonUpdate, SearchQuery, SearchResults, User,
};

fn unavailable(url: &str) -> StoreError {
    StoreError::Status {
        status: 503,
        url: url.to_string(),
        body: String::from("service unavailable"),
    }
}

#[derive(Clone, Default)]
pub struct FakeRemote {
    config: MainConfig,
    failing: bool,
}

impl FakeRemote {
    pub fn with_config(config: MainConfig) -> Self {
        FakeRemote { config, failing: false }
    }

    pub fn failing() -> Self {
        FakeRemote { config: MainConfig::new(), failing: true }
    }
}

#[async_trait]
impl RemoteClient for FakeRemote {
    async fn get_config(&self) -> Result<MainConfig> {
        if self.failing {
            return Err(unavailable("/api/config"));
        }
        Ok(self.config.clone())
    }

    async fn get_events(&self, window: EventWindow) -> Result<Vec<Event>> {
        if self.failing {
            return Err(unavailable("/api/data/events/last"));
        }
        Ok(vec![Event {
            id: Some(String::from("event-1")),
            name: String::from("task:update"),
            created_at: Some(window.after_param()),
            user_id: None,
            extra: Default::default(),
        }])
    }

    async fn search_data(&self, query: &SearchQuery) -> Result<SearchResults> {
        if self.failing {
            return Err(unavailable("/api/data/search"));
        }
        Ok(serde_json::to_value(query)?)
    }
}

#[derive(Clone, Copy, Default)]
enum PeopleMode {
    #[default]
    Ok,
    Failing,
    Blocked,
}

#[derive(Clone, Default)]
pub struct FakePeople {
    mode: PeopleMode,
    updates: Arc<Mutex<Vec<PersonUpdate>>>,
    gate: Arc<Notify>,
}

impl FakePeople {
    pub fn failing() -> Self {
        FakePeople { mode: PeopleMode::Failing, ..Default::default() }
    }

    /// Hangs every update until [`FakePeople::release`] is called
    pub fn blocked() -> Self {
        FakePeople { mode: PeopleMode::Blocked, ..Default::default() }
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn updates(&self) -> Vec<PersonUpdate> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl PeopleApi for FakePeople {
    async fn update_person(&self, update: PersonUpdate) -> Result<()> {
        let url = format!("/api/data/persons/{}", update.id);
        self.updates.lock().unwrap().push(update);
        match self.mode {
            PeopleMode::Ok => Ok(()),
            PeopleMode::Failing => Err(unavailable(&url)),
            PeopleMode::Blocked => {
                self.gate.notified().await;
                Ok(())
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeChat {
    calls: Arc<Mutex<Vec<bool>>>,
}

impl FakeChat {
    pub fn calls(&self) -> Vec<bool> {
        self.calls.lock().unwrap().clone()
    }
}

impl ChatWidget for FakeChat {
    fn set_chat_visibility(&self, visible: bool) {
        self.calls.lock().unwrap().push(visible);
    }
}

#[derive(Clone, Default)]
pub struct FakeStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
    failing: bool,
}

impl FakeStorage {
    pub fn failing() -> Self {
        FakeStorage { failing: true, ..Default::default() }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap().get(key).cloned()
    }
}

impl LocalStorage for FakeStorage {
    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.failing {
            return Err(StoreError::Io(std::io::Error::other("disk full")));
        }
        self.items
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeSession {
    user: Arc<Mutex<Option<User>>>,
}

impl SessionContext for FakeSession {
    fn current_user(&self) -> Option<User> {
        self.user.lock().unwrap().clone()
    }
}

/// Store wiring with handles kept for assertions
#[derive(Clone, Default)]
pub struct Fixture {
    pub remote: FakeRemote,
    pub people: FakePeople,
    pub chat: FakeChat,
    pub storage: FakeStorage,
    pub session: FakeSession,
    no_storage: bool,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logged_in(self, user: User) -> Self {
        *self.session.user.lock().unwrap() = Some(user);
        self
    }

    pub fn remote(mut self, remote: FakeRemote) -> Self {
        self.remote = remote;
        self
    }

    pub fn people(mut self, people: FakePeople) -> Self {
        self.people = people;
        self
    }

    pub fn storage(mut self, storage: FakeStorage) -> Self {
        self.storage = storage;
        self
    }

    pub fn without_storage(mut self) -> Self {
        self.no_storage = true;
        self
    }

    pub fn collaborators(&self) -> Collaborators {
        let storage: Option<Arc<dyn LocalStorage>> = if self.no_storage {
            None
        } else {
            Some(Arc::new(self.storage.clone()))
        };
        Collaborators {
            remote: Arc::new(self.remote.clone()),
            people: Arc::new(self.people.clone()),
            chat: Arc::new(self.chat.clone()),
            storage,
            session: Arc::new(self.session.clone()),
        }
    }

    pub fn store(&self) -> UiStore {
        UiStore::new(UiState::default(), self.collaborators())
    }
}
