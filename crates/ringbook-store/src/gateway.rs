//! Persistence gateway: the whole state lives as one JSON document under a
//! single key of the byte store.

use crate::error::Result;
use crate::kv::ByteStore;
use chrono::{DateTime, Utc};
use ringbook_core::{Contact, ContactManagerState, SavedList, DEFAULT_LIST_NAME};
use tracing::{debug, warn};

pub const STATE_KEY: &str = "contactManagerData";
pub const LEGACY_CONTACTS_KEY: &str = "contacts";
pub const LEGACY_LIST_NAME_KEY: &str = "listName";

/// Why `load` did not simply return what was stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadIssue {
    /// Stored data could not be parsed; a fresh default state was used.
    Malformed(String),
    /// The store could not be read; a fresh default state was used.
    Unreadable(String),
    /// Single-list data from an older layout was carried over.
    MigratedLegacy { contacts: usize },
}

impl LoadIssue {
    /// True when the user should be warned that earlier data was not loaded.
    pub fn is_data_loss(&self) -> bool {
        matches!(self, LoadIssue::Malformed(_) | LoadIssue::Unreadable(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub state: ContactManagerState,
    pub issue: Option<LoadIssue>,
    /// The state was built, repaired or migrated here and differs from what
    /// the store holds.
    pub needs_save: bool,
}

pub struct Gateway<'a, S: ByteStore + ?Sized> {
    store: &'a S,
    default_list_name: String,
}

impl<'a, S: ByteStore + ?Sized> Gateway<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            default_list_name: DEFAULT_LIST_NAME.to_string(),
        }
    }

    pub fn with_default_list_name(mut self, name: impl Into<String>) -> Self {
        self.default_list_name = name.into();
        self
    }

    /// Never fails: missing, unreadable or malformed data yields a fresh
    /// state with one empty active list. The active selection is always
    /// resolvable on return.
    pub fn load(&self, now: DateTime<Utc>) -> LoadOutcome {
        let bytes = match self.store.get(STATE_KEY) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(error = %err, "failed to read stored state, starting fresh");
                return self.unreadable(now, err.to_string());
            }
        };

        let Some(bytes) = bytes else {
            return self.load_legacy(now);
        };

        match serde_json::from_slice::<ContactManagerState>(&bytes) {
            Ok(mut state) => {
                let repaired = state.repair_active_list();
                if repaired {
                    debug!(active = ?state.active_list_id, "repaired active list selection");
                }
                LoadOutcome {
                    state,
                    issue: None,
                    needs_save: repaired,
                }
            }
            Err(err) => {
                warn!(error = %err, "stored state is malformed, starting fresh");
                self.fresh(now, Some(LoadIssue::Malformed(err.to_string())))
            }
        }
    }

    /// Writes the entire state as one value.
    pub fn save(&self, state: &ContactManagerState) -> Result<()> {
        let bytes = serde_json::to_vec(state)?;
        self.store.set(STATE_KEY, &bytes)
    }

    /// Drops the single-list keys once their contents live in the current
    /// document.
    pub fn clear_legacy(&self) -> Result<()> {
        self.store.remove(LEGACY_CONTACTS_KEY)?;
        self.store.remove(LEGACY_LIST_NAME_KEY)?;
        Ok(())
    }

    fn fresh(&self, now: DateTime<Utc>, issue: Option<LoadIssue>) -> LoadOutcome {
        LoadOutcome {
            state: ContactManagerState::with_default_list(&self.default_list_name, now),
            issue,
            needs_save: true,
        }
    }

    // The stored bytes may still be intact, so the fallback is never written
    // over them.
    fn unreadable(&self, now: DateTime<Utc>, reason: String) -> LoadOutcome {
        LoadOutcome {
            needs_save: false,
            ..self.fresh(now, Some(LoadIssue::Unreadable(reason)))
        }
    }

    fn load_legacy(&self, now: DateTime<Utc>) -> LoadOutcome {
        let contacts = match self.store.get(LEGACY_CONTACTS_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return self.fresh(now, None),
            Err(err) => {
                warn!(error = %err, "failed to read legacy contacts, starting fresh");
                return self.unreadable(now, err.to_string());
            }
        };
        let contacts: Vec<Contact> = match serde_json::from_slice(&contacts) {
            Ok(contacts) => contacts,
            Err(err) => {
                warn!(error = %err, "legacy contacts are malformed, starting fresh");
                return self.fresh(now, Some(LoadIssue::Malformed(err.to_string())));
            }
        };

        let name = self
            .store
            .get(LEGACY_LIST_NAME_KEY)
            .ok()
            .flatten()
            .and_then(|bytes| serde_json::from_slice::<String>(&bytes).ok())
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.default_list_name.clone());

        let count = contacts.len();
        let mut list = SavedList::new(name, now);
        list.contacts = contacts;
        debug!(contacts = count, "migrated legacy single-list data");
        LoadOutcome {
            state: ContactManagerState {
                active_list_id: Some(list.id.clone()),
                saved_lists: vec![list],
            },
            issue: Some(LoadIssue::MigratedLegacy { contacts: count }),
            needs_save: true,
        }
    }
}
