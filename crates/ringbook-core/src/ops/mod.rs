//! Mutation engine. Every operation reads the current state and returns a
//! fresh one; the input is never modified, so holders of the old value keep
//! seeing a consistent snapshot.
//!
//! Operations scoped to the active list are no-ops when no list is active or
//! the targeted entity no longer exists.

pub mod contacts;
pub mod interactions;
pub mod lists;

use crate::domain::ContactManagerState;

pub use contacts::{add_contact, bulk_import, bulk_import_checked, delete_contact, edit_contact};
pub use interactions::log_interaction;
pub use lists::{create_list, delete_list, load_list, rename_list};

/// Result of an operation that mints an entity. `id` is `None` when the
/// operation had nothing to attach the entity to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created<T> {
    pub state: ContactManagerState,
    pub id: Option<T>,
}

impl<T> Created<T> {
    fn unchanged(state: &ContactManagerState) -> Self {
        Self {
            state: state.clone(),
            id: None,
        }
    }
}
