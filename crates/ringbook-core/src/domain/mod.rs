pub mod contact;
pub mod ids;
pub mod interaction;
pub mod list;
pub mod phone;
pub mod state;

pub use contact::{Contact, ContactDraft};
pub use ids::{new_id, ContactId, EmptyIdError, ListId, LogId};
pub use interaction::{InteractionLog, InteractionNew, InteractionType};
pub use list::SavedList;
pub use phone::is_valid_mobile;
pub use state::{ContactManagerState, DEFAULT_LIST_NAME};
