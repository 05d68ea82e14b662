pub mod card;
pub mod key_store;
pub mod prefs;
pub mod topics;
