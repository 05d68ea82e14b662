pub mod card;
pub mod language;
pub mod topic;
pub mod topic_manager;
