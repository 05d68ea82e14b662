use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::model::topic::{sanitize_topic_text, Topic};
use crate::storage::topics::TopicPersistence;

/// Owns the ordered collection of available topics. Every mutation writes
/// straight through to persistence; reads never touch it.
#[derive(Debug)]
pub struct TopicManager {
    topics: Vec<Topic>,
    persistence: TopicPersistence,
}

impl TopicManager {
    pub fn new(persistence: TopicPersistence) -> Self {
        let topics = persistence.load_topics();
        Self {
            topics,
            persistence,
        }
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Add topics from multi-line text, one topic per line. Lines are
    /// trimmed, a leading "- " marker is stripped, and blank lines are
    /// dropped. Does nothing when no line survives.
    pub fn add_topics(&mut self, raw_text: &str) {
        let new_topics: Vec<Topic> = raw_text
            .lines()
            .map(sanitize_topic_text)
            .filter(|line| !line.is_empty())
            .map(Topic::new)
            .collect();

        if new_topics.is_empty() {
            return;
        }
        self.topics.extend(new_topics);
        self.save_topics();
    }

    pub fn remove_topic(&mut self, id: Uuid) {
        let original_count = self.topics.len();
        self.topics.retain(|topic| topic.id != id);
        if self.topics.len() != original_count {
            self.save_topics();
        }
    }

    pub fn clear_topics(&mut self) {
        self.topics.clear();
        self.save_topics();
    }

    /// Wholesale replacement, used after a shortening batch completes.
    pub fn replace_topics(&mut self, new_topics: Vec<Topic>) {
        self.topics = new_topics;
        self.save_topics();
    }

    /// Overwrite one topic's short label with a trimmed value.
    pub fn update_short_text(&mut self, id: Uuid, short_text: Option<&str>) {
        let Some(topic) = self.topics.iter_mut().find(|topic| topic.id == id) else {
            return;
        };
        topic.short_text = short_text.map(|s| s.trim().to_string());
        self.save_topics();
    }

    /// A random selection of `count` topics, drawn without replacement from a
    /// fresh shuffle. A pool smaller than `count` is returned whole.
    pub fn random_topics(&self, count: usize) -> Vec<Topic> {
        if self.topics.len() < count {
            return self.topics.clone();
        }
        let mut shuffled = self.topics.clone();
        shuffled.shuffle(&mut rand::thread_rng());
        shuffled.truncate(count);
        shuffled
    }

    fn save_topics(&self) {
        self.persistence.save_topics(&self.topics);
    }
}
