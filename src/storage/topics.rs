use crate::model::topic::Topic;
use crate::storage::prefs::Prefs;

const TOPICS_KEY: &str = "bingo.topics.v1";

/// Persists the topic list between launches. Write-through from the topic
/// manager; a stored blob that no longer decodes is treated as no data.
#[derive(Debug, Clone)]
pub struct TopicPersistence {
    prefs: Prefs,
}

impl TopicPersistence {
    pub fn new(prefs: Prefs) -> Self {
        Self { prefs }
    }

    pub fn load_topics(&self) -> Vec<Topic> {
        let Some(raw) = self.prefs.read(TOPICS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(topics) => topics,
            Err(err) => {
                log::error!("failed to decode stored topics: {err}");
                Vec::new()
            }
        }
    }

    pub fn save_topics(&self, topics: &[Topic]) {
        if topics.is_empty() {
            self.prefs.remove(TOPICS_KEY);
            return;
        }
        match serde_json::to_string(topics) {
            Ok(json) => self.prefs.write(TOPICS_KEY, &json),
            Err(err) => log::error!("failed to encode topics: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_topics() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = TopicPersistence::new(Prefs::at(dir.path()));

        let topics = vec![
            Topic::new("Read a book"),
            Topic::with_short_text("Go for a long walk", "Long Walk"),
        ];
        persistence.save_topics(&topics);

        assert_eq!(persistence.load_topics(), topics);
    }

    #[test]
    fn empty_list_removes_stored_data() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = TopicPersistence::new(Prefs::at(dir.path()));

        persistence.save_topics(&[Topic::new("Dance")]);
        persistence.save_topics(&[]);

        assert!(persistence.load_topics().is_empty());
    }

    #[test]
    fn undecodable_data_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Prefs::at(dir.path());
        prefs.write("bingo.topics.v1", "not json at all");

        let persistence = TopicPersistence::new(prefs);
        assert!(persistence.load_topics().is_empty());
    }
}
