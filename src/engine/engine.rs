use std::sync::mpsc::{Receiver, Sender};

use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::shortener::TopicShortener;
use crate::model::card::{BingoCard, GRID_SIZE};
use crate::model::topic_manager::TopicManager;
use crate::storage::card::CardPersistence;
use crate::storage::key_store::KeyStore;
use crate::storage::prefs::Prefs;
use crate::storage::topics::TopicPersistence;

/// Single-threaded owner of the topic pool, the card, and the shortening
/// service. All mutation flows through the command channel, so callers get
/// the single-writer discipline for free; observers receive snapshots.
pub struct Engine<K: KeyStore> {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    topic_manager: TopicManager,
    card: BingoCard,
    card_persistence: CardPersistence,
    shortener: TopicShortener<K>,
}

impl<K: KeyStore> Engine<K> {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        prefs: Prefs,
        shortener: TopicShortener<K>,
    ) -> Self {
        let topic_manager = TopicManager::new(TopicPersistence::new(prefs.clone()));
        let card_persistence = CardPersistence::new(prefs);
        let card = card_persistence.load_card().unwrap_or_default();
        Self {
            rx,
            tx,
            topic_manager,
            card,
            card_persistence,
            shortener,
        }
    }

    /// Process commands until every sender is gone. Restored state goes out
    /// first so observers start from the persisted snapshot.
    pub fn run(&mut self) {
        self.notify_topics();
        self.notify_card();

        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::AddTopics(raw_text) => {
                    self.topic_manager.add_topics(&raw_text);
                    self.notify_topics();
                }

                EngineCommand::RemoveTopic(id) => {
                    self.topic_manager.remove_topic(id);
                    self.notify_topics();
                }

                EngineCommand::ClearTopics => {
                    self.topic_manager.clear_topics();
                    self.notify_topics();
                }

                EngineCommand::UpdateShortText { id, short_text } => {
                    self.topic_manager
                        .update_short_text(id, short_text.as_deref());
                    self.notify_topics();
                }

                EngineCommand::GenerateCard => {
                    let pool = self.topic_manager.random_topics(GRID_SIZE * GRID_SIZE);
                    self.card.generate_card(&pool);
                    self.save_card();
                    self.notify_card();
                }

                EngineCommand::ToggleTile { row, col } => {
                    self.card.toggle_tile(row, col);
                    self.save_card();
                    self.notify_card();
                }

                EngineCommand::ResetCard => {
                    self.card.reset_card();
                    self.save_card();
                    self.notify_card();
                }

                EngineCommand::SaveApiKey(key) => match self.shortener.save_api_key(&key) {
                    Ok(()) => {
                        let _ = self.tx.send(EngineResponse::KeySaved {
                            has_saved_key: self.shortener.has_saved_key(),
                        });
                    }
                    Err(err) => {
                        let _ = self.tx.send(EngineResponse::OperationFailed(err));
                    }
                },

                EngineCommand::ShortenTopics(language) => {
                    let converted = self
                        .shortener
                        .convert_topics(self.topic_manager.topics(), language);
                    if let Some(err) = self.shortener.last_error() {
                        let _ = self.tx.send(EngineResponse::OperationFailed(err.clone()));
                    } else {
                        self.topic_manager.replace_topics(converted);
                        self.notify_topics();
                    }
                }
            }
        }
    }

    fn save_card(&self) {
        let card = (!self.card.is_empty()).then_some(&self.card);
        self.card_persistence.save_card(card);
    }

    fn notify_topics(&self) {
        let _ = self.tx.send(EngineResponse::TopicsChanged(
            self.topic_manager.topics().to_vec(),
        ));
    }

    fn notify_card(&self) {
        let _ = self.tx.send(EngineResponse::CardChanged(self.card.clone()));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::engine::protocol::{EngineCommand, EngineResponse};
    use crate::storage::key_store::MemoryKeyStore;

    /// Feed a command script to a fresh engine over the given prefs and
    /// collect every response once the loop drains.
    fn drive(prefs: Prefs, commands: Vec<EngineCommand>) -> Vec<EngineResponse> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        for cmd in commands {
            cmd_tx.send(cmd).unwrap();
        }
        drop(cmd_tx);

        let shortener = TopicShortener::new(MemoryKeyStore::new());
        Engine::new(cmd_rx, resp_tx, prefs, shortener).run();

        resp_rx.try_iter().collect()
    }

    fn last_card(responses: &[EngineResponse]) -> &BingoCard {
        responses
            .iter()
            .rev()
            .find_map(|resp| match resp {
                EngineResponse::CardChanged(card) => Some(card),
                _ => None,
            })
            .expect("no card snapshot")
    }

    fn last_topics(responses: &[EngineResponse]) -> &[crate::model::topic::Topic] {
        responses
            .iter()
            .rev()
            .find_map(|resp| match resp {
                EngineResponse::TopicsChanged(topics) => Some(topics.as_slice()),
                _ => None,
            })
            .expect("no topics snapshot")
    }

    fn add_pool_commands() -> Vec<EngineCommand> {
        let lines: Vec<String> = (1..=25).map(|i| format!("Topic {i}")).collect();
        vec![EngineCommand::AddTopics(lines.join("\n"))]
    }

    #[test]
    fn startup_sends_initial_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let responses = drive(Prefs::at(dir.path()), Vec::new());

        assert!(last_topics(&responses).is_empty());
        assert!(last_card(&responses).is_empty());
    }

    #[test]
    fn full_game_flow_reaches_a_win() {
        let dir = tempfile::tempdir().unwrap();
        let mut commands = add_pool_commands();
        commands.push(EngineCommand::GenerateCard);
        for col in 0..4 {
            commands.push(EngineCommand::ToggleTile { row: 0, col });
        }

        let responses = drive(Prefs::at(dir.path()), commands);

        assert_eq!(last_topics(&responses).len(), 25);
        let card = last_card(&responses);
        assert!(card.has_won());
    }

    #[test]
    fn card_state_survives_an_engine_restart() {
        let dir = tempfile::tempdir().unwrap();

        let mut commands = add_pool_commands();
        commands.push(EngineCommand::GenerateCard);
        commands.push(EngineCommand::ToggleTile { row: 2, col: 2 });
        drive(Prefs::at(dir.path()), commands);

        let responses = drive(Prefs::at(dir.path()), Vec::new());
        let card = last_card(&responses);
        assert!(card.tiles()[2][2].is_checked);
    }

    #[test]
    fn reset_clears_a_restored_card() {
        let dir = tempfile::tempdir().unwrap();

        let mut commands = add_pool_commands();
        commands.push(EngineCommand::GenerateCard);
        commands.push(EngineCommand::ToggleTile { row: 1, col: 1 });
        drive(Prefs::at(dir.path()), commands);

        let responses = drive(Prefs::at(dir.path()), vec![EngineCommand::ResetCard]);
        let card = last_card(&responses);
        assert!(card.tiles().iter().flatten().all(|t| !t.is_checked));
        assert!(!card.has_won());
    }

    #[test]
    fn shortening_without_a_key_reports_the_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut commands = vec![EngineCommand::AddTopics("Read a book".to_string())];
        commands.push(EngineCommand::ShortenTopics(
            crate::model::language::TopicLanguage::English,
        ));

        let responses = drive(Prefs::at(dir.path()), commands);

        assert!(responses.iter().any(|resp| matches!(
            resp,
            EngineResponse::OperationFailed(crate::error::BingoError::MissingApiKey)
        )));
        // Topics stay untouched.
        let topics = last_topics(&responses);
        assert_eq!(topics.len(), 1);
        assert!(topics[0].short_text.is_none());
    }

    #[test]
    fn saving_a_key_reports_key_presence() {
        let dir = tempfile::tempdir().unwrap();
        let responses = drive(
            Prefs::at(dir.path()),
            vec![EngineCommand::SaveApiKey("sk-test".to_string())],
        );

        assert!(responses.iter().any(|resp| matches!(
            resp,
            EngineResponse::KeySaved {
                has_saved_key: true
            }
        )));
    }
}
