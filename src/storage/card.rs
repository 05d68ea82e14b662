use crate::model::card::BingoCard;
use crate::storage::prefs::Prefs;

const CARD_KEY: &str = "bingo.card.v1";

/// Persists the current card so tile selections survive restarts.
#[derive(Debug, Clone)]
pub struct CardPersistence {
    prefs: Prefs,
}

impl CardPersistence {
    pub fn new(prefs: Prefs) -> Self {
        Self { prefs }
    }

    pub fn load_card(&self) -> Option<BingoCard> {
        let raw = self.prefs.read(CARD_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(card) => Some(card),
            Err(err) => {
                log::error!("failed to decode stored card: {err}");
                None
            }
        }
    }

    pub fn save_card(&self, card: Option<&BingoCard>) {
        let Some(card) = card else {
            self.prefs.remove(CARD_KEY);
            return;
        };
        match serde_json::to_string(card) {
            Ok(json) => self.prefs.write(CARD_KEY, &json),
            Err(err) => log::error!("failed to encode card: {err}"),
        }
    }
}
