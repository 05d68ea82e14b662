use std::sync::mpsc;
use std::thread;

use anyhow::Result;

use party_bingo::engine::engine::Engine;
use party_bingo::engine::protocol::{EngineCommand, EngineResponse};
use party_bingo::engine::shortener::TopicShortener;
use party_bingo::model::card::BingoCard;
use party_bingo::storage::key_store::FileKeyStore;
use party_bingo::storage::prefs::Prefs;

const DEMO_TOPICS: &str = "\
- Sing a karaoke song
- Try an exotic food
- Dance with a stranger
- Tell a terrible joke
- Take a group selfie
- Learn a magic trick
- Start a conga line
- Win a board game
- Share an embarrassing story
- Do ten push-ups
- Swap shirts with someone
- Speak in an accent for 5 minutes";

fn main() -> Result<()> {
    env_logger::init();

    let prefs = Prefs::at(std::env::temp_dir().join("party-bingo-demo"));
    let shortener = TopicShortener::new(FileKeyStore::new(prefs.clone()));

    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();

    let engine_thread = thread::spawn(move || {
        Engine::new(cmd_rx, resp_tx, prefs, shortener).run();
    });

    cmd_tx.send(EngineCommand::ClearTopics)?;
    cmd_tx.send(EngineCommand::AddTopics(DEMO_TOPICS.to_string()))?;
    cmd_tx.send(EngineCommand::GenerateCard)?;

    // Work towards a bingo along the top row, with one stray check that
    // must not count towards the streak.
    cmd_tx.send(EngineCommand::ToggleTile { row: 3, col: 1 })?;
    for col in 0..4 {
        cmd_tx.send(EngineCommand::ToggleTile { row: 0, col })?;
    }
    drop(cmd_tx);

    for response in resp_rx {
        match response {
            EngineResponse::TopicsChanged(topics) => {
                println!("topic pool: {} topics", topics.len());
            }
            EngineResponse::CardChanged(card) => print_card(&card),
            EngineResponse::KeySaved { has_saved_key } => {
                println!("API key saved: {has_saved_key}");
            }
            EngineResponse::OperationFailed(err) => println!("operation failed: {err}"),
        }
    }

    engine_thread
        .join()
        .map_err(|_| anyhow::anyhow!("engine thread panicked"))?;
    Ok(())
}

fn print_card(card: &BingoCard) {
    if card.is_empty() {
        println!("card: (empty)");
        return;
    }
    println!("card:");
    for row in card.tiles() {
        let cells: Vec<String> = row
            .iter()
            .map(|tile| {
                let mark = if tile.is_checked { "x" } else { " " };
                let label: String = tile.topic.display_text().chars().take(12).collect();
                format!("[{mark}] {label:<12}")
            })
            .collect();
        println!("  {}", cells.join(" "));
    }
    println!("  bingo: {}", if card.has_won() { "YES" } else { "not yet" });
}
