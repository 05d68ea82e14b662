use crate::model::language::TopicLanguage;
use crate::model::topic::Topic;

/// Builds the prompt sent to the shortening provider.
/// This module is intentionally dumb: it only formats text.
/// No parsing, no networking, no engine logic.
pub fn build_shortening_prompt(topics: &[Topic], language: TopicLanguage) -> String {
    let mut prompt = String::new();
    push_instructions(&mut prompt, language, topics.len());
    push_topics_block(&mut prompt, topics);
    prompt
}

fn push_instructions(prompt: &mut String, language: TopicLanguage, expected_count: usize) {
    let instructions = match language {
        TopicLanguage::English => format!(
            "You generate concise English bingo tile labels. Respond with a JSON object \
             that matches the schema {{\"topics\": [\"...\"]}} and contains exactly \
             {expected_count} unique entries. Each entry must be a 2-3 word English phrase \
             that preserves the meaning of the matching long topic, keeps the same order, \
             and avoids punctuation."
        ),
        TopicLanguage::German => format!(
            "Du erzeugst kurze deutsche Bingo-Begriffe. Gib ein JSON-Objekt im Schema \
             {{\"topics\": [\"...\"]}} mit genau {expected_count} eindeutigen Einträgen \
             zurück. Jeder Eintrag muss eine deutsche Phrase aus 2-3 Wörtern sein, die die \
             Bedeutung des ursprünglichen Themas beibehält, die Reihenfolge respektiert und \
             keine Satzzeichen enthält."
        ),
        TopicLanguage::Swedish => format!(
            "Du tar fram korta svenska bingofraser. Svara med ett JSON-objekt enligt \
             schemat {{\"topics\": [\"...\"]}} som innehåller exakt {expected_count} unika \
             fraser. Varje fras ska bestå av 2-3 svenska ord, behålla innebörden av sitt \
             ursprungliga ämne, följa samma ordning och sakna skiljetecken."
        ),
    };
    prompt.push_str(&instructions);
}

fn push_topics_block(prompt: &mut String, topics: &[Topic]) {
    prompt.push_str("\n\nLong topics (keep order and meaning):\n");
    for topic in topics {
        prompt.push_str("- ");
        prompt.push_str(&topic.text);
        prompt.push('\n');
    }
}
