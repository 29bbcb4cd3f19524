use std::fmt::Write;

use daybook_protocol::{Categorized, JournalResult, RankedEntity};

/// Console layout for a single journal.
pub fn render_journal(result: &JournalResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "======= Document Sentiment =======");
    let _ = writeln!(out, "Overall: {}", result.document_sentiment);

    if !result.sentences.is_empty() {
        let _ = writeln!(out, "\n======= Sentence Sentiment =======");
        for (index, sentence) in result.sentences.iter().enumerate() {
            let _ = writeln!(out, "Sentence {index}: {}", sentence.weight);
        }
    }

    let _ = writeln!(out, "======== Entity Sentiment =======");
    render_categories(&mut out, &result.entities);
    out
}

/// Console layout for a cross-journal summary.
pub fn render_summary(summary: &Categorized<Vec<RankedEntity>>, journals: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "======= Top Emotion Effectors ({journals} journals) =======");
    render_categories(&mut out, summary);
    out
}

fn render_categories(out: &mut String, entities: &Categorized<Vec<RankedEntity>>) {
    for (position, (category, items)) in entities.iter().enumerate() {
        if position > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}:", category.title());
        for item in items {
            let _ = writeln!(out, "{}: {}", item.name, item.weight);
        }
    }
}
