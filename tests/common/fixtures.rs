// Test fixtures: small corpora with known scores

use faq_search::Document;
use std::path::PathBuf;
use tempfile::TempDir;

fn doc(id: &str, title: &str, body: &str) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
    }
}

/// Five documents covering forms, funnels and badges
#[allow(dead_code)]
pub fn sample_documents() -> Vec<Document> {
    vec![
        doc(
            "badges",
            "Adding trust badges",
            "Drag a badge block under the button. Trust badges near checkout lifted sales 18%.",
        ),
        doc(
            "forms",
            "Shorter forms",
            "Cut optional fields. Short forms raised completion 25% in one test.",
        ),
        doc(
            "funnel",
            "Funnel setup",
            "Add the funnel steps in order.",
        ),
        doc(
            "headlines",
            "Question headlines",
            "A question can work as a headline.",
        ),
        doc(
            "speed",
            "Page speed",
            "Faster pages convert better; load time fell 40%.",
        ),
    ]
}

/// Write `documents` as a corpus file in a fresh temp dir
///
/// The returned TempDir must be kept alive while the file is used.
#[allow(dead_code)]
pub fn write_corpus(documents: &[Document]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("faqs.json");
    let json = serde_json::to_string_pretty(documents).expect("Failed to serialize corpus");
    std::fs::write(&path, json).expect("Failed to write corpus");
    (dir, path)
}
