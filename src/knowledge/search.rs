//! Keyword search with line context.
//!
//! Every line containing at least one query word becomes a snippet made of
//! that line plus two lines either side. Snippets are ranked by how many
//! distinct query words the matching line contains.

use std::fmt;

use serde::Serialize;

use super::error::{KnowledgeError, KnowledgeResult};
use super::store::Document;

/// Lines of context kept on each side of a matching line.
pub const CONTEXT_LINES: usize = 2;

/// Default number of snippets rendered.
pub const DEFAULT_MAX_SECTIONS: usize = 10;

/// Default budget for rendered snippet text, in characters.
pub const DEFAULT_MAX_CHARS: usize = 8000;

/// A matching line with its surrounding context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snippet {
    pub source: String,
    /// Zero-based index of the matching line.
    pub line: usize,
    pub content: String,
    /// Number of distinct query words in the matching line.
    pub relevance: usize,
}

impl Snippet {
    fn render(&self) -> String {
        format!("\n[From {}]\n{}\n", self.source, self.content)
    }
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The knowledge base is empty.
    NoDocuments,
    /// Nothing matched; lists what could have been searched.
    NoMatches {
        query: String,
        available: Vec<String>,
    },
    /// `total_matches` lines matched; `snippets` are the ones that fit.
    Found {
        total_matches: usize,
        snippets: Vec<Snippet>,
    },
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocuments => write!(
                f,
                "No documents loaded in knowledge base. Please load documents first."
            ),
            Self::NoMatches { query, available } => write!(
                f,
                "No specific matches found for '{}'. Available documents: {}",
                query,
                available.join(", ")
            ),
            Self::Found {
                total_matches,
                snippets,
            } => {
                writeln!(f, "Found {total_matches} relevant sections:")?;
                for snippet in snippets {
                    f.write_str(&snippet.render())?;
                }
                if snippets.is_empty() {
                    write!(f, "\n(no section fits within the character limit)")?;
                }
                Ok(())
            }
        }
    }
}

/// Lower-cased, de-duplicated query words in order of first appearance.
pub fn query_words(query: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for word in query.to_lowercase().split_whitespace() {
        if !words.iter().any(|w| w == word) {
            words.push(word.to_string());
        }
    }
    words
}

/// Search `documents` for `query`.
///
/// Snippets are stable-sorted by descending relevance, so ties keep document
/// order and then line order. At most `max_sections` are rendered, stopping
/// at the first one whose rendered text would push the total past
/// `max_chars` characters.
///
/// # Errors
///
/// [`KnowledgeError::Validation`] for a blank query or a zero `max_chars`.
pub fn search_documents(
    documents: &[Document],
    query: &str,
    max_chars: usize,
    max_sections: usize,
) -> KnowledgeResult<SearchOutcome> {
    let words = query_words(query);
    if words.is_empty() {
        return Err(KnowledgeError::validation("query must contain at least one word"));
    }
    if max_chars == 0 {
        return Err(KnowledgeError::validation("max_chars must be positive"));
    }

    if documents.is_empty() {
        return Ok(SearchOutcome::NoDocuments);
    }

    let mut matches = Vec::new();
    for doc in documents {
        let lines: Vec<&str> = doc.content.lines().collect();
        for (index, line) in lines.iter().enumerate() {
            let lower = line.to_lowercase();
            let relevance = words.iter().filter(|w| lower.contains(w.as_str())).count();
            if relevance == 0 {
                continue;
            }
            let start = index.saturating_sub(CONTEXT_LINES);
            let end = (index + CONTEXT_LINES + 1).min(lines.len());
            matches.push(Snippet {
                source: doc.name.clone(),
                line: index,
                content: lines[start..end].join("\n"),
                relevance,
            });
        }
    }

    if matches.is_empty() {
        return Ok(SearchOutcome::NoMatches {
            query: query.to_string(),
            available: documents.iter().map(Document::describe).collect(),
        });
    }

    matches.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    let total_matches = matches.len();

    let mut used = 0;
    let mut snippets = Vec::new();
    for snippet in matches.into_iter().take(max_sections) {
        let size = snippet.render().chars().count();
        if used + size > max_chars {
            break;
        }
        used += size;
        snippets.push(snippet);
    }

    Ok(SearchOutcome::Found {
        total_matches,
        snippets,
    })
}
