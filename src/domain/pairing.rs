//! File-name convention linking question images to answer images.
//!
//! A question is `<digits>.<ext>`; its answer is `<digits><marker>.<ext>`
//! with the same extension. Everything here works on bare file names; the
//! question source port owns the directory they live in.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{PairError, QuestionId};

/// Naming rules applied during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingRules {
    /// Character inserted before the extension to mark an answer file.
    pub answer_marker: char,
    /// Accepted extensions, lowercase, in priority order.
    pub extensions: Vec<String>,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self { answer_marker: 's', extensions: vec!["gif".to_string()] }
    }
}

impl NamingRules {
    /// Priority of an extension, or `None` when it is not accepted.
    fn extension_rank(&self, ext: &str) -> Option<usize> {
        self.extensions.iter().position(|accepted| accepted.eq_ignore_ascii_case(ext))
    }

    /// File name of the question image for `id`.
    pub fn question_file_name(&self, id: &QuestionId, ext: &str) -> String {
        format!("{}.{}", id, ext)
    }

    /// File name of the answer image paired with a question of extension `ext`.
    pub fn answer_file_name(&self, id: &QuestionId, ext: &str) -> String {
        format!("{}{}.{}", id, self.answer_marker, ext)
    }
}

/// Role a file name plays under the naming rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Question,
    Answer,
}

/// A file name recognized as part of a question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairEntry {
    pub id: QuestionId,
    pub kind: EntryKind,
    /// Extension exactly as written in the file name.
    pub extension: String,
}

/// Classify a file name, returning `None` for anything outside the convention.
pub fn classify(file_name: &str, rules: &NamingRules) -> Option<PairEntry> {
    let (stem, extension) = file_name.rsplit_once('.')?;
    rules.extension_rank(extension)?;

    if let Ok(id) = QuestionId::new(stem) {
        return Some(PairEntry { id, kind: EntryKind::Question, extension: extension.to_string() });
    }

    let id_part = stem.strip_suffix(rules.answer_marker)?;
    let id = QuestionId::new(id_part).ok()?;
    Some(PairEntry { id, kind: EntryKind::Answer, extension: extension.to_string() })
}

/// A question image and its answer image, both present in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
}

/// Result of pairing a directory listing.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Complete pairs in ascending identifier order.
    pub pairs: Vec<FilePair>,
    /// Identifiers whose pair is incomplete.
    pub incomplete: Vec<(QuestionId, PairError)>,
}

impl Discovery {
    /// Number of identifiers seen, complete or not.
    pub fn total(&self) -> usize {
        self.pairs.len() + self.incomplete.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Pair up a directory listing.
///
/// When the same identifier appears as a question under several accepted
/// extensions, the extension listed first in the rules wins and the others
/// are ignored.
pub fn pair_entries<'a, I>(file_names: I, rules: &NamingRules) -> Discovery
where
    I: IntoIterator<Item = &'a str>,
{
    let names: BTreeSet<&str> = file_names.into_iter().collect();

    let mut questions: BTreeMap<QuestionId, (usize, String)> = BTreeMap::new();
    let mut answers: BTreeMap<QuestionId, Vec<String>> = BTreeMap::new();

    for name in &names {
        let Some(entry) = classify(name, rules) else {
            continue;
        };
        match entry.kind {
            EntryKind::Question => {
                let rank = rules.extension_rank(&entry.extension).unwrap_or(usize::MAX);
                let keep = questions.get(&entry.id).is_none_or(|(existing, _)| rank < *existing);
                if keep {
                    questions.insert(entry.id, (rank, entry.extension));
                }
            }
            EntryKind::Answer => answers.entry(entry.id).or_default().push(entry.extension),
        }
    }

    let mut discovery = Discovery::default();

    for (id, (_, extension)) in &questions {
        let question = rules.question_file_name(id, extension);
        let answer = rules.answer_file_name(id, extension);
        if names.contains(answer.as_str()) {
            discovery.pairs.push(FilePair { id: id.clone(), question, answer });
        } else {
            discovery.incomplete.push((id.clone(), PairError::MissingAnswer(answer)));
        }
    }

    for (id, extensions) in answers {
        if questions.contains_key(&id) {
            continue;
        }
        let extension = extensions.first().cloned().unwrap_or_default();
        let question = rules.question_file_name(&id, &extension);
        discovery.incomplete.push((id, PairError::MissingQuestion(question)));
    }

    discovery.incomplete.sort_by(|a, b| a.0.cmp(&b.0));
    discovery
}
