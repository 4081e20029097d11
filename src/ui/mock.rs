//! Mock UI implementations for testing.
//!
//! [`MockConfirmer`] answers confirmation prompts from a scripted queue and
//! records every question asked. [`RecordingObserver`] captures download
//! progress events for later assertion.

use std::collections::VecDeque;

use crate::error::Result;

use super::{Confirmer, DownloadObserver};

/// Confirmer that replays scripted answers and records questions.
#[derive(Debug, Default)]
pub struct MockConfirmer {
    answers: VecDeque<bool>,
    questions: Vec<String>,
}

impl MockConfirmer {
    /// Create a confirmer with no scripted answers.
    ///
    /// An unscripted prompt falls back to the prompt's default, mirroring a
    /// user pressing enter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a confirmer that will answer the given sequence in order.
    pub fn with_answers(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            questions: Vec::new(),
        }
    }

    /// Queue one more answer.
    pub fn push_answer(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }

    /// Questions asked so far, in order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}

impl Confirmer for MockConfirmer {
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or(default))
    }
}

/// Observer that records download progress events.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    /// Total reported by `start`, if any.
    pub total: Option<u64>,
    /// Sum of all `advance` calls.
    pub bytes_seen: u64,
    /// Number of `start` calls.
    pub started: usize,
    /// Number of `finish` calls.
    pub finished: usize,
}

impl RecordingObserver {
    /// Create a fresh observer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DownloadObserver for RecordingObserver {
    fn start(&mut self, total_bytes: Option<u64>) {
        self.started += 1;
        self.total = total_bytes;
    }

    fn advance(&mut self, bytes: u64) {
        self.bytes_seen += bytes;
    }

    fn finish(&mut self) {
        self.finished += 1;
    }
}
