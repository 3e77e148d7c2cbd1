use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{AppError, PairError, QuestionId};

/// A document written for one pair.
#[derive(Debug, Clone)]
pub struct Converted {
    pub id: QuestionId,
    pub output: PathBuf,
}

/// A pair that could not be converted.
#[derive(Debug, Clone)]
pub struct Failure {
    pub id: QuestionId,
    pub error: PairError,
}

/// Outcome of a conversion run.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    converted: Vec<Converted>,
    failed: Vec<Failure>,
    output_dir: PathBuf,
}

impl ConversionReport {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { converted: Vec::new(), failed: Vec::new(), output_dir }
    }

    pub fn record_success(&mut self, id: QuestionId, output: PathBuf) {
        self.converted.push(Converted { id, output });
    }

    pub fn record_failure(&mut self, id: QuestionId, error: PairError) {
        self.failed.push(Failure { id, error });
    }

    /// Order both lists by identifier.
    pub(crate) fn finish(mut self) -> Self {
        self.converted.sort_by(|a, b| a.id.cmp(&b.id));
        self.failed.sort_by(|a, b| a.id.cmp(&b.id));
        self
    }

    pub fn converted(&self) -> &[Converted] {
        &self.converted
    }

    pub fn failed(&self) -> &[Failure] {
        &self.failed
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Number of identifiers attempted.
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    /// True when at least one pair was found and none failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && !self.converted.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    /// Print the human-readable report.
    pub fn emit(&self) {
        if self.total() == 0 {
            eprintln!("No question-answer pairs found!");
            return;
        }

        for converted in &self.converted {
            println!("✓ Created PDF: {}", converted.output.display());
        }
        for failure in &self.failed {
            eprintln!("✗ {}: {}", failure.id, failure.error);
        }

        println!("Converted {}/{} pair(s)", self.converted.len(), self.total());
        if !self.converted.is_empty() {
            println!("Output folder: {}", self.output_dir.display());
        }
        if !self.failed.is_empty() {
            let ids: Vec<&str> = self.failed.iter().map(|f| f.id.as_str()).collect();
            eprintln!("Failed: {}", ids.join(", "));
        }
    }

    /// Compact single-line JSON form of the report.
    pub fn to_json(&self) -> Result<String, AppError> {
        let view = ReportView {
            converted: self
                .converted
                .iter()
                .map(|c| ConvertedView { id: &c.id, output: c.output.display().to_string() })
                .collect(),
            failed: self
                .failed
                .iter()
                .map(|f| FailureView { id: &f.id, code: f.error.code(), reason: f.error.to_string() })
                .collect(),
            total: self.total(),
            output_dir: self.output_dir.display().to_string(),
        };
        serde_json::to_string(&view).map_err(|e| AppError::Serialization(e.to_string()))
    }
}

#[derive(Serialize)]
struct ReportView<'a> {
    converted: Vec<ConvertedView<'a>>,
    failed: Vec<FailureView<'a>>,
    total: usize,
    output_dir: String,
}

#[derive(Serialize)]
struct ConvertedView<'a> {
    id: &'a QuestionId,
    output: String,
}

#[derive(Serialize)]
struct FailureView<'a> {
    id: &'a QuestionId,
    code: &'static str,
    reason: String,
}
