mod report;

use std::path::PathBuf;

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::pairing::{classify, pair_entries};
use crate::domain::paths::document_file_name;
use crate::domain::{AppError, ConverterConfig, Discovery, FilePair, PairError, QuestionId};
use crate::ports::{DocumentRenderer, DocumentSink, QuestionSource, RenderRequest};

pub use report::{ConversionReport, Converted, Failure};

/// Convert every pair found in the source.
pub fn execute_all<S, R, K>(
    ctx: &AppContext<S, R, K>,
    config: &ConverterConfig,
) -> Result<ConversionReport, AppError>
where
    S: QuestionSource,
    R: DocumentRenderer,
    K: DocumentSink,
{
    let rules = config.naming_rules()?;
    let names = ctx.source().list_file_names()?;
    for name in &names {
        debug!(file = %name, "found file");
    }

    let discovery = pair_entries(names.iter().map(String::as_str), &rules);
    info!(pairs = discovery.pairs.len(), incomplete = discovery.incomplete.len(), "discovered questions");

    process(ctx, config, discovery)
}

/// Convert the single pair identified by `id`.
///
/// Reports the same way as [`execute_all`], restricted to one identifier.
pub fn execute_one<S, R, K>(
    ctx: &AppContext<S, R, K>,
    config: &ConverterConfig,
    id: &QuestionId,
) -> Result<ConversionReport, AppError>
where
    S: QuestionSource,
    R: DocumentRenderer,
    K: DocumentSink,
{
    let rules = config.naming_rules()?;
    let names = ctx.source().list_file_names()?;
    let matching = names
        .iter()
        .map(String::as_str)
        .filter(|name| classify(name, &rules).is_some_and(|entry| entry.id == *id));

    let mut discovery = pair_entries(matching, &rules);
    if discovery.is_empty() {
        let extension = rules.extensions.first().map(String::as_str).unwrap_or_default();
        let question = rules.question_file_name(id, extension);
        discovery.incomplete.push((id.clone(), PairError::MissingQuestion(question)));
    }

    process(ctx, config, discovery)
}

fn process<S, R, K>(
    ctx: &AppContext<S, R, K>,
    config: &ConverterConfig,
    discovery: Discovery,
) -> Result<ConversionReport, AppError>
where
    S: QuestionSource,
    R: DocumentRenderer,
    K: DocumentSink,
{
    let mut report = ConversionReport::new(ctx.sink().location());

    for (id, error) in discovery.incomplete {
        info!(%id, %error, "skipping incomplete pair");
        report.record_failure(id, error);
    }

    if !discovery.pairs.is_empty() {
        ctx.sink().prepare()?;
    }

    for pair in discovery.pairs {
        info!(id = %pair.id, "processing question");
        match convert_pair(ctx, config, &pair) {
            Ok(output) => {
                info!(id = %pair.id, output = %output.display(), "created document");
                report.record_success(pair.id, output);
            }
            Err(error) => {
                info!(id = %pair.id, %error, "conversion failed");
                report.record_failure(pair.id, error);
            }
        }
    }

    Ok(report.finish())
}

fn convert_pair<S, R, K>(
    ctx: &AppContext<S, R, K>,
    config: &ConverterConfig,
    pair: &FilePair,
) -> Result<PathBuf, PairError>
where
    S: QuestionSource,
    R: DocumentRenderer,
    K: DocumentSink,
{
    let question_path = ctx.source().resolve_path(&pair.question).display().to_string();
    let answer_path = ctx.source().resolve_path(&pair.answer).display().to_string();

    let read = |name: &str, path: &str| {
        ctx.source().read_file(name).map_err(|e| PairError::UnreadableImage {
            path: path.to_string(),
            reason: e.to_string(),
        })
    };
    let question = read(&pair.question, &question_path)?;
    let answer = read(&pair.answer, &answer_path)?;

    let request = RenderRequest {
        id: &pair.id,
        question_path: &question_path,
        question: &question,
        answer_path: &answer_path,
        answer: &answer,
        page: &config.page,
    };
    let bytes = ctx.renderer().render(&request)?;

    let file_name = document_file_name(&config.output_prefix, &pair.id);
    ctx.sink().write_document(&file_name, &bytes)
}
