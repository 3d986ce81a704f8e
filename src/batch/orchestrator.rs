use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use rayon::prelude::*;

use crate::{
    assets::loader::AssetLoader,
    batch::{
        archive::{ArchiveSink, EntryNames},
        manifest::{BatchReport, MANIFEST_NAME, ManifestEntry},
    },
    catalog::source::Catalog,
    compose::naming::ExportFormat,
    foundation::error::{LayerstackError, LayerstackResult},
    model::input::CompositionInput,
    render::variant::{RenderedVariant, render_variant},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// How a batch is rendered.
pub struct BatchOptions {
    /// Output document format.
    pub format: ExportFormat,
    /// Render chunks of variants on a rayon pool.
    pub parallel: bool,
    /// Variants per parallel chunk; cancellation is checked between chunks.
    pub chunk_size: usize,
    /// Worker count; `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Png,
            parallel: false,
            chunk_size: 16,
            threads: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
/// Shared flag asking a running batch to stop.
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Render every input into `sink`, in input order, then append `manifest.json`.
///
/// A failing variant becomes an `error_<index>.txt` entry and never stops the batch. On
/// cancellation the variants produced so far and the manifest are still written. Only sink
/// and pool failures are returned as errors.
#[tracing::instrument(
    level = "info",
    skip_all,
    fields(variants = inputs.len(), format = ?options.format, parallel = options.parallel)
)]
pub fn run_batch(
    catalog: &dyn Catalog,
    inputs: &[CompositionInput],
    loader: &mut AssetLoader,
    sink: &mut dyn ArchiveSink,
    options: &BatchOptions,
    cancel: &CancelToken,
) -> LayerstackResult<BatchReport> {
    let mut report = BatchReport::default();
    let mut names = EntryNames::default();

    if !options.parallel {
        for (index, input) in inputs.iter().enumerate() {
            if cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }
            let result = render_variant(catalog, input, options.format, loader);
            write_entry(sink, &mut names, &mut report, index, input, result)?;
        }
    } else {
        let pool = build_thread_pool(options.threads)?;
        let chunk_size = options.chunk_size.max(1);
        for (chunk_index, chunk) in inputs.chunks(chunk_size).enumerate() {
            if cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }
            let base = chunk_index * chunk_size;
            let rendered = pool.install(|| {
                chunk
                    .par_iter()
                    .map_init(
                        || loader.fork(),
                        |worker_loader, input| {
                            render_variant(catalog, input, options.format, worker_loader)
                        },
                    )
                    .collect::<Vec<_>>()
            });
            for (offset, (input, result)) in chunk.iter().zip(rendered).enumerate() {
                write_entry(sink, &mut names, &mut report, base + offset, input, result)?;
            }
        }
    }

    let manifest = serde_json::to_vec_pretty(&report)?;
    sink.append(MANIFEST_NAME, &manifest)?;
    tracing::info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        cancelled = report.cancelled,
        "batch finished"
    );
    Ok(report)
}

fn write_entry(
    sink: &mut dyn ArchiveSink,
    names: &mut EntryNames,
    report: &mut BatchReport,
    index: usize,
    input: &CompositionInput,
    result: LayerstackResult<RenderedVariant>,
) -> LayerstackResult<()> {
    match result {
        Ok(rendered) => {
            let name = names.claim(&rendered.file_name);
            sink.append(&name, &rendered.output.bytes)?;
            report
                .entries
                .push(ManifestEntry::rendered(index, name, &rendered.output.bytes));
        }
        Err(err) => {
            tracing::warn!(index, product = %input.product_id, error = %err, "variant failed");
            let name = names.claim(&format!("error_{index}.txt"));
            let variant = serde_json::to_string(input)?;
            let text = format!("Error generating image: {variant}\n{err}\n");
            sink.append(&name, text.as_bytes())?;
            report.entries.push(ManifestEntry::failed(
                index,
                name,
                err.to_string(),
                err.kind(),
            ));
        }
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> LayerstackResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(LayerstackError::invalid_metadata(
            "batch 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| LayerstackError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/batch/orchestrator.rs"]
mod tests;
