use std::path::PathBuf;
use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};

use crate::content::ContentLoader;
use crate::error::Result;
use crate::llm::prompts::{build_user_prompt, render_system_prompt, Artifact};
use crate::llm::{Batcher, LlmProvider};
use crate::review::context::ContextResolver;

pub const REPORT_SEPARATOR: &str = "\n\n---\n\n";

/// Outcome of one pipeline run. An empty input list is a successful no-op,
/// not an error, and produces no report.
#[derive(Debug)]
pub enum RunOutcome {
    Report(String),
    Empty,
}

pub struct ReviewPipeline {
    provider: Arc<dyn LlmProvider>,
    loader: Arc<dyn ContentLoader>,
    batcher: Batcher,
    template_path: PathBuf,
    resolver: Box<dyn ContextResolver>,
}

impl ReviewPipeline {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        loader: Arc<dyn ContentLoader>,
        batcher: Batcher,
        template_path: PathBuf,
        resolver: Box<dyn ContextResolver>,
    ) -> Self {
        Self {
            provider,
            loader,
            batcher,
            template_path,
            resolver,
        }
    }

    /// Process every batch in order and join the responses. Any failure
    /// aborts the whole run; there is no partial report.
    pub async fn run(&self, inputs: &[PathBuf]) -> Result<RunOutcome> {
        if inputs.is_empty() {
            tracing::info!("No artifacts supplied, nothing to analyze");
            return Ok(RunOutcome::Empty);
        }

        let template = self.loader.load(&self.template_path)?;

        let batches = self.batcher.split(inputs);
        tracing::info!(
            "Analyzing {} artifacts in {} batches via {}",
            inputs.len(),
            batches.len(),
            self.provider.name()
        );

        let pb = ProgressBar::new(batches.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} batches")
                .unwrap()
                .progress_chars("#>-"),
        );

        let mut sections = Vec::with_capacity(batches.len());

        for batch in &batches {
            let artifacts = batch
                .iter()
                .map(|path| {
                    Ok(Artifact {
                        path: path.clone(),
                        content: self.loader.load(path)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            let substitutions = self.resolver.resolve(&artifacts)?;
            let system_prompt = render_system_prompt(&template, &substitutions);
            let user_prompt = build_user_prompt(&artifacts);

            let text = self.provider.generate(&system_prompt, &user_prompt).await?;
            sections.push(text);
            pb.inc(1);
        }

        pb.finish_with_message("Analysis complete");
        Ok(RunOutcome::Report(sections.join(REPORT_SEPARATOR)))
    }
}
