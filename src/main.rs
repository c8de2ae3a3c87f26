use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use archreview::{
    build_provider, ArchitectureContext, ArchitectureDocs, Batcher, Config, ContentLoader,
    FsLoader, NoContext, ProviderKind, ReviewPipeline, RunOutcome,
};

#[derive(Parser, Debug)]
#[command(name = "archreview")]
#[command(version = "0.1.0")]
#[command(about = "LLM-based architecture consistency checking and code review")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract architecture patterns from a set of source files
    Check {
        /// Source files to analyze
        paths: Vec<PathBuf>,

        /// LLM backend to use (openai or gemini)
        #[arg(long, default_value = "openai")]
        provider: String,

        /// Maximum files per provider call
        #[arg(long, default_value_t = 50)]
        batch_size: usize,

        /// System prompt template
        #[arg(long, default_value = "prompts/architecture-check.md")]
        prompt: PathBuf,
    },

    /// Review diffs against their project's architecture description
    Review {
        /// Diff files to review
        paths: Vec<PathBuf>,

        /// LLM backend to use (openai or gemini)
        #[arg(long, default_value = "openai")]
        provider: String,

        /// Maximum diffs per provider call
        #[arg(long, default_value_t = 1)]
        batch_size: usize,

        /// System prompt template
        #[arg(long, default_value = "prompts/code-review.md")]
        prompt: PathBuf,

        /// Directory holding per-project architecture descriptions
        #[arg(long, default_value = "prompts/architecture-docs")]
        architecture_docs: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("archreview=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env();

    let loader: Arc<dyn ContentLoader> = Arc::new(FsLoader);

    let (pipeline, paths) = match args.command {
        Command::Check {
            paths,
            provider,
            batch_size,
            prompt,
        } => {
            let kind: ProviderKind = provider.parse()?;
            let provider = build_provider(kind, &config)?;
            let pipeline = ReviewPipeline::new(
                provider,
                loader,
                Batcher::new(batch_size)?,
                prompt,
                Box::new(NoContext),
            );
            (pipeline, paths)
        }
        Command::Review {
            paths,
            provider,
            batch_size,
            prompt,
            architecture_docs,
        } => {
            let kind: ProviderKind = provider.parse()?;
            let provider = build_provider(kind, &config)?;
            let resolver =
                ArchitectureContext::new(ArchitectureDocs::new(architecture_docs), loader.clone());
            let pipeline = ReviewPipeline::new(
                provider,
                loader,
                Batcher::new(batch_size)?,
                prompt,
                Box::new(resolver),
            );
            (pipeline, paths)
        }
    };

    match pipeline.run(&paths).await? {
        RunOutcome::Report(report) => println!("{}", report),
        RunOutcome::Empty => println!("Nothing to analyze."),
    }

    Ok(())
}
