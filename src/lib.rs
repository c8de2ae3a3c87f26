pub mod config;
pub mod content;
pub mod error;
pub mod llm;
pub mod review;

pub use config::Config;
pub use content::{ContentLoader, FsLoader};
pub use error::{Error, Result};
pub use llm::{build_provider, Batcher, LlmProvider, ProviderKind};
pub use review::{
    ArchitectureContext, ArchitectureDocs, ContextResolver, NoContext, ReviewPipeline, RunOutcome,
};
