pub mod context;
pub mod pipeline;
pub mod project;

pub use context::{ArchitectureContext, ContextResolver, NoContext};
pub use pipeline::{ReviewPipeline, RunOutcome, REPORT_SEPARATOR};
pub use project::{extract_project_name, ArchitectureDocs};
