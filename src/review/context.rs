use std::collections::HashMap;
use std::sync::Arc;

use crate::content::ContentLoader;
use crate::error::{Error, Result};
use crate::llm::prompts::Artifact;
use crate::review::project::{extract_project_name, ArchitectureDocs};

/// Supplies the placeholder substitutions for one batch's system prompt.
pub trait ContextResolver: Send + Sync {
    fn resolve(&self, batch: &[Artifact]) -> Result<HashMap<String, String>>;
}

/// No contextual enrichment: placeholders in the template pass through
/// verbatim. Used by the architecture-check mode.
pub struct NoContext;

impl ContextResolver for NoContext {
    fn resolve(&self, _batch: &[Artifact]) -> Result<HashMap<String, String>> {
        Ok(HashMap::new())
    }
}

/// Diff-review enrichment: determines the project a batch of diffs belongs
/// to and loads its architecture description. An unextractable project name
/// or a missing document fails the run; a review without architecture
/// context is never submitted.
pub struct ArchitectureContext {
    docs: ArchitectureDocs,
    loader: Arc<dyn ContentLoader>,
}

impl ArchitectureContext {
    pub fn new(docs: ArchitectureDocs, loader: Arc<dyn ContentLoader>) -> Self {
        Self { docs, loader }
    }
}

impl ContextResolver for ArchitectureContext {
    fn resolve(&self, batch: &[Artifact]) -> Result<HashMap<String, String>> {
        let combined: String = batch
            .iter()
            .map(|a| a.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let project = extract_project_name(&combined).ok_or_else(|| {
            Error::Lookup("could not determine project name from diff content".to_string())
        })?;

        let doc_path = self.docs.resolve(project);
        let description = self.loader.load(&doc_path).map_err(|_| {
            Error::Lookup(format!(
                "no architecture description for project '{}' at {}",
                project,
                doc_path.display()
            ))
        })?;

        tracing::debug!("Resolved architecture description for project: {}", project);

        let mut substitutions = HashMap::new();
        substitutions.insert("ARCHITECTURE_DESCRIPTION".to_string(), description);
        Ok(substitutions)
    }
}
