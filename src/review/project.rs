use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;

static PROJECT_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Find the project a diff belongs to from the first `examples/<name>/`
/// path segment in its text. Only the first match counts.
pub fn extract_project_name(diff_text: &str) -> Option<&str> {
    let pattern = PROJECT_PATTERN
        .get_or_init(|| Regex::new(r"examples/([^/\s]+)/").expect("project name pattern is valid"));

    pattern
        .captures(diff_text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Path convention for per-project architecture descriptions:
/// `<root>/<project-name>-example-output.md`.
pub struct ArchitectureDocs {
    root: PathBuf,
}

impl ArchitectureDocs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, project: &str) -> PathBuf {
        self.root.join(format!("{}-example-output.md", project))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_project_name() {
        let diff = "diff --git a/examples/foo/bar.py b/examples/foo/bar.py";
        assert_eq!(extract_project_name(diff), Some("foo"));
    }

    #[test]
    fn test_extract_no_match() {
        assert_eq!(extract_project_name("no match here"), None);
    }

    #[test]
    fn test_extract_first_match_wins() {
        let diff = "a/examples/first/x.py\nb/examples/second/y.py";
        assert_eq!(extract_project_name(diff), Some("first"));
    }

    #[test]
    fn test_extract_requires_trailing_slash() {
        assert_eq!(extract_project_name("see examples/readme.md"), None);
    }

    #[test]
    fn test_doc_path_convention() {
        let docs = ArchitectureDocs::new("prompts/architecture-docs");
        assert_eq!(
            docs.resolve("widget"),
            PathBuf::from("prompts/architecture-docs/widget-example-output.md")
        );
    }
}
