use std::collections::HashMap;
use std::path::PathBuf;

/// One loaded artifact: the path it was loaded from and its full text.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

/// Replace every `{{NAME}}` occurrence for each key in `substitutions`.
/// Placeholders with no matching key are left verbatim, so a template used
/// without contextual enrichment passes through unchanged.
pub fn render_system_prompt(template: &str, substitutions: &HashMap<String, String>) -> String {
    let mut rendered = template.to_string();
    for (name, value) in substitutions {
        let marker = format!("{{{{{}}}}}", name);
        rendered = rendered.replace(&marker, value);
    }
    rendered
}

/// Concatenate artifact bodies in input order, each prefixed with its path
/// for traceability and fenced so file boundaries survive inside the prompt.
pub fn build_user_prompt(artifacts: &[Artifact]) -> String {
    let parts: Vec<String> = artifacts
        .iter()
        .map(|a| {
            format!(
                "File Path: {}\n```\n{}\n```",
                a.path.display(),
                a.content
            )
        })
        .collect();

    parts.join("\n---\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_every_occurrence() {
        let mut subs = HashMap::new();
        subs.insert("ARCHITECTURE_DESCRIPTION".to_string(), "X".to_string());

        let template = "Context: {{ARCHITECTURE_DESCRIPTION}}\nAgain: {{ARCHITECTURE_DESCRIPTION}}";
        let rendered = render_system_prompt(template, &subs);
        assert_eq!(rendered, "Context: X\nAgain: X");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        let mut subs = HashMap::new();
        subs.insert("ARCHITECTURE_DESCRIPTION".to_string(), "X".to_string());

        let template = "{{ARCHITECTURE_DESCRIPTION}} and {{OTHER}}";
        let rendered = render_system_prompt(template, &subs);
        assert_eq!(rendered, "X and {{OTHER}}");
    }

    #[test]
    fn test_render_without_substitutions_is_verbatim() {
        let template = "review per {{STYLE_GUIDE}}";
        assert_eq!(render_system_prompt(template, &HashMap::new()), template);
    }

    #[test]
    fn test_user_prompt_preserves_order_and_separators() {
        let artifacts = vec![
            Artifact {
                path: PathBuf::from("a.py"),
                content: "print(1)".to_string(),
            },
            Artifact {
                path: PathBuf::from("b.py"),
                content: "print(2)".to_string(),
            },
        ];

        let prompt = build_user_prompt(&artifacts);
        assert_eq!(
            prompt,
            "File Path: a.py\n```\nprint(1)\n```\n---\nFile Path: b.py\n```\nprint(2)\n```"
        );
    }

    #[test]
    fn test_user_prompt_single_artifact_has_no_separator() {
        let artifacts = vec![Artifact {
            path: PathBuf::from("only.py"),
            content: "pass".to_string(),
        }];
        assert!(!build_user_prompt(&artifacts).contains("\n---\n"));
    }
}
