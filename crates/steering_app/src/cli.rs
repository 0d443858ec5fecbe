use clap::Parser;
use steering_core::{EditorKind, ProfileRegistry};

/// Fetch the Vue style and testing guides as editor steering documents.
#[derive(Debug, Parser)]
#[command(name = "fetch-docs", after_help = editors_help())]
pub struct Cli {
    /// Set agentic editor for metadata configuration
    #[arg(long, value_name = "EDITOR", default_value = "default")]
    pub editor: String,
}

fn editors_help() -> String {
    let registry = ProfileRegistry::builtin();
    let mut help = String::from("Available editors:\n");
    for kind in EditorKind::ALL {
        let profile = registry.get(kind);
        let fields = profile
            .fields()
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        help.push_str(&format!(
            "  {:<10} - {} ({}, output: {}/)\n",
            kind.key(),
            kind.label(),
            fields,
            profile.output_dir().display()
        ));
    }
    help.push_str("\nExamples:\n  fetch-docs\n  fetch-docs --editor=kiro\n  fetch-docs --editor=windsurf\n  fetch-docs --editor=trae\n");
    help
}
