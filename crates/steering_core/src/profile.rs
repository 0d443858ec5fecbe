use std::fmt;
use std::path::{Path, PathBuf};

use crate::frontmatter::apply_frontmatter;

/// Agentic editors with a built-in profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorKind {
    Kiro,
    Windsurf,
    Trae,
    Default,
}

impl EditorKind {
    pub const ALL: [EditorKind; 4] = [
        EditorKind::Kiro,
        EditorKind::Windsurf,
        EditorKind::Trae,
        EditorKind::Default,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            EditorKind::Kiro => "kiro",
            EditorKind::Windsurf => "windsurf",
            EditorKind::Trae => "trae",
            EditorKind::Default => "default",
        }
    }

    /// Human-readable label used in the CLI help.
    pub fn label(self) -> &'static str {
        match self {
            EditorKind::Kiro => "Kiro editor",
            EditorKind::Windsurf => "Windsurf editor",
            EditorKind::Trae => "Trae editor",
            EditorKind::Default => "Generic configuration",
        }
    }
}

impl fmt::Display for EditorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Frontmatter fields and output directory for one editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorProfile {
    kind: EditorKind,
    fields: Vec<(String, String)>,
    output_dir: PathBuf,
}

impl EditorProfile {
    pub fn new<K, V>(
        kind: EditorKind,
        fields: impl IntoIterator<Item = (K, V)>,
        output_dir: impl Into<PathBuf>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            kind,
            fields: fields
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            output_dir: output_dir.into(),
        }
    }

    pub fn kind(&self) -> EditorKind {
        self.kind
    }

    /// Header fields in emission order.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Output directory, relative to the output root.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Immutable set of editor profiles, built once at startup.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: Vec<EditorProfile>,
    default: EditorProfile,
}

impl ProfileRegistry {
    pub fn builtin() -> Self {
        Self {
            profiles: vec![
                EditorProfile::new(EditorKind::Kiro, [("inclusion", "always")], ".kiro/steering"),
                EditorProfile::new(
                    EditorKind::Windsurf,
                    [("trigger", "always-on")],
                    ".windsurf/rules",
                ),
                EditorProfile::new(EditorKind::Trae, [("alwaysApply", "true")], ".trae/rules"),
            ],
            default: EditorProfile::new(EditorKind::Default, [("inclusion", "always")], "docs"),
        }
    }

    pub fn get(&self, kind: EditorKind) -> &EditorProfile {
        self.profiles
            .iter()
            .find(|profile| profile.kind == kind)
            .unwrap_or(&self.default)
    }

    /// Looks up a profile by CLI key; unknown keys get the default profile.
    pub fn resolve(&self, key: &str) -> &EditorProfile {
        match EditorKind::from_key(key) {
            Some(kind) => self.get(kind),
            None => &self.default,
        }
    }

    pub fn default_profile(&self) -> &EditorProfile {
        &self.default
    }

    /// Key-based form of [`apply_frontmatter`].
    pub fn transform(&self, content: &str, title: &str, key: &str) -> String {
        apply_frontmatter(content, title, self.resolve(key))
    }
}
