use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::name::SanitizedName;

/// Branch that new files are committed to.
pub const DEFAULT_BRANCH: &str = "main";

/// A repository as reported by the remote hosting service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[non_exhaustive]
pub struct RemoteRepository {
    /// Numeric identifier assigned by the host.
    pub id: u64,
    /// Repository name, unique per owner.
    pub name: String,
    /// Free-form description; `None` when the host has none.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the repository is marked as a template.
    #[serde(default)]
    pub is_template: bool,
}

impl RemoteRepository {
    /// Creates a repository record.
    pub fn new(id: u64, name: impl Into<String>, description: Option<String>, is_template: bool) -> Self {
        Self { id, name: name.into(), description, is_template }
    }

    /// Returns `true` if this repository may be deleted through the gateway.
    ///
    /// Only template repositories are eligible.
    #[must_use]
    pub fn is_deletable(&self) -> bool {
        self.is_template
    }
}

/// One row of the repository listing returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct RepoSummary {
    /// The host's numeric id, rendered as a string.
    pub id: String,
    /// Repository name.
    pub name: String,
    /// Description, `null` when empty or missing.
    pub description: Option<String>,
}

impl From<&RemoteRepository> for RepoSummary {
    fn from(repo: &RemoteRepository) -> Self {
        Self {
            id: repo.id.to_string(),
            name: repo.name.clone(),
            description: repo.description.clone().filter(|d| !d.is_empty()),
        }
    }
}

/// Kind of a directory entry in a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

/// One entry of a repository directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct RemoteEntry {
    /// File or directory name.
    pub name: String,
    /// Path relative to the repository root.
    pub path: String,
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl RemoteEntry {
    /// Creates a plain file entry at the repository root.
    pub fn file(name: impl Into<String>) -> Self {
        let name = name.into();
        Self { path: name.clone(), name, kind: EntryKind::File }
    }
}

/// Parameters of a "create repository" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct NewRepository {
    pub name: String,
    pub description: String,
    pub auto_init: bool,
    pub private: bool,
    pub is_template: bool,
}

impl NewRepository {
    /// Public, auto-initialized template repository named `name`, with a
    /// description stamped with the Unix time of `now`.
    #[must_use]
    pub fn template(name: &SanitizedName, now: DateTime<Utc>) -> Self {
        Self {
            name: name.as_str().to_owned(),
            description: format!(
                "This is an new repository from source code with number: {}",
                now.timestamp()
            ),
            auto_init: true,
            private: false,
            is_template: true,
        }
    }
}

/// Parameters of a "create file" commit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct NewFile {
    /// Path of the file, `./<name>` for files at the root.
    pub path: String,
    /// Commit message.
    pub message: String,
    /// Raw file contents, not yet encoded for transport.
    pub content: String,
    /// Target branch.
    pub branch: String,
}

impl NewFile {
    /// A file at the repository root whose body is a frontmatter block
    /// dated `now`, committed to [`DEFAULT_BRANCH`].
    #[must_use]
    pub fn frontmatter_stub(name: &SanitizedName, now: DateTime<Utc>) -> Self {
        let path = format!("./{name}");
        Self {
            message: format!("First commit for {path}"),
            content: frontmatter_body(now),
            branch: DEFAULT_BRANCH.to_owned(),
            path,
        }
    }

    /// The path without the leading `./`, as the contents API expects it.
    #[must_use]
    pub fn api_path(&self) -> &str {
        self.path.strip_prefix("./").unwrap_or(&self.path)
    }
}

/// Builds the fixed frontmatter body of a newly added file.
#[must_use]
pub fn frontmatter_body(now: DateTime<Utc>) -> String {
    format!(
        "---\ndate: \"{}\"\ntitle: \"New file was added\"\n---\n\n",
        now.format("%Y-%m-%d %H:%M:%S UTC")
    )
}
