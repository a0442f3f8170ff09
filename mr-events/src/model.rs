//! Merge-request webhook payload as delivered by GitLab.
//!
//! Only a handful of fields drive the relay (see [`crate::formatter`]); the
//! rest are decoded so the shape stays faithful to the upstream schema.
//! Every struct defaults missing fields, and fields GitLab is known to send
//! as `null` are either `Option` or fall back to their default.
//!
//! Reference: GitLab docs, "Webhook events" → "Merge request events".

use serde::{Deserialize, Deserializer, Serialize};

use crate::action::MergeRequestAction;

/// Decodes `null` as `T::default()`.
fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

/// One merge-request webhook delivery.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeRequestEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub object_kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user: User,
    #[serde(deserialize_with = "null_as_default")]
    pub project: Project,
    #[serde(deserialize_with = "null_as_default")]
    pub repository: Repository,
    #[serde(deserialize_with = "null_as_default")]
    pub object_attributes: Attributes,
    #[serde(deserialize_with = "null_as_default")]
    pub labels: Vec<Label>,
    #[serde(deserialize_with = "null_as_default")]
    pub changes: Changes,
}

impl MergeRequestEvent {
    /// Classified `object_attributes.action`.
    pub fn action(&self) -> MergeRequestAction {
        MergeRequestAction::from(self.object_attributes.action.as_str())
    }

    /// Assignee display name, empty when the MR is unassigned.
    pub fn assignee_name(&self) -> &str {
        self.object_attributes
            .assignee
            .as_ref()
            .map(|a| a.name.as_str())
            .unwrap_or("")
    }
}

/// Actor who triggered the event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    pub avatar_url: Option<String>,
    pub email: Option<String>,
}

/// Project block; also used for `source`/`target` inside the attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    pub web_url: Option<String>,
    pub avatar_url: Option<String>,
    pub git_ssh_url: Option<String>,
    pub git_http_url: Option<String>,
    pub namespace: Option<String>,
    pub visibility_level: Option<u32>,
    pub path_with_namespace: Option<String>,
    pub default_branch: Option<String>,
    pub homepage: Option<String>,
    pub url: Option<String>,
    pub ssh_url: Option<String>,
    pub http_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub homepage: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Commit {
    pub id: Option<String>,
    pub message: Option<String>,
    /// Raw timestamp string; GitLab has used more than one format.
    pub timestamp: Option<String>,
    pub url: Option<String>,
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitAuthor {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub color: Option<String>,
    pub project_id: Option<u64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub template: bool,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub group_id: Option<u64>,
}

/// `object_attributes`: the merge request itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub id: Option<u64>,
    pub iid: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub target_branch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source_branch: String,
    pub source_project_id: Option<u64>,
    pub target_project_id: Option<u64>,
    pub author_id: Option<u64>,
    pub assignee_id: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub milestone_id: Option<u64>,
    pub state: Option<String>,
    pub merge_status: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub source: Option<Project>,
    pub target: Option<Project>,
    pub last_commit: Option<Commit>,
    #[serde(deserialize_with = "null_as_default")]
    pub work_in_progress: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    pub assignee: Option<Assignee>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Assignee {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
}

/// Field-level diff GitLab attaches to `update` events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Changes {
    pub updated_by_id: Option<Change<u64>>,
    pub updated_at: Option<Change<String>>,
    pub labels: Option<Change<Vec<Label>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Change<T> {
    #[serde(default)]
    pub previous: Option<T>,
    #[serde(default)]
    pub current: Option<T>,
}
