//! Chat message templates, one per action worth announcing.
//!
//! Each template picks a fixed set of fields; absent fields render as empty
//! strings and formatting never fails. Output is plain text.
//!
//! The wording is English on purpose; the upstream relay used Chinese labels
//! (`项目：`, `分配给：`, ...). Emoji markers and field order are unchanged.

use crate::model::MergeRequestEvent;

const OPENED_MARKER: &str = "✨";
const APPROVED_MARKER: &str = "🍻";
const MERGED_MARKER: &str = "🚀";

/// Message for a freshly opened MR, description included.
pub fn opened_message(event: &MergeRequestEvent) -> String {
    let attrs = &event.object_attributes;
    format!(
        "{OPENED_MARKER} {user} opened a new Merge Request: {title}\n\
         Project: {project}\n\
         Source branch: {source}\n\
         Target branch: {target}\n\
         Assignee: {assignee}\n\
         Description: {description}\n\
         Link: {url}\n",
        user = event.user.name,
        title = attrs.title,
        project = event.project.name,
        source = attrs.source_branch,
        target = attrs.target_branch,
        assignee = event.assignee_name(),
        description = attrs.description,
        url = attrs.url,
    )
}

pub fn approved_message(event: &MergeRequestEvent) -> String {
    summary_message(APPROVED_MARKER, "approved", event)
}

pub fn merged_message(event: &MergeRequestEvent) -> String {
    summary_message(MERGED_MARKER, "merged", event)
}

/// Shared layout of the approved/merged templates (no description).
fn summary_message(marker: &str, verb: &str, event: &MergeRequestEvent) -> String {
    let attrs = &event.object_attributes;
    format!(
        "{marker} {user} {verb} Merge Request: {title}\n\
         Project: {project}\n\
         Source branch: {source}\n\
         Target branch: {target}\n\
         Assignee: {assignee}\n\
         Link: {url}\n",
        user = event.user.name,
        title = attrs.title,
        project = event.project.name,
        source = attrs.source_branch,
        target = attrs.target_branch,
        assignee = event.assignee_name(),
        url = attrs.url,
    )
}
