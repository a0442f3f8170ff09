use std::fmt;

/// Subtype of a merge-request event (`object_attributes.action`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeRequestAction {
    Open,
    Close,
    Reopen,
    Update,
    Approved,
    Unapproved,
    Merge,
    /// Anything GitLab sends that we do not know, including an empty action.
    Other(String),
}

impl MergeRequestAction {
    /// Wire spelling of the action.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Reopen => "reopen",
            Self::Update => "update",
            Self::Approved => "approved",
            Self::Unapproved => "unapproved",
            Self::Merge => "merge",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for MergeRequestAction {
    fn from(raw: &str) -> Self {
        match raw {
            "open" => Self::Open,
            "close" => Self::Close,
            "reopen" => Self::Reopen,
            "update" => Self::Update,
            "approved" => Self::Approved,
            "unapproved" => Self::Unapproved,
            "merge" => Self::Merge,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for MergeRequestAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_actions_parse_and_print_back() {
        for raw in [
            "open",
            "close",
            "reopen",
            "update",
            "approved",
            "unapproved",
            "merge",
        ] {
            let action = MergeRequestAction::from(raw);
            assert!(!matches!(action, MergeRequestAction::Other(_)), "{raw}");
            assert_eq!(action.to_string(), raw);
        }
    }

    #[test]
    fn unknown_actions_are_kept_verbatim() {
        assert_eq!(
            MergeRequestAction::from("Merge"),
            MergeRequestAction::Other("Merge".into())
        );
        assert_eq!(MergeRequestAction::from("").as_str(), "");
    }
}
