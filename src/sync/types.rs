use serde::Serialize;

/// Outcome of a template sync, reported to the user or printed as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncResult {
    pub success: bool,
    pub message: String,
    pub new_files: Vec<String>,
    pub modified_files: Vec<String>,
    pub conflicts: Vec<String>,
    /// Declined at the final "Proceed with sync?" prompt, before anything changed.
    #[serde(skip)]
    pub declined: bool,
}

impl SyncResult {
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            new_files: Vec::new(),
            modified_files: Vec::new(),
            conflicts: Vec::new(),
            declined: false,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::succeeded(message)
        }
    }

    pub fn conflicted(conflicts: Vec<String>) -> Self {
        Self {
            conflicts,
            ..Self::failed("Merge conflicts require manual resolution")
        }
    }

    pub fn cancelled() -> Self {
        Self::failed("Sync cancelled by user")
    }

    pub fn declined() -> Self {
        Self {
            declined: true,
            ..Self::failed("Sync cancelled")
        }
    }

    /// Process exit code: a sync the user declined up front is not an error.
    pub fn exit_code(&self) -> i32 {
        if self.success || self.declined {
            0
        } else {
            1
        }
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Changed template paths split by whether they will be synced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncPlan {
    pub to_sync: Vec<String>,
    pub to_skip: Vec<String>,
    pub smart_merge: Vec<String>,
}

impl SyncPlan {
    pub fn is_empty(&self) -> bool {
        self.to_sync.is_empty() && self.to_skip.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    pub dry_run: bool,
    /// Answer yes to every confirmation prompt.
    pub assume_yes: bool,
    pub allow_unrelated_histories: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteSetup {
    Added,
    Updated { previous: String },
    Unchanged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(SyncResult::succeeded("ok").exit_code(), 0);
        assert_eq!(SyncResult::declined().exit_code(), 0);
        assert_eq!(SyncResult::cancelled().exit_code(), 1);
        assert_eq!(SyncResult::conflicted(vec!["a".to_string()]).exit_code(), 1);
        assert!(!SyncResult::declined().success);
    }

    #[test]
    fn test_declined_is_not_serialized() {
        let json = serde_json::to_value(SyncResult::declined()).unwrap();
        assert!(json.get("declined").is_none());
        assert_eq!(json["success"], false);
    }
}
