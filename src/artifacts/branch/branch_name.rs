use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::errors::GraphError;

pub const REF_PREFIX: &str = "refs/heads/";

/// Name of a branch under `refs/heads`
///
/// Validated against git's ref naming rules so that a name can never
/// escape the refs directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: impl Into<String>) -> Result<Self, GraphError> {
        let name = name.into();
        // accept the fully qualified form as well
        let name = name
            .strip_prefix(REF_PREFIX)
            .map(str::to_string)
            .unwrap_or(name);

        if name.is_empty() {
            return Err(GraphError::InvalidBranchName(
                "branch name cannot be empty".to_string(),
            ));
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX).map_err(|err| {
            GraphError::InvalidBranchName(format!("invalid branch name regex: {err}"))
        })?;

        if re.is_match(&name) {
            Err(GraphError::InvalidBranchName(name))
        } else {
            Ok(Self(name))
        }
    }

    /// Path of the ref file relative to the git dir
    pub fn as_ref_path(&self) -> String {
        format!("{REF_PREFIX}{}", self.0)
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
