use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GraphError;

impl Repository {
    pub fn branches(&self) -> anyhow::Result<()> {
        for branch in self.refs().list_branches()? {
            writeln!(self.writer(), "{branch}")?;
        }

        Ok(())
    }

    /// Resolve a branch tip, naming the available branches when it is missing
    pub(crate) fn branch_tip(&self, branch: &BranchName) -> anyhow::Result<ObjectId> {
        match self.refs().resolve_branch_tip(branch) {
            Ok(tip) => Ok(tip),
            Err(err @ GraphError::RefNotFound { .. }) => {
                let available = self
                    .refs()
                    .list_branches()?
                    .iter()
                    .map(|b| b.to_string())
                    .collect::<Vec<_>>();

                if available.is_empty() {
                    Err(anyhow::Error::new(err).context("the repository has no loose branches"))
                } else {
                    Err(anyhow::Error::new(err)
                        .context(format!("available branches: {}", available.join(", "))))
                }
            }
            Err(err) => Err(err.into()),
        }
    }
}
