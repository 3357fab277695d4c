use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::graph::reachability::ReachabilityChecker;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;

impl Repository {
    /// Report whether `target` is reachable from the tip of `branch`
    pub fn contains(
        &self,
        branch: &BranchName,
        target: &ObjectId,
        dedup: bool,
    ) -> anyhow::Result<bool> {
        let tip = self.branch_tip(branch)?;
        let found = ReachabilityChecker::new(self.database(), dedup).contains(&tip, target)?;

        if found {
            let message = format!(
                "object {target} is reachable from branch '{branch}' (tip {})",
                tip.to_short_oid()
            );
            writeln!(self.writer(), "{}", message.green())?;
        } else {
            writeln!(self.writer(), "{}", not_found_message(target, branch).yellow())?;
        }

        Ok(found)
    }
}

pub(crate) fn not_found_message(target: &ObjectId, branch: &BranchName) -> String {
    format!("target object {target} was not found in branch '{branch}'")
}
