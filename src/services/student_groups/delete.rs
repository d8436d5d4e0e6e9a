use tracing::{debug, info};
use uuid::Uuid;

use super::{StudentGroupService, load_group};
use crate::errors::{GradebookError, Result};

pub async fn delete_group(service: &StudentGroupService, group_id: Uuid) -> Result<()> {
    let storage = service.storage();
    let group = load_group(storage, group_id).await?;

    let members = storage
        .students
        .count(|s| s.group_id == Some(group_id))
        .await?;
    if members > 0 {
        debug!("Refusing to delete group {} with {} student(s)", group.code, members);
        return Err(GradebookError::dependency_conflict(
            "studentGroup.delete.notEmpty",
        ));
    }

    // 先删指派关系，避免留下悬空引用
    let unassigned = storage
        .assignments
        .delete_where(|a| a.student_group_id == group_id)
        .await?;

    if !storage.student_groups.delete(group_id).await? {
        return Err(GradebookError::not_found("studentGroup.notFound"));
    }

    info!(
        "Deleted student group {} ({}), removed {} subject assignment(s)",
        group.id, group.code, unassigned
    );
    Ok(())
}
