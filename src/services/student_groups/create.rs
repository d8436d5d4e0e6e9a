use tracing::info;

use super::{StudentGroupService, ensure_code_unique};
use crate::errors::{GradebookError, Result};
use crate::models::student_groups::{entities::StudentGroup, requests::CreateStudentGroupRequest};
use crate::utils::trimmed_option;

pub async fn create_group(
    service: &StudentGroupService,
    req: CreateStudentGroupRequest,
) -> Result<StudentGroup> {
    let storage = service.storage();

    let group = StudentGroup::new(
        req.code.trim(),
        req.specialization.trim(),
        trimmed_option(req.description),
    );
    group.validate()?;
    ensure_code_unique(storage, &group.code, None).await?;

    if !storage.student_groups.save(group.clone()).await? {
        return Err(GradebookError::storage_operation(format!(
            "student group id {} already exists",
            group.id
        )));
    }

    info!("Created student group {} ({})", group.id, group.code);
    Ok(group)
}
