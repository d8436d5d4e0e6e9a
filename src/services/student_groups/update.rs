use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::{StudentGroupService, ensure_code_unique, load_group};
use crate::errors::{GradebookError, Result};
use crate::models::student_groups::{entities::StudentGroup, requests::UpdateStudentGroupRequest};
use crate::utils::trimmed_option;

pub async fn update_group(
    service: &StudentGroupService,
    group_id: Uuid,
    update: UpdateStudentGroupRequest,
) -> Result<StudentGroup> {
    let storage = service.storage();
    let mut group = load_group(storage, group_id).await?;

    let code_changed = match update.code {
        Some(code) => {
            group.code = code.trim().to_string();
            true
        }
        None => false,
    };
    if let Some(specialization) = update.specialization {
        group.specialization = specialization.trim().to_string();
    }
    if update.description.is_some() {
        group.description = trimmed_option(update.description);
    }

    group.validate()?;
    if code_changed {
        ensure_code_unique(storage, &group.code, Some(group.id)).await?;
    }

    group.updated_at = Utc::now();
    if !storage.student_groups.update(group.clone()).await? {
        return Err(GradebookError::not_found("studentGroup.notFound"));
    }

    info!("Updated student group {}", group.id);
    Ok(group)
}
