pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{GradebookError, Result};
use crate::models::student_groups::{
    entities::StudentGroup,
    requests::{CreateStudentGroupRequest, UpdateStudentGroupRequest},
    responses::{StudentGroupListItem, StudentGroupWithMembers},
};
use crate::storage::Storage;
use crate::utils::normalize;

pub struct StudentGroupService {
    storage: Arc<Storage>,
}

impl StudentGroupService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Storage {
        &self.storage
    }

    // 学生组列表（含成员数）
    pub async fn list_groups(&self) -> Result<Vec<StudentGroupListItem>> {
        list::list_groups(self).await
    }

    pub async fn get_group(&self, group_id: Uuid) -> Result<StudentGroup> {
        get::get_group(self, group_id).await
    }

    // 学生组及其成员
    pub async fn get_group_with_members(&self, group_id: Uuid) -> Result<StudentGroupWithMembers> {
        get::get_group_with_members(self, group_id).await
    }

    pub async fn create_group(&self, req: CreateStudentGroupRequest) -> Result<StudentGroup> {
        create::create_group(self, req).await
    }

    pub async fn update_group(
        &self,
        group_id: Uuid,
        update: UpdateStudentGroupRequest,
    ) -> Result<StudentGroup> {
        update::update_group(self, group_id, update).await
    }

    // 仅当组内没有学生时允许删除
    pub async fn delete_group(&self, group_id: Uuid) -> Result<()> {
        delete::delete_group(self, group_id).await
    }
}

/// 组代码唯一性检查（大小写不敏感）
pub(crate) async fn ensure_code_unique(
    storage: &Storage,
    code: &str,
    exclude: Option<Uuid>,
) -> Result<()> {
    let wanted = normalize(code);
    let taken = storage
        .student_groups
        .exists(|g| Some(g.id) != exclude && normalize(&g.code) == wanted)
        .await?;
    if taken {
        return Err(GradebookError::validation("studentGroup.code.duplicate"));
    }
    Ok(())
}

pub(crate) async fn load_group(storage: &Storage, group_id: Uuid) -> Result<StudentGroup> {
    storage
        .student_groups
        .get(group_id)
        .await?
        .ok_or_else(|| GradebookError::not_found("studentGroup.notFound"))
}
