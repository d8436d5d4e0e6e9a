pub mod create;
pub mod criteria;
pub mod delete;
pub mod get;
pub mod update;

use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{GradebookError, Result};
use crate::models::{
    grade_criteria::{
        entities::GradeCriterion,
        requests::{CreateGradeCriterionRequest, UpdateGradeCriterionRequest},
        responses::GradeCriterionUsage,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, UpdateSubjectRequest},
        responses::SubjectWithCriteria,
    },
};
use crate::storage::Storage;
use crate::utils::normalize;

/// 课程与评分标准服务
pub struct SubjectService {
    storage: Arc<Storage>,
}

impl SubjectService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Storage {
        &self.storage
    }

    pub async fn list_subjects(&self) -> Result<Vec<Subject>> {
        get::list_subjects(self).await
    }

    pub async fn get_subject(&self, subject_id: Uuid) -> Result<Subject> {
        get::get_subject(self, subject_id).await
    }

    // 课程及其评分标准
    pub async fn get_subject_with_criteria(&self, subject_id: Uuid) -> Result<SubjectWithCriteria> {
        get::get_subject_with_criteria(self, subject_id).await
    }

    pub async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject> {
        create::create_subject(self, req).await
    }

    pub async fn update_subject(
        &self,
        subject_id: Uuid,
        update: UpdateSubjectRequest,
    ) -> Result<Subject> {
        update::update_subject(self, subject_id, update).await
    }

    // 仅当课程没有评分标准时允许删除
    pub async fn delete_subject(&self, subject_id: Uuid) -> Result<()> {
        delete::delete_subject(self, subject_id).await
    }

    /// 评分标准管理
    pub async fn list_criteria(&self, subject_id: Uuid) -> Result<Vec<GradeCriterionUsage>> {
        criteria::list_criteria(self, subject_id).await
    }

    pub async fn add_criterion(
        &self,
        subject_id: Uuid,
        req: CreateGradeCriterionRequest,
    ) -> Result<GradeCriterion> {
        criteria::add_criterion(self, subject_id, req).await
    }

    pub async fn update_criterion(
        &self,
        criterion_id: Uuid,
        update: UpdateGradeCriterionRequest,
    ) -> Result<GradeCriterion> {
        criteria::update_criterion(self, criterion_id, update).await
    }

    // 仅当没有成绩引用时允许删除
    pub async fn delete_criterion(&self, criterion_id: Uuid) -> Result<()> {
        criteria::delete_criterion(self, criterion_id).await
    }
}

/// 课程名唯一性检查（大小写不敏感）
pub(crate) async fn ensure_name_unique(
    storage: &Storage,
    name: &str,
    exclude: Option<Uuid>,
) -> Result<()> {
    let wanted = normalize(name);
    let taken = storage
        .subjects
        .exists(|s| Some(s.id) != exclude && normalize(&s.name) == wanted)
        .await?;
    if taken {
        return Err(GradebookError::validation("subject.name.duplicate"));
    }
    Ok(())
}

pub(crate) async fn load_subject(storage: &Storage, subject_id: Uuid) -> Result<Subject> {
    storage
        .subjects
        .get(subject_id)
        .await?
        .ok_or_else(|| GradebookError::not_found("subject.notFound"))
}

pub(crate) async fn load_criterion(storage: &Storage, criterion_id: Uuid) -> Result<GradeCriterion> {
    storage
        .grade_criteria
        .get(criterion_id)
        .await?
        .ok_or_else(|| GradebookError::not_found("gradeCriterion.notFound"))
}
