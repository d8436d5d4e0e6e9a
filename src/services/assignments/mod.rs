//! 学生组与课程的指派关系

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::errors::{GradebookError, Result};
use crate::models::assignments::{
    entities::StudentGroupSubjectAssignment,
    requests::AssignSubjectRequest,
    responses::{AssignedGroup, AssignedSubject},
};
use crate::services::student_groups::load_group;
use crate::services::subjects::load_subject;
use crate::storage::Storage;
use crate::utils::require_id;

pub struct AssignmentService {
    storage: Arc<Storage>,
}

impl AssignmentService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    /// 为学生组指派课程，两端都必须存在且不能重复指派
    pub async fn assign_subject(
        &self,
        req: AssignSubjectRequest,
    ) -> Result<StudentGroupSubjectAssignment> {
        require_id(req.student_group_id, "assignment.group.required")?;
        require_id(req.subject_id, "assignment.subject.required")?;

        let group = load_group(&self.storage, req.student_group_id).await?;
        let subject = load_subject(&self.storage, req.subject_id).await?;

        let duplicate = self
            .storage
            .assignments
            .exists(|a| a.student_group_id == group.id && a.subject_id == subject.id)
            .await?;
        if duplicate {
            return Err(GradebookError::validation("assignment.duplicate"));
        }

        let assignment = StudentGroupSubjectAssignment::new(group.id, subject.id);
        if !self.storage.assignments.save(assignment.clone()).await? {
            return Err(GradebookError::storage_operation(format!(
                "assignment id {} already exists",
                assignment.id
            )));
        }

        info!("Assigned subject {} to group {}", subject.name, group.code);
        Ok(assignment)
    }

    pub async fn unassign(&self, assignment_id: Uuid) -> Result<()> {
        if !self.storage.assignments.delete(assignment_id).await? {
            return Err(GradebookError::not_found("assignment.notFound"));
        }
        info!("Removed assignment {}", assignment_id);
        Ok(())
    }

    // 学生组的课程
    pub async fn subjects_of_group(&self, group_id: Uuid) -> Result<Vec<AssignedSubject>> {
        load_group(&self.storage, group_id).await?;

        let assignments = self
            .storage
            .assignments
            .find(|a| a.student_group_id == group_id)
            .await?;
        let subjects = self.storage.subjects.get_all().await?;

        let mut result: Vec<AssignedSubject> = assignments
            .into_iter()
            .filter_map(|a| {
                subjects
                    .iter()
                    .find(|s| s.id == a.subject_id)
                    .map(|s| AssignedSubject {
                        assignment_id: a.id,
                        subject: s.clone(),
                    })
            })
            .collect();
        result.sort_by_cached_key(|a| a.subject.name.to_lowercase());
        Ok(result)
    }

    // 修读某课程的学生组
    pub async fn groups_of_subject(&self, subject_id: Uuid) -> Result<Vec<AssignedGroup>> {
        load_subject(&self.storage, subject_id).await?;

        let assignments = self
            .storage
            .assignments
            .find(|a| a.subject_id == subject_id)
            .await?;
        let groups = self.storage.student_groups.get_all().await?;

        let mut result: Vec<AssignedGroup> = assignments
            .into_iter()
            .filter_map(|a| {
                groups
                    .iter()
                    .find(|g| g.id == a.student_group_id)
                    .map(|g| AssignedGroup {
                        assignment_id: a.id,
                        group: g.clone(),
                    })
            })
            .collect();
        result.sort_by_cached_key(|a| a.group.code.to_lowercase());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::student_groups::entities::StudentGroup;
    use crate::models::subjects::entities::Subject;

    async fn setup() -> (AssignmentService, StudentGroup, Subject, Subject) {
        let storage = Arc::new(Storage::in_memory());
        let group = StudentGroup::new("INF-1", "Informatics", None);
        let algebra = Subject::new("Algebra");
        let biology = Subject::new("Biology");
        storage.student_groups.save(group.clone()).await.unwrap();
        storage.subjects.save(biology.clone()).await.unwrap();
        storage.subjects.save(algebra.clone()).await.unwrap();
        (AssignmentService::new(storage), group, algebra, biology)
    }

    #[tokio::test]
    async fn test_assign_and_list_both_directions() {
        let (svc, group, algebra, biology) = setup().await;
        svc.assign_subject(AssignSubjectRequest {
            student_group_id: group.id,
            subject_id: biology.id,
        })
        .await
        .unwrap();
        svc.assign_subject(AssignSubjectRequest {
            student_group_id: group.id,
            subject_id: algebra.id,
        })
        .await
        .unwrap();

        let names: Vec<_> = svc
            .subjects_of_group(group.id)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.subject.name)
            .collect();
        assert_eq!(names, vec!["Algebra", "Biology"]);

        let groups = svc.groups_of_subject(algebra.id).await.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].group.code, "INF-1");
    }

    #[tokio::test]
    async fn test_duplicate_and_missing_references() {
        let (svc, group, algebra, _) = setup().await;
        let req = AssignSubjectRequest {
            student_group_id: group.id,
            subject_id: algebra.id,
        };
        svc.assign_subject(req.clone()).await.unwrap();
        assert_eq!(
            svc.assign_subject(req).await.unwrap_err(),
            GradebookError::validation("assignment.duplicate")
        );

        assert_eq!(
            svc.assign_subject(AssignSubjectRequest {
                student_group_id: Uuid::new_v4(),
                subject_id: algebra.id,
            })
            .await
            .unwrap_err(),
            GradebookError::not_found("studentGroup.notFound")
        );
        assert_eq!(
            svc.assign_subject(AssignSubjectRequest {
                student_group_id: group.id,
                subject_id: Uuid::nil(),
            })
            .await
            .unwrap_err(),
            GradebookError::validation("assignment.subject.required")
        );
    }

    #[tokio::test]
    async fn test_unassign() {
        let (svc, group, algebra, _) = setup().await;
        let assignment = svc
            .assign_subject(AssignSubjectRequest {
                student_group_id: group.id,
                subject_id: algebra.id,
            })
            .await
            .unwrap();

        svc.unassign(assignment.id).await.unwrap();
        assert!(svc.subjects_of_group(group.id).await.unwrap().is_empty());
        assert_eq!(
            svc.unassign(assignment.id).await.unwrap_err(),
            GradebookError::not_found("assignment.notFound")
        );
    }
}
