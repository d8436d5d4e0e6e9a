pub mod assign;
pub mod delete;
pub mod list;
pub mod update;

use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{GradebookError, Result};
use crate::models::grade_criteria::entities::GradeCriterion;
use crate::models::grades::{
    entities::Grade,
    requests::{AssignGradeRequest, UpdateGradeRequest},
    responses::GradeDetail,
};
use crate::storage::Storage;

pub struct GradeService {
    storage: Arc<Storage>,
}

impl GradeService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Storage {
        &self.storage
    }

    // 录入成绩
    pub async fn assign_grade(&self, req: AssignGradeRequest) -> Result<Grade> {
        assign::assign_grade(self, req).await
    }

    // 部分更新成绩
    pub async fn update_grade(&self, grade_id: Uuid, update: UpdateGradeRequest) -> Result<Grade> {
        update::update_grade(self, grade_id, update).await
    }

    pub async fn delete_grade(&self, grade_id: Uuid) -> Result<()> {
        delete::delete_grade(self, grade_id).await
    }

    pub async fn get_grade(&self, grade_id: Uuid) -> Result<Grade> {
        load_grade(self.storage(), grade_id).await
    }

    // 学生成绩单
    pub async fn list_for_student(&self, student_id: Uuid) -> Result<Vec<GradeDetail>> {
        list::list_for_student(self, student_id).await
    }

    // 某门课程的全部成绩
    pub async fn list_for_subject(&self, subject_id: Uuid) -> Result<Vec<Grade>> {
        list::list_for_subject(self, subject_id).await
    }
}

pub(crate) async fn load_grade(storage: &Storage, grade_id: Uuid) -> Result<Grade> {
    storage
        .grades
        .get(grade_id)
        .await?
        .ok_or_else(|| GradebookError::not_found("grade.notFound"))
}

/// 按评分标准满分校验成绩值
///
/// 实体层的 [0, 100] 校验在保存时另行执行。
pub(crate) fn check_against_criterion(value: f64, criterion: &GradeCriterion) -> Result<()> {
    if value.is_nan() || value < 0.0 {
        return Err(GradebookError::validation("grade.value.outOfRange"));
    }
    if value > f64::from(criterion.max_points) {
        return Err(GradebookError::validation("grade.value.exceedsMaxPoints"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::students::entities::Student;
    use crate::models::subjects::entities::Subject;

    struct Fixture {
        svc: GradeService,
        subject: Subject,
        criterion: GradeCriterion,
        student: Student,
    }

    async fn fixture(max_points: i32) -> Fixture {
        let storage = Arc::new(Storage::in_memory());
        let subject = Subject::new("Algebra");
        let criterion = GradeCriterion::new("Exam", max_points, subject.id);
        let student = Student::new("Anna", "Nowak", "s1", None);
        storage.subjects.save(subject.clone()).await.unwrap();
        storage.grade_criteria.save(criterion.clone()).await.unwrap();
        storage.students.save(student.clone()).await.unwrap();
        Fixture {
            svc: GradeService::new(storage),
            subject,
            criterion,
            student,
        }
    }

    fn req(f: &Fixture, value: f64) -> AssignGradeRequest {
        AssignGradeRequest {
            subject_id: f.subject.id,
            criterion_id: f.criterion.id,
            student_id: f.student.id,
            value,
            comment: None,
        }
    }

    #[tokio::test]
    async fn test_assign_within_criterion_bounds() {
        let f = fixture(20).await;
        let grade = f.svc.assign_grade(req(&f, 20.0)).await.unwrap();
        assert_eq!(grade.value, 20.0);
        assert_eq!(f.svc.get_grade(grade.id).await.unwrap(), grade);
    }

    #[tokio::test]
    async fn test_assign_uses_criterion_max_points_not_fixed_bound() {
        let f = fixture(20).await;
        assert_eq!(
            f.svc.assign_grade(req(&f, 20.5)).await.unwrap_err(),
            GradebookError::validation("grade.value.exceedsMaxPoints")
        );
        assert_eq!(
            f.svc.assign_grade(req(&f, -1.0)).await.unwrap_err(),
            GradebookError::validation("grade.value.outOfRange")
        );
        assert!(f.svc.storage().grades.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_entity_bound_still_applies_above_one_hundred() {
        // 满分 150 时，120 通过评分标准校验，但仍被实体层 [0, 100] 拒绝
        let f = fixture(150).await;
        assert_eq!(
            f.svc.assign_grade(req(&f, 120.0)).await.unwrap_err(),
            GradebookError::validation("grade.value.outOfRange")
        );
        assert!(f.svc.assign_grade(req(&f, 100.0)).await.is_ok());
    }

    #[tokio::test]
    async fn test_assign_checks_references() {
        let f = fixture(20).await;

        let mut r = req(&f, 5.0);
        r.student_id = Uuid::new_v4();
        assert_eq!(
            f.svc.assign_grade(r).await.unwrap_err(),
            GradebookError::not_found("student.notFound")
        );

        let mut r = req(&f, 5.0);
        r.criterion_id = Uuid::new_v4();
        assert_eq!(
            f.svc.assign_grade(r).await.unwrap_err(),
            GradebookError::not_found("gradeCriterion.notFound")
        );

        let mut r = req(&f, 5.0);
        r.subject_id = Uuid::nil();
        assert_eq!(
            f.svc.assign_grade(r).await.unwrap_err(),
            GradebookError::validation("grade.subject.required")
        );

        let other = Subject::new("Biology");
        f.svc.storage().subjects.save(other.clone()).await.unwrap();
        let mut r = req(&f, 5.0);
        r.subject_id = other.id;
        assert_eq!(
            f.svc.assign_grade(r).await.unwrap_err(),
            GradebookError::validation("grade.criterion.subjectMismatch")
        );
    }

    #[tokio::test]
    async fn test_assign_twice_for_same_criterion_rejected() {
        let f = fixture(20).await;
        f.svc.assign_grade(req(&f, 5.0)).await.unwrap();
        assert_eq!(
            f.svc.assign_grade(req(&f, 6.0)).await.unwrap_err(),
            GradebookError::validation("grade.duplicate")
        );
    }

    #[tokio::test]
    async fn test_partial_update() {
        let f = fixture(20).await;
        let mut r = req(&f, 5.0);
        r.comment = Some("late".into());
        let grade = f.svc.assign_grade(r).await.unwrap();

        let updated = f
            .svc
            .update_grade(
                grade.id,
                UpdateGradeRequest {
                    value: Some(12.5),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.value, 12.5);
        assert_eq!(updated.comment.as_deref(), Some("late"));

        assert_eq!(
            f.svc
                .update_grade(
                    grade.id,
                    UpdateGradeRequest {
                        value: Some(21.0),
                        ..Default::default()
                    },
                )
                .await
                .unwrap_err(),
            GradebookError::validation("grade.value.exceedsMaxPoints")
        );
        assert_eq!(f.svc.get_grade(grade.id).await.unwrap().value, 12.5);

        assert_eq!(
            f.svc
                .update_grade(Uuid::new_v4(), UpdateGradeRequest::default())
                .await
                .unwrap_err(),
            GradebookError::not_found("grade.notFound")
        );
    }

    #[tokio::test]
    async fn test_delete_and_transcript() {
        let f = fixture(20).await;
        let grade = f.svc.assign_grade(req(&f, 9.0)).await.unwrap();

        let transcript = f.svc.list_for_student(f.student.id).await.unwrap();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].subject_name.as_deref(), Some("Algebra"));
        assert_eq!(transcript[0].criterion_name.as_deref(), Some("Exam"));
        assert_eq!(transcript[0].max_points, Some(20));
        assert_eq!(f.svc.list_for_subject(f.subject.id).await.unwrap().len(), 1);

        f.svc.delete_grade(grade.id).await.unwrap();
        assert!(f.svc.list_for_student(f.student.id).await.unwrap().is_empty());
        assert_eq!(
            f.svc.delete_grade(grade.id).await.unwrap_err(),
            GradebookError::not_found("grade.notFound")
        );
    }
}
