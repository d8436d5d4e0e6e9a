use serde::Serialize;
use uuid::Uuid;

use super::entities::Grade;

// 带名称的成绩明细，供学生成绩单展示
#[derive(Debug, Clone, Serialize)]
pub struct GradeDetail {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub subject_name: Option<String>,
    pub criterion_id: Uuid,
    pub criterion_name: Option<String>,
    pub max_points: Option<i32>,
    pub student_id: Uuid,
    pub value: f64,
    pub comment: Option<String>,
}

impl GradeDetail {
    pub fn from_grade(
        grade: Grade,
        subject_name: Option<String>,
        criterion_name: Option<String>,
        max_points: Option<i32>,
    ) -> Self {
        Self {
            id: grade.id,
            subject_id: grade.subject_id,
            subject_name,
            criterion_id: grade.criterion_id,
            criterion_name,
            max_points,
            student_id: grade.student_id,
            value: grade.value,
            comment: grade.comment,
        }
    }
}
