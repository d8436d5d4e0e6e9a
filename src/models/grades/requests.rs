use serde::Deserialize;
use uuid::Uuid;

// 录入成绩请求
#[derive(Debug, Clone, Deserialize)]
pub struct AssignGradeRequest {
    pub subject_id: Uuid,
    pub criterion_id: Uuid,
    pub student_id: Uuid,
    pub value: f64,
    pub comment: Option<String>,
}

// 更新成绩请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGradeRequest {
    pub value: Option<f64>,
    pub comment: Option<String>,
}
