use serde::Serialize;

use super::entities::StudentGroup;
use crate::models::students::entities::Student;

// 学生组列表项
#[derive(Debug, Clone, Serialize)]
pub struct StudentGroupListItem {
    #[serde(flatten)]
    pub group: StudentGroup,
    pub member_count: usize,
}

// 学生组详情（含成员）
#[derive(Debug, Clone, Serialize)]
pub struct StudentGroupWithMembers {
    #[serde(flatten)]
    pub group: StudentGroup,
    pub members: Vec<Student>,
}
