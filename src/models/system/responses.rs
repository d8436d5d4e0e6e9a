use serde::Serialize;
use uuid::Uuid;

// 各集合记录数
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollectionCounts {
    pub students: usize,
    pub student_groups: usize,
    pub subjects: usize,
    pub grade_criteria: usize,
    pub grades: usize,
    pub assignments: usize,
}

// 单条问题记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegrityIssue {
    pub collection: &'static str,
    pub record_id: Uuid,
    // 校验失败时为消息键；悬空引用时为 "<field>.dangling"
    pub problem: String,
}

// 数据完整性报告
#[derive(Debug, Clone, Default, Serialize)]
pub struct IntegrityReport {
    pub system_name: String,
    pub counts: CollectionCounts,
    pub invalid_records: Vec<IntegrityIssue>,
    pub dangling_references: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.invalid_records.is_empty() && self.dangling_references.is_empty()
    }
}
