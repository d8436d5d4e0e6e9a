use serde::Serialize;

use super::entities::GradeCriterion;

// 评分标准及其已录入成绩数量
#[derive(Debug, Clone, Serialize)]
pub struct GradeCriterionUsage {
    #[serde(flatten)]
    pub criterion: GradeCriterion,
    pub grade_count: usize,
}
