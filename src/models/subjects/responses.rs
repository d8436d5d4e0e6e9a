use serde::Serialize;

use super::entities::Subject;
use crate::models::grade_criteria::entities::GradeCriterion;

// 课程详情（含评分标准）
#[derive(Debug, Clone, Serialize)]
pub struct SubjectWithCriteria {
    #[serde(flatten)]
    pub subject: Subject,
    pub criteria: Vec<GradeCriterion>,
    // 所有评分标准满分之和
    pub total_max_points: i64,
}

impl SubjectWithCriteria {
    pub fn new(subject: Subject, criteria: Vec<GradeCriterion>) -> Self {
        let total_max_points = criteria.iter().map(|c| i64::from(c.max_points)).sum();
        Self {
            subject,
            criteria,
            total_max_points,
        }
    }
}
