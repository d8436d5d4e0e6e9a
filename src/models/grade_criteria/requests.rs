use serde::Deserialize;

// 新增评分标准请求（课程 ID 由调用方法参数给出）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGradeCriterionRequest {
    pub name: String,
    pub max_points: i32,
}

// 更新评分标准请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGradeCriterionRequest {
    pub name: Option<String>,
    pub max_points: Option<i32>,
}
