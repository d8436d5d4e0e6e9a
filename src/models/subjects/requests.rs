use serde::Deserialize;

// 创建课程请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubjectRequest {
    pub name: String,
}

// 更新课程请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
}
