use serde::Deserialize;

// 创建学生组请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentGroupRequest {
    pub code: String,
    pub specialization: String,
    pub description: Option<String>,
}

// 更新学生组请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudentGroupRequest {
    pub code: Option<String>,
    pub specialization: Option<String>,
    pub description: Option<String>,
}
