use serde::Deserialize;
use uuid::Uuid;

// 创建学生请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub album: String,
    pub group_id: Option<Uuid>,
}

// 更新学生请求，仅覆盖 Some 字段
//
// 学生组归属通过 assign_group / remove_from_group 修改
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudentRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub album: Option<String>,
}

// 学生列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    // 按学生组过滤
    pub group_id: Option<Uuid>,
    // 仅列出未分组学生
    #[serde(default)]
    pub ungrouped_only: bool,
    // 姓名 / 学号模糊搜索
    pub search: Option<String>,
}
