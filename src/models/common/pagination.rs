use serde::{Deserialize, Serialize};

// 分页响应信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

const MAX_PAGE_SIZE: i64 = 500;

/// 对已排序的完整集合做内存分页
///
/// 未指定 `page` 与 `size` 时返回全部数据（单页）。
pub fn paginate<T>(items: Vec<T>, page: Option<i64>, size: Option<i64>) -> PaginatedResponse<T> {
    let total = items.len() as i64;

    if page.is_none() && size.is_none() {
        return PaginatedResponse {
            items,
            pagination: PaginationInfo {
                page: 1,
                page_size: total,
                total,
                total_pages: if total == 0 { 0 } else { 1 },
            },
        };
    }

    let page = page.unwrap_or(1).max(1);
    let size = size.unwrap_or(20).clamp(1, MAX_PAGE_SIZE);
    let total_pages = (total + size - 1) / size;
    let offset = usize::try_from(page.saturating_sub(1).saturating_mul(size)).unwrap_or(usize::MAX);

    let items = items.into_iter().skip(offset).take(size as usize).collect();

    PaginatedResponse {
        items,
        pagination: PaginationInfo {
            page,
            page_size: size,
            total,
            total_pages,
        },
    }
}
