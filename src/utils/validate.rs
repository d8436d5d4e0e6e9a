use uuid::Uuid;

use crate::errors::{GradebookError, Result};

/// 必填文本校验：去除首尾空白后不能为空
pub fn require_text(value: &str, key: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GradebookError::validation(key));
    }
    Ok(())
}

/// 必填外键校验：nil UUID 视为未设置
pub fn require_id(id: Uuid, key: &'static str) -> Result<()> {
    if id.is_nil() {
        return Err(GradebookError::validation(key));
    }
    Ok(())
}

/// 统一的文本比较形式（去空白 + 小写）
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// 大小写不敏感的子串匹配，`needle` 需预先 normalize
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// 去除首尾空白后的可选文本；全空白视为 None
pub fn trimmed_option(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let t = v.trim();
        if t.is_empty() {
            None
        } else {
            Some(t.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("Kowalski", "k").is_ok());
        assert!(require_text("  x ", "k").is_ok());
        assert_eq!(
            require_text("", "student.album.required"),
            Err(GradebookError::validation("student.album.required"))
        );
        assert!(require_text(" \t\n", "k").is_err());
    }

    #[test]
    fn test_require_id() {
        assert!(require_id(Uuid::new_v4(), "k").is_ok());
        assert!(require_id(Uuid::nil(), "k").is_err());
    }

    #[test]
    fn test_contains_normalized() {
        assert!(contains_normalized("Anna Nowak", &normalize("  nOWa ")));
        assert!(!contains_normalized("Anna Nowak", &normalize("kowal")));
    }

    #[test]
    fn test_trimmed_option() {
        assert_eq!(trimmed_option(Some("  ".into())), None);
        assert_eq!(trimmed_option(Some(" evening ".into())), Some("evening".into()));
        assert_eq!(trimmed_option(None), None);
    }
}
