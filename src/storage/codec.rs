//! 集合编解码
//!
//! 每个集合整体编码为一个 JSON 数组。解码对损坏数据容错：
//! 无法解析时记录警告并视为空集合，而不是把错误抛给调用方。

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::errors::Result;

/// 编码完整集合
pub fn encode<T: Serialize>(records: &[T], pretty: bool) -> Result<Vec<u8>> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(records)?
    } else {
        serde_json::to_vec(records)?
    };
    Ok(bytes)
}

/// 解码完整集合；空内容视为空集合
pub fn decode<T: DeserializeOwned>(bytes: &[u8], collection: &str) -> Vec<T> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Vec::new();
    }

    match serde_json::from_slice::<Vec<T>>(bytes) {
        Ok(records) => records,
        Err(e) => {
            warn!(
                "Collection '{}' is unreadable ({} bytes), treating as empty: {}",
                collection,
                bytes.len(),
                e
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: u32,
        name: String,
    }

    #[test]
    fn test_empty_input_is_empty_collection() {
        assert!(decode::<Row>(b"", "rows").is_empty());
        assert!(decode::<Row>(b"  \n", "rows").is_empty());
        assert!(decode::<Row>(b"[]", "rows").is_empty());
    }

    #[test]
    fn test_truncated_input_is_tolerated() {
        let bytes = encode(
            &[
                Row { id: 1, name: "a".into() },
                Row { id: 2, name: "b".into() },
            ],
            false,
        )
        .unwrap();
        let truncated = &bytes[..bytes.len() - 5];
        assert!(decode::<Row>(truncated, "rows").is_empty());
        assert!(decode::<Row>(b"\x00\x01garbage", "rows").is_empty());
    }

    #[test]
    fn test_pretty_and_compact_decode_the_same() {
        let rows = vec![Row { id: 7, name: "x".into() }];
        let compact = encode(&rows, false).unwrap();
        let pretty = encode(&rows, true).unwrap();
        assert!(pretty.len() > compact.len());
        assert_eq!(decode::<Row>(&pretty, "rows"), rows);
    }
}
