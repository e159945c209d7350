use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{LmsError, Result};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct RecordProgressRequest {
    pub video_id: i64,
    /// 使用 i64 接收，越界值在校验阶段拒绝而不是在反序列化时溢出
    pub progress: i64,
}

impl RecordProgressRequest {
    /// 校验并返回可存储的进度值
    pub fn validated_progress(&self) -> Result<i32> {
        if !(0..=100).contains(&self.progress) {
            return Err(LmsError::validation(
                "The progress field must be between 0 and 100.",
            ));
        }
        Ok(self.progress as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bounds() {
        let req = |progress| RecordProgressRequest {
            video_id: 1,
            progress,
        };
        assert_eq!(req(0).validated_progress().unwrap(), 0);
        assert_eq!(req(100).validated_progress().unwrap(), 100);
        assert!(req(-1).validated_progress().is_err());
        assert!(req(101).validated_progress().is_err());
    }

    #[test]
    fn test_fractional_progress_is_rejected_by_serde() {
        let parsed = serde_json::from_str::<RecordProgressRequest>(
            r#"{"video_id": 3, "progress": 42.5}"#,
        );
        assert!(parsed.is_err());
    }
}
