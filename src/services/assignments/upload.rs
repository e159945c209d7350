use actix_multipart::Multipart;
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::path::Path;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::warn;
use uuid::Uuid;

use crate::config::UploadConfig;
use crate::errors::{LmsError, Result};
use crate::utils::file_magic::extension_of;
use crate::utils::validate_magic_bytes;

/// 作业文件所在的表单字段
pub const ASSIGNMENT_FIELD: &str = "assignment";

/// 校验文件扩展名，返回小写扩展名
pub fn check_extension(file_name: &str, allowed_types: &[String]) -> Result<String> {
    let extension = extension_of(file_name);
    if extension.is_empty() || !allowed_types.iter().any(|t| t.to_lowercase() == extension) {
        return Err(LmsError::validation(
            "The assignment must be a file of type: pdf, docx, doc.",
        ));
    }
    Ok(extension)
}

/// 删除未入库的上传文件，不存在时忽略
pub async fn discard_upload(path: &str) {
    match fs::remove_file(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove orphaned upload {}: {}", path, e),
    }
}

/// 把表单中的作业文件保存到上传目录，返回存储路径
///
/// 只接受一个 `assignment` 字段；校验失败时已写入的部分文件会被删除。
pub async fn save_assignment_file(mut payload: Multipart, config: &UploadConfig) -> Result<String> {
    let upload_dir = &config.dir;
    if !Path::new(upload_dir).exists() {
        fs::create_dir_all(upload_dir).await?;
    }

    let mut stored_path: Option<String> = None;

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name != ASSIGNMENT_FIELD {
            continue;
        }
        if let Some(path) = &stored_path {
            discard_upload(path).await;
            return Err(LmsError::validation("Only one assignment file can be uploaded."));
        }

        let original_name = content_disposition
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string())
            .unwrap_or_default();
        let extension = check_extension(&original_name, &config.allowed_types)?;

        let file_path = format!(
            "{upload_dir}/{}-{}{extension}",
            chrono::Utc::now().timestamp(),
            Uuid::new_v4()
        );
        let mut f = File::create(&file_path).await?;

        let mut total_size: usize = 0;
        let mut first_chunk = true;
        while let Some(chunk) = field.next().await {
            let data = match chunk {
                Ok(data) => data,
                Err(e) => {
                    discard_upload(&file_path).await;
                    return Err(LmsError::validation(format!("Failed to read upload: {e}")));
                }
            };

            // 第一个 chunk 时验证魔术字节
            if first_chunk {
                first_chunk = false;
                if !validate_magic_bytes(&data, &extension) {
                    discard_upload(&file_path).await;
                    return Err(LmsError::validation(
                        "The assignment content does not match its file type.",
                    ));
                }
            }

            total_size += data.len();
            if total_size > config.max_size {
                discard_upload(&file_path).await;
                return Err(LmsError::validation(format!(
                    "The assignment must not be greater than {} kilobytes.",
                    config.max_size / 1024
                )));
            }
            f.write_all(&data).await?;
        }
        f.flush().await?;

        if total_size == 0 {
            discard_upload(&file_path).await;
            return Err(LmsError::validation("The assignment file is empty."));
        }
        stored_path = Some(file_path);
    }

    stored_path.ok_or_else(|| LmsError::validation("The assignment field is required."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        vec![".pdf".into(), ".doc".into(), ".docx".into()]
    }

    #[test]
    fn test_allowed_extensions() {
        assert_eq!(check_extension("essay.PDF", &allowed()).unwrap(), ".pdf");
        assert_eq!(check_extension("essay.docx", &allowed()).unwrap(), ".docx");
    }

    #[tokio::test]
    async fn test_discard_upload_removes_file() {
        let path = std::env::temp_dir().join(format!("lms-upload-{}.pdf", Uuid::new_v4()));
        let path = path.to_string_lossy().to_string();
        fs::write(&path, b"%PDF-1.4").await.unwrap();

        discard_upload(&path).await;
        assert!(!Path::new(&path).exists());

        // 重复删除不报错
        discard_upload(&path).await;
    }

    #[test]
    fn test_rejected_extensions() {
        assert!(check_extension("essay.exe", &allowed()).is_err());
        assert!(check_extension("essay", &allowed()).is_err());
        assert!(check_extension("", &allowed()).is_err());
    }
}
