/// 验证文件内容的魔术字节是否与扩展名匹配
///
/// # Arguments
/// * `data` - 文件内容的前几个字节
/// * `extension` - 文件扩展名（包含点号，如 ".pdf"）
///
/// 只识别作业允许的文档格式，其余扩展名一律返回 `false`。
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    match extension.to_lowercase().as_str() {
        ".pdf" => data.starts_with(b"%PDF"),
        // MS Office 旧格式 (OLE Compound Document)
        ".doc" => data.starts_with(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]),
        // OOXML，本质是 ZIP
        ".docx" => data.starts_with(&[0x50, 0x4B, 0x03, 0x04]),
        _ => false,
    }
}

/// 从文件名取出小写扩展名（带点号），无扩展名时返回空串
pub fn extension_of(file_name: &str) -> String {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_magic() {
        assert!(validate_magic_bytes(b"%PDF-1.7\n", ".pdf"));
        assert!(validate_magic_bytes(b"%PDF-1.7\n", ".PDF"));
        assert!(!validate_magic_bytes(b"%PDF-1.7\n", ".docx"));
    }

    #[test]
    fn test_office_magic() {
        let ole = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1, 0x00];
        assert!(validate_magic_bytes(&ole, ".doc"));
        assert!(validate_magic_bytes(&[0x50, 0x4B, 0x03, 0x04, 0x14], ".docx"));
        assert!(!validate_magic_bytes(&ole, ".docx"));
    }

    #[test]
    fn test_rejects_other_formats() {
        assert!(!validate_magic_bytes(&[0x89, 0x50, 0x4E, 0x47], ".png"));
        assert!(!validate_magic_bytes(b"MZ", ".exe"));
        assert!(!validate_magic_bytes(&[], ".pdf"));
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("Report.Final.PDF"), ".pdf");
        assert_eq!(extension_of("noext"), "");
    }
}
