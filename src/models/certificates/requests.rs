use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{LmsError, Result};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct CreateCertificateRequest {
    #[serde(default)]
    pub issued_by: String,
}

impl CreateCertificateRequest {
    /// 返回去除首尾空白后的签发人
    pub fn validated_issuer(&self) -> Result<&str> {
        let issuer = self.issued_by.trim();
        if issuer.is_empty() {
            return Err(LmsError::validation("The issued by field is required."));
        }
        if issuer.chars().count() > 255 {
            return Err(LmsError::validation(
                "The issued by must not be greater than 255 characters.",
            ));
        }
        Ok(issuer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issuer_required() {
        let req: CreateCertificateRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validated_issuer().is_err());

        let req = CreateCertificateRequest {
            issued_by: "  Registrar Office ".into(),
        };
        assert_eq!(req.validated_issuer().unwrap(), "Registrar Office");
    }

    #[test]
    fn test_issuer_length() {
        let req = CreateCertificateRequest {
            issued_by: "x".repeat(256),
        };
        assert!(req.validated_issuer().is_err());
    }
}
