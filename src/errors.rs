//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称以及 HTTP 状态映射。

use std::fmt;

use actix_web::HttpResponse;
use actix_web::http::StatusCode;

use crate::models::{ApiResponse, ErrorCode};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - status_code() 方法 - 返回对应的 HTTP 状态码
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_lms_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $status:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum LmsError {
            $($variant(String),)*
        }

        impl LmsError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(LmsError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(LmsError::$variant(_) => $type_name,)*
                }
            }

            /// 获取 HTTP 状态码
            pub fn status_code(&self) -> StatusCode {
                match self {
                    $(LmsError::$variant(_) => StatusCode::$status,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(LmsError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl LmsError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        LmsError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_lms_errors! {
    Validation("E001", "Validation Error", BAD_REQUEST),
    Authentication("E002", "Authentication Error", UNAUTHORIZED),
    Authorization("E003", "Authorization Error", FORBIDDEN),
    NotFound("E004", "Resource Not Found", NOT_FOUND),
    Conflict("E005", "Conflict Error", CONFLICT),
    DatabaseConfig("E006", "Database Configuration Error", INTERNAL_SERVER_ERROR),
    DatabaseConnection("E007", "Database Connection Error", INTERNAL_SERVER_ERROR),
    DatabaseOperation("E008", "Database Operation Error", INTERNAL_SERVER_ERROR),
    FileOperation("E009", "File Operation Error", INTERNAL_SERVER_ERROR),
    Serialization("E010", "Serialization Error", INTERNAL_SERVER_ERROR),
    DateParse("E011", "Date Parse Error", INTERNAL_SERVER_ERROR),
    Unexpected("E012", "Unexpected Error", INTERNAL_SERVER_ERROR),
}

impl LmsError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为服务端内部错误
    pub fn is_internal(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }

    /// 响应体中使用的错误码
    pub fn error_code(&self) -> ErrorCode {
        match self {
            LmsError::Validation(_) => ErrorCode::BadRequest,
            LmsError::Authentication(_) => ErrorCode::Unauthorized,
            LmsError::Authorization(_) => ErrorCode::Forbidden,
            LmsError::NotFound(_) => ErrorCode::NotFound,
            LmsError::Conflict(_) => ErrorCode::Conflict,
            _ => ErrorCode::InternalServerError,
        }
    }

    /// 转换为统一格式的 HTTP 响应
    ///
    /// 内部错误只在日志中保留详情，返回给客户端的是通用信息。
    pub fn into_response(self) -> HttpResponse {
        let status = self.status_code();
        if self.is_internal() {
            tracing::error!("{}", self.format_simple());
            return HttpResponse::build(status).json(ApiResponse::error_empty(
                self.error_code(),
                "Internal server error",
            ));
        }

        HttpResponse::build(status).json(ApiResponse::error_empty(
            self.error_code(),
            self.message(),
        ))
    }
}

impl fmt::Display for LmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LmsError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for LmsError {
    fn from(err: sea_orm::DbErr) -> Self {
        LmsError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for LmsError {
    fn from(err: std::io::Error) -> Self {
        LmsError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LmsError {
    fn from(err: serde_json::Error) -> Self {
        LmsError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for LmsError {
    fn from(err: chrono::ParseError) -> Self {
        LmsError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LmsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LmsError::validation("test").code(), "E001");
        assert_eq!(LmsError::authentication("test").code(), "E002");
        assert_eq!(LmsError::not_found("test").code(), "E004");
        assert_eq!(LmsError::database_operation("test").code(), "E008");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(LmsError::validation("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(LmsError::authentication("x").status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(LmsError::authorization("x").status_code(), StatusCode::FORBIDDEN);
        assert_eq!(LmsError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(LmsError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            LmsError::database_operation("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = LmsError::database_operation("UNIQUE constraint failed: users.email");
        assert!(err.is_internal());
        assert_eq!(err.error_code(), ErrorCode::InternalServerError);

        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_message() {
        let err = LmsError::not_found("Video not found.");
        assert_eq!(err.message(), "Video not found.");
        assert_eq!(err.error_type(), "Resource Not Found");
    }

    #[test]
    fn test_from_db_err() {
        let err: LmsError = sea_orm::DbErr::Custom("boom".into()).into();
        assert_eq!(err.code(), "E008");
        assert!(err.format_simple().contains("boom"));
    }
}
