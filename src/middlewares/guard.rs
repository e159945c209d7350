//! 业务层的访问检查
//!
//! 每个需要权限的操作开头调用，失败时直接返回对应的 `LmsError`，没有其他副作用。

use std::sync::Arc;

use crate::errors::{LmsError, Result};
use crate::models::profiles::entities::{Professor, Student};
use crate::models::users::entities::User;
use crate::storage::Storage;

/// 要求已登录
pub fn require_authenticated(caller: Option<&User>) -> Result<&User> {
    caller.ok_or_else(|| LmsError::authentication("Unauthenticated."))
}

/// 要求管理员
pub fn require_admin(caller: Option<&User>) -> Result<&User> {
    match caller {
        Some(user) if user.is_admin() => Ok(user),
        _ => Err(LmsError::authorization("Access denied. Admins only.")),
    }
}

/// 要求教师
pub fn require_professor(caller: Option<&User>) -> Result<&User> {
    match caller {
        Some(user) if user.is_professor() => Ok(user),
        _ => Err(LmsError::authorization("Access denied. Professors only.")),
    }
}

/// 要求教师或管理员
pub fn require_staff(caller: Option<&User>) -> Result<&User> {
    match caller {
        Some(user) if user.is_professor() || user.is_admin() => Ok(user),
        _ => Err(LmsError::authorization(
            "Access denied. Professors or admins only.",
        )),
    }
}

/// 要求学生身份并取得其档案
pub async fn require_student(storage: &Arc<dyn Storage>, caller: Option<&User>) -> Result<Student> {
    let user = match caller {
        Some(user) if user.is_student() => user,
        _ => return Err(LmsError::authorization("Access denied. Students only.")),
    };

    storage
        .get_student_by_user_id(user.id)
        .await?
        .ok_or_else(|| LmsError::not_found("Student record not found"))
}

/// 要求教师身份并取得其档案
pub async fn require_professor_profile(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
) -> Result<Professor> {
    let user = require_professor(caller)?;

    storage
        .get_professor_by_user_id(user.id)
        .await?
        .ok_or_else(|| LmsError::not_found("Professor record not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::{UserRole, UserStatus};
    use actix_web::http::StatusCode;

    fn user(role: UserRole) -> User {
        let now = chrono::Utc::now();
        User {
            id: 1,
            username: "someone".into(),
            email: "someone@example.com".into(),
            password_hash: String::new(),
            role,
            status: UserStatus::Active,
            display_name: None,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_missing_caller_is_unauthenticated() {
        let err = require_authenticated(None).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_admin_guard() {
        let admin = user(UserRole::Admin);
        let student = user(UserRole::Student);
        assert!(require_admin(Some(&admin)).is_ok());

        let err = require_admin(Some(&student)).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);

        // 未登录时同样是 403
        let err = require_admin(None).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_professor_guard_excludes_admin() {
        let professor = user(UserRole::Professor);
        let admin = user(UserRole::Admin);
        assert!(require_professor(Some(&professor)).is_ok());
        assert!(require_professor(Some(&admin)).is_err());
    }

    #[test]
    fn test_staff_guard() {
        assert!(require_staff(Some(&user(UserRole::Professor))).is_ok());
        assert!(require_staff(Some(&user(UserRole::Admin))).is_ok());
        assert!(require_staff(Some(&user(UserRole::Student))).is_err());
        assert!(require_staff(None).is_err());
    }
}
