use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::{LmsError, Result};
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::models::users::entities::UserStatus;
use crate::storage::Storage;
use crate::utils::password::verify_password;

const INVALID_CREDENTIALS: &str = "Username or password is incorrect";

/// 校验用户名或邮箱与密码，签发 access token
pub async fn login(
    storage: &Arc<dyn Storage>,
    req: LoginRequest,
    expiry_minutes: i64,
) -> Result<LoginResponse> {
    if req.username.trim().is_empty() || req.password.is_empty() {
        return Err(LmsError::validation("Username and password are required"));
    }

    // 1. 根据用户名或邮箱获取用户信息
    let user = storage
        .get_user_by_username_or_email(req.username.trim())
        .await?
        .ok_or_else(|| LmsError::authentication(INVALID_CREDENTIALS))?;

    // 2. 验证密码
    if !verify_password(&req.password, &user.password_hash) {
        return Err(LmsError::authentication(INVALID_CREDENTIALS));
    }
    if user.status != UserStatus::Active {
        return Err(LmsError::authorization("Account is suspended"));
    }

    // 3. 更新最后登录时间
    if let Err(e) = storage.update_last_login(user.id).await {
        warn!("Failed to update last login for user {}: {}", user.id, e);
    }

    // 4. 生成令牌
    let access_token = user
        .generate_access_token()
        .map_err(|e| LmsError::unexpected(format!("Failed to generate JWT token: {e}")))?;

    info!("User {} logged in successfully", user.username);
    Ok(LoginResponse {
        access_token,
        expires_in: expiry_minutes * 60,
        user,
        created_at: chrono::Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::testing;

    fn credentials(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn test_unknown_user_and_wrong_password_look_the_same() {
        let storage = testing::memory_storage().await;
        testing::admin(&storage).await;

        let unknown = login(&storage, credentials("ghost", "whatever"), 60)
            .await
            .unwrap_err();
        let wrong = login(&storage, credentials("admin", "whatever"), 60)
            .await
            .unwrap_err();

        assert!(matches!(unknown, LmsError::Authentication(_)));
        assert_eq!(unknown.message(), wrong.message());
    }

    #[tokio::test]
    async fn test_blank_credentials_are_rejected() {
        let storage = testing::memory_storage().await;
        let err = login(&storage, credentials("  ", "x"), 60).await.unwrap_err();
        assert!(matches!(err, LmsError::Validation(_)));
    }
}
