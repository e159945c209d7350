use std::sync::Arc;

use tracing::info;

use crate::errors::{LmsError, Result};
use crate::middlewares::guard::require_admin;
use crate::models::profiles::{
    requests::{AccountFields, CreateProfessorRequest, CreateStudentRequest},
    responses::{ProfessorAccountResponse, StudentAccountResponse},
};
use crate::models::users::{
    entities::{User, UserRole},
    requests::CreateUserRequest,
};
use crate::storage::Storage;
use crate::utils::password::hash_password;

/// 哈希密码并组装账号请求，哈希在阻塞线程池中执行
async fn account_request(
    account: &AccountFields,
    role: UserRole,
    display_name: String,
) -> Result<CreateUserRequest> {
    let password = account.password.clone();
    let hashed = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| LmsError::unexpected(format!("Password hashing task failed: {e}")))??;

    Ok(CreateUserRequest {
        username: account.username.trim().to_string(),
        email: account.email.trim().to_lowercase(),
        password: hashed,
        role,
        display_name: Some(display_name),
    })
}

pub async fn create_student(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    req: CreateStudentRequest,
) -> Result<StudentAccountResponse> {
    require_admin(caller)?;
    req.validate()?;

    if storage.get_batch_by_id(req.batch_id).await?.is_none() {
        return Err(LmsError::not_found("Batch not found"));
    }

    let display_name = format!("{} {}", req.first_name.trim(), req.last_name.trim());
    let account = account_request(&req.account, UserRole::Student, display_name).await?;
    let (user, student) = storage.create_student_account(account, req).await?;

    info!("Student {} created for user {}", student.student_code, user.username);
    Ok(StudentAccountResponse { user, student })
}

pub async fn create_professor(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    req: CreateProfessorRequest,
) -> Result<ProfessorAccountResponse> {
    require_admin(caller)?;
    req.validate()?;

    let display_name = format!("{} {}", req.first_name.trim(), req.last_name.trim());
    let account = account_request(&req.account, UserRole::Professor, display_name).await?;
    let (user, professor) = storage.create_professor_account(account, req).await?;

    info!("Professor {} created for user {}", professor.id, user.username);
    Ok(ProfessorAccountResponse { user, professor })
}
