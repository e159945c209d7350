use crate::errors::Result;
use crate::middlewares::guard::require_authenticated;
use crate::models::auth::UserInfoResponse;
use crate::models::users::entities::User;

pub fn current_user(caller: Option<&User>) -> Result<UserInfoResponse> {
    let user = require_authenticated(caller)?;
    Ok(UserInfoResponse { user: user.clone() })
}
