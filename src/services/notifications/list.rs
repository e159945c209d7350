use std::sync::Arc;

use crate::errors::Result;
use crate::middlewares::guard::require_authenticated;
use crate::models::PaginationQuery;
use crate::models::notifications::responses::{NotificationListResponse, UnreadCountResponse};
use crate::models::users::entities::User;
use crate::storage::Storage;

pub async fn list_own_notifications(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    query: PaginationQuery,
) -> Result<NotificationListResponse> {
    let user = require_authenticated(caller)?;
    storage.list_notifications_with_pagination(user.id, query).await
}

pub async fn own_unread_count(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
) -> Result<UnreadCountResponse> {
    let user = require_authenticated(caller)?;
    let count = storage.count_unread_notifications(user.id).await?;
    Ok(UnreadCountResponse {
        unread_count: count as i64,
    })
}
