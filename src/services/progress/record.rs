use std::sync::Arc;

use tracing::debug;

use crate::errors::{LmsError, Result};
use crate::middlewares::guard::require_student;
use crate::models::progress::{entities::VideoProgress, requests::RecordProgressRequest};
use crate::models::users::entities::User;
use crate::storage::Storage;

/// 记录视频进度，同一资料重复上报时后写覆盖
pub async fn record_progress(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    req: RecordProgressRequest,
) -> Result<VideoProgress> {
    let student = require_student(storage, caller).await?;
    let progress = req.validated_progress()?;

    if storage.get_material_by_id(req.video_id).await?.is_none() {
        return Err(LmsError::not_found("Video not found."));
    }

    let record = storage
        .upsert_video_progress(student.user_id, req.video_id, progress)
        .await?;

    debug!(
        "Progress of user {} on material {} set to {}",
        student.user_id, req.video_id, progress
    );
    Ok(record)
}
