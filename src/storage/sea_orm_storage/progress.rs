//! 视频进度存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::video_progress::{ActiveModel, Column, Entity as VideoProgressRecords};
use crate::errors::{LmsError, Result};
use crate::models::progress::entities::VideoProgress;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect, Set};

impl SeaOrmStorage {
    /// 写入进度，(user_id, material_id) 已存在时直接覆盖
    pub async fn upsert_video_progress_impl(
        &self,
        user_id: i64,
        material_id: i64,
        progress: i32,
    ) -> Result<VideoProgress> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            material_id: Set(material_id),
            progress: Set(progress),
            updated_at: Set(now),
            ..Default::default()
        };

        VideoProgressRecords::insert(model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::MaterialId])
                    .update_columns([Column::Progress, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("保存视频进度失败: {e}")))?;

        let result = VideoProgressRecords::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::MaterialId.eq(material_id))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询视频进度失败: {e}")))?
            .ok_or_else(|| LmsError::unexpected("视频进度写入后未找到"))?;

        Ok(result.into_video_progress())
    }

    /// 查询一组资料的进度，未记录的资料不出现在结果中
    pub async fn get_progress_map_impl(
        &self,
        user_id: i64,
        material_ids: &[i64],
    ) -> Result<HashMap<i64, i32>> {
        if material_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i64, i32)> = VideoProgressRecords::find()
            .select_only()
            .column(Column::MaterialId)
            .column(Column::Progress)
            .filter(Column::UserId.eq(user_id))
            .filter(Column::MaterialId.is_in(material_ids.iter().copied()))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询视频进度失败: {e}")))?;

        Ok(rows.into_iter().collect())
    }

    /// 用户全部进度之和
    pub async fn sum_video_progress_impl(&self, user_id: i64) -> Result<i64> {
        let values: Vec<i32> = VideoProgressRecords::find()
            .select_only()
            .column(Column::Progress)
            .filter(Column::UserId.eq(user_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("统计视频进度失败: {e}")))?;

        Ok(values.into_iter().map(i64::from).sum())
    }
}
