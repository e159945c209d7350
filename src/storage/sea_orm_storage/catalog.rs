//! 批次、课程、资料存储操作

use super::{SeaOrmStorage, map_write_err};
use crate::entity::batch_courses::Column as BatchCourseColumn;
use crate::entity::batches::Column as BatchColumn;
use crate::entity::courses::Column as CourseColumn;
use crate::entity::materials::Column as MaterialColumn;
use crate::entity::prelude::{
    BatchActiveModel, BatchCourseActiveModel, BatchCourses, Batches, CourseActiveModel, Courses,
    MaterialActiveModel, Materials,
};
use crate::errors::{LmsError, Result};
use crate::models::catalog::{
    entities::{Batch, BatchCourse, Course, Material},
    requests::{
        AssignBatchCourseRequest, CreateBatchRequest, CreateCourseRequest, CreateMaterialRequest,
    },
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建批次
    pub async fn create_batch_impl(&self, req: CreateBatchRequest) -> Result<Batch> {
        let now = chrono::Utc::now().timestamp();

        let model = BatchActiveModel {
            title: Set(req.title.trim().to_string()),
            subtitle: Set(req.subtitle),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建批次失败: {e}")))?;

        Ok(result.into_batch())
    }

    pub async fn get_batch_by_id_impl(&self, batch_id: i64) -> Result<Option<Batch>> {
        let result = Batches::find_by_id(batch_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询批次失败: {e}")))?;

        Ok(result.map(|m| m.into_batch()))
    }

    pub async fn list_batches_impl(&self) -> Result<Vec<Batch>> {
        let batches = Batches::find()
            .order_by_asc(BatchColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询批次列表失败: {e}")))?;

        Ok(batches.into_iter().map(|m| m.into_batch()).collect())
    }

    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = CourseActiveModel {
            name: Set(req.name.trim().to_string()),
            description: Set(req.description),
            credit: Set(req.credit),
            status: Set(req.status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let courses = Courses::find()
            .order_by_asc(CourseColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 为批次分配课程与教师
    ///
    /// (batch_id, course_id) 唯一，重复分配时只更新负责教师。
    pub async fn assign_batch_course_impl(
        &self,
        batch_id: i64,
        req: AssignBatchCourseRequest,
    ) -> Result<BatchCourse> {
        let now = chrono::Utc::now().timestamp();

        let model = BatchCourseActiveModel {
            batch_id: Set(batch_id),
            course_id: Set(req.course_id),
            professor_id: Set(req.professor_id),
            created_at: Set(now),
            ..Default::default()
        };

        BatchCourses::insert(model)
            .on_conflict(
                OnConflict::columns([BatchCourseColumn::BatchId, BatchCourseColumn::CourseId])
                    .update_column(BatchCourseColumn::ProfessorId)
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| map_write_err(e, "Course already assigned to this batch", "分配课程失败"))?;

        let result = BatchCourses::find()
            .filter(BatchCourseColumn::BatchId.eq(batch_id))
            .filter(BatchCourseColumn::CourseId.eq(req.course_id))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询批次课程失败: {e}")))?
            .ok_or_else(|| LmsError::unexpected("批次课程写入后未找到"))?;

        Ok(result.into_batch_course())
    }

    /// 批次下的全部课程
    pub async fn list_courses_of_batch_impl(&self, batch_id: i64) -> Result<Vec<Course>> {
        let courses = Courses::find()
            .inner_join(BatchCourses)
            .filter(BatchCourseColumn::BatchId.eq(batch_id))
            .order_by_asc(CourseColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询批次课程失败: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    pub async fn is_course_in_batch_impl(&self, batch_id: i64, course_id: i64) -> Result<bool> {
        let count = BatchCourses::find()
            .filter(BatchCourseColumn::BatchId.eq(batch_id))
            .filter(BatchCourseColumn::CourseId.eq(course_id))
            .count(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询批次课程失败: {e}")))?;

        Ok(count > 0)
    }

    /// 教师是否负责该课程（任一批次）
    pub async fn is_professor_assigned_impl(
        &self,
        professor_id: i64,
        course_id: i64,
    ) -> Result<bool> {
        let count = BatchCourses::find()
            .filter(BatchCourseColumn::ProfessorId.eq(professor_id))
            .filter(BatchCourseColumn::CourseId.eq(course_id))
            .count(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询教师分配失败: {e}")))?;

        Ok(count > 0)
    }

    /// 创建课程资料
    pub async fn create_material_impl(
        &self,
        professor_id: Option<i64>,
        req: CreateMaterialRequest,
    ) -> Result<Material> {
        let now = chrono::Utc::now().timestamp();

        let model = MaterialActiveModel {
            batch_id: Set(req.batch_id),
            course_id: Set(req.course_id),
            professor_id: Set(professor_id),
            title: Set(req.title.trim().to_string()),
            subtitle: Set(req.subtitle),
            description: Set(req.description),
            video_path: Set(req.video_path),
            assignment_path: Set(req.assignment_path),
            marks: Set(req.marks),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建资料失败: {e}")))?;

        Ok(result.into_material())
    }

    pub async fn get_material_by_id_impl(&self, material_id: i64) -> Result<Option<Material>> {
        let result = Materials::find_by_id(material_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询资料失败: {e}")))?;

        Ok(result.map(|m| m.into_material()))
    }

    /// 按 id 升序列出课程资料，即创建顺序
    pub async fn list_materials_by_course_impl(&self, course_id: i64) -> Result<Vec<Material>> {
        let materials = Materials::find()
            .filter(MaterialColumn::CourseId.eq(course_id))
            .order_by_asc(MaterialColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询资料列表失败: {e}")))?;

        Ok(materials.into_iter().map(|m| m.into_material()).collect())
    }

    pub async fn delete_material_impl(&self, material_id: i64) -> Result<bool> {
        let result = Materials::delete_by_id(material_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除资料失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_materials_impl(&self) -> Result<u64> {
        Materials::find()
            .count(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("统计资料数量失败: {e}")))
    }
}
