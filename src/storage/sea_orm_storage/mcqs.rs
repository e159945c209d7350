//! 选择题与作答存储操作

use super::SeaOrmStorage;
use crate::entity::mcqs::{ActiveModel as McqActiveModel, Column as McqColumn, Entity as Mcqs};
use crate::entity::student_answers::{
    ActiveModel as AnswerActiveModel, Column as AnswerColumn, Entity as StudentAnswers,
};
use crate::errors::{LmsError, Result};
use crate::models::mcqs::{
    entities::{Mcq, ScoredAnswer, StudentAnswer},
    requests::McqInput,
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 批量创建选择题，全部成功或全部回滚
    pub async fn create_mcqs_impl(
        &self,
        course_id: i64,
        material_id: i64,
        mcqs: Vec<McqInput>,
    ) -> Result<Vec<Mcq>> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let mut created = Vec::with_capacity(mcqs.len());
        for mcq in mcqs {
            let model = McqActiveModel {
                course_id: Set(course_id),
                material_id: Set(material_id),
                question: Set(mcq.question.trim().to_string()),
                answers: Set(serde_json::to_string(&mcq.answers)?),
                correct_answer: Set(mcq.correct_answer),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建选择题失败: {e}")))?;

            created.push(model.into_mcq());
        }

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(created)
    }

    pub async fn get_mcq_by_id_impl(&self, mcq_id: i64) -> Result<Option<Mcq>> {
        let result = Mcqs::find_by_id(mcq_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选择题失败: {e}")))?;

        Ok(result.map(|m| m.into_mcq()))
    }

    pub async fn list_mcqs_by_material_impl(
        &self,
        course_id: i64,
        material_id: i64,
    ) -> Result<Vec<Mcq>> {
        let mcqs = Mcqs::find()
            .filter(McqColumn::CourseId.eq(course_id))
            .filter(McqColumn::MaterialId.eq(material_id))
            .order_by_asc(McqColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选择题列表失败: {e}")))?;

        Ok(mcqs.into_iter().map(|m| m.into_mcq()).collect())
    }

    pub async fn update_mcq_impl(&self, mcq_id: i64, mcq: McqInput) -> Result<Option<Mcq>> {
        let Some(existing) = Mcqs::find_by_id(mcq_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选择题失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: McqActiveModel = existing.into();
        model.question = Set(mcq.question.trim().to_string());
        model.answers = Set(serde_json::to_string(&mcq.answers)?);
        model.correct_answer = Set(mcq.correct_answer);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新选择题失败: {e}")))?;

        Ok(Some(updated.into_mcq()))
    }

    pub async fn delete_mcq_impl(&self, mcq_id: i64) -> Result<bool> {
        let result = Mcqs::delete_by_id(mcq_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除选择题失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 在同一事务中写入整批作答
    ///
    /// 按 (student_id, mcq_id) 覆盖已有作答，任一条失败则整批回滚。
    pub async fn save_student_answers_impl(
        &self,
        student_id: i64,
        answers: Vec<ScoredAnswer>,
    ) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        for answer in answers {
            let model = AnswerActiveModel {
                student_id: Set(student_id),
                mcq_id: Set(answer.mcq_id),
                selected_answer: Set(answer.selected_answer),
                is_correct: Set(answer.is_correct),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };

            StudentAnswers::insert(model)
                .on_conflict(
                    OnConflict::columns([AnswerColumn::StudentId, AnswerColumn::McqId])
                        .update_columns([
                            AnswerColumn::SelectedAnswer,
                            AnswerColumn::IsCorrect,
                            AnswerColumn::UpdatedAt,
                        ])
                        .to_owned(),
                )
                .exec(&txn)
                .await
                .map_err(|e| LmsError::database_operation(format!("保存作答失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(())
    }

    pub async fn list_student_answers_impl(&self, student_id: i64) -> Result<Vec<StudentAnswer>> {
        let answers = StudentAnswers::find()
            .filter(AnswerColumn::StudentId.eq(student_id))
            .order_by_asc(AnswerColumn::McqId)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作答失败: {e}")))?;

        Ok(answers.into_iter().map(|m| m.into_student_answer()).collect())
    }
}
