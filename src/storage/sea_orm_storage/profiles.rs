//! 学生与教师档案存储操作

use super::users::insert_user;
use super::{SeaOrmStorage, map_write_err};
use crate::entity::professors::{
    ActiveModel as ProfessorActiveModel, Column as ProfessorColumn, Entity as Professors,
};
use crate::entity::students::{
    ActiveModel as StudentActiveModel, Column as StudentColumn, Entity as Students,
};
use crate::errors::{LmsError, Result};
use crate::models::{
    profiles::{
        entities::{Professor, Student},
        requests::{CreateProfessorRequest, CreateStudentRequest},
    },
    users::{entities::User, requests::CreateUserRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};

impl SeaOrmStorage {
    /// 创建学生账号与档案
    pub async fn create_student_account_impl(
        &self,
        user: CreateUserRequest,
        profile: CreateStudentRequest,
    ) -> Result<(User, Student)> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let user = insert_user(&txn, user, now).await?;

        let student = StudentActiveModel {
            user_id: Set(user.id),
            batch_id: Set(profile.batch_id),
            student_code: Set(profile.student_code.trim().to_string()),
            first_name: Set(profile.first_name.trim().to_string()),
            last_name: Set(profile.last_name.trim().to_string()),
            program: Set(profile.program.trim().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| map_write_err(e, "Student code already exists", "创建学生档案失败"))?;

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok((user, student.into_student()))
    }

    /// 创建教师账号与档案
    pub async fn create_professor_account_impl(
        &self,
        user: CreateUserRequest,
        profile: CreateProfessorRequest,
    ) -> Result<(User, Professor)> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let user = insert_user(&txn, user, now).await?;

        let professor = ProfessorActiveModel {
            user_id: Set(user.id),
            first_name: Set(profile.first_name.trim().to_string()),
            last_name: Set(profile.last_name.trim().to_string()),
            designation: Set(profile.designation),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| LmsError::database_operation(format!("创建教师档案失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok((user, professor.into_professor()))
    }

    /// 通过 ID 获取学生档案
    pub async fn get_student_by_id_impl(&self, student_id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过用户 ID 获取学生档案
    pub async fn get_student_by_user_id_impl(&self, user_id: i64) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(StudentColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过用户 ID 获取教师档案
    pub async fn get_professor_by_user_id_impl(&self, user_id: i64) -> Result<Option<Professor>> {
        let result = Professors::find()
            .filter(ProfessorColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_professor()))
    }

    /// 通过 ID 获取教师档案
    pub async fn get_professor_by_id_impl(&self, professor_id: i64) -> Result<Option<Professor>> {
        let result = Professors::find_by_id(professor_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_professor()))
    }
}
