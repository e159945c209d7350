//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod catalog;
mod certificates;
mod marks;
mod mcqs;
mod notifications;
mod profiles;
mod progress;
mod users;

use crate::errors::{LmsError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

const SQLITE_MEMORY_URL: &str = "sqlite::memory:";

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = crate::config::AppConfig::get();
        Self::connect(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 连接数据库并运行迁移
    ///
    /// `sqlite::memory:` 会被限制为单连接，保证所有查询落在同一个内存库上。
    pub async fn connect(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| LmsError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url == SQLITE_MEMORY_URL;

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| LmsError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory")
                .pragma("mmap_size", "536870912")
                .pragma("wal_autocheckpoint", "1000");
        }

        let mut pool = SqlitePoolOptions::new()
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout));

        pool = if in_memory {
            pool.max_connections(1).idle_timeout(None).max_lifetime(None)
        } else {
            pool.max_connections(pool_size.max(1))
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool
            .connect_with(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(5.min(pool_size))
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url == SQLITE_MEMORY_URL || url == ":memory:" {
            Ok(SQLITE_MEMORY_URL.to_string())
        } else if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(LmsError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    PaginationQuery,
    assignments::{entities::AssignmentSubmission, requests::NewSubmission},
    catalog::{
        entities::{Batch, BatchCourse, Course, Material},
        requests::{
            AssignBatchCourseRequest, CreateBatchRequest, CreateCourseRequest,
            CreateMaterialRequest,
        },
    },
    certificates::{
        entities::{ApprovalOutcome, Certificate, NewCertificate},
        responses::CertificateListResponse,
    },
    marks::entities::{MarksScope, MarksTotals},
    mcqs::{
        entities::{Mcq, ScoredAnswer, StudentAnswer},
        requests::McqInput,
    },
    notifications::{
        entities::Notification, requests::CreateNotificationRequest,
        responses::NotificationListResponse,
    },
    profiles::{
        entities::{Professor, Student},
        requests::{CreateProfessorRequest, CreateStudentRequest},
    },
    progress::entities::VideoProgress,
    users::{
        entities::{User, UserRole},
        requests::CreateUserRequest,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users_by_role(&self, role: UserRole) -> Result<u64> {
        self.count_users_by_role_impl(role).await
    }

    // 档案模块
    async fn create_student_account(
        &self,
        user: CreateUserRequest,
        profile: CreateStudentRequest,
    ) -> Result<(User, Student)> {
        self.create_student_account_impl(user, profile).await
    }

    async fn create_professor_account(
        &self,
        user: CreateUserRequest,
        profile: CreateProfessorRequest,
    ) -> Result<(User, Professor)> {
        self.create_professor_account_impl(user, profile).await
    }

    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(student_id).await
    }

    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>> {
        self.get_student_by_user_id_impl(user_id).await
    }

    async fn get_professor_by_user_id(&self, user_id: i64) -> Result<Option<Professor>> {
        self.get_professor_by_user_id_impl(user_id).await
    }

    async fn get_professor_by_id(&self, professor_id: i64) -> Result<Option<Professor>> {
        self.get_professor_by_id_impl(professor_id).await
    }

    // 课程目录模块
    async fn create_batch(&self, batch: CreateBatchRequest) -> Result<Batch> {
        self.create_batch_impl(batch).await
    }

    async fn get_batch_by_id(&self, batch_id: i64) -> Result<Option<Batch>> {
        self.get_batch_by_id_impl(batch_id).await
    }

    async fn list_batches(&self) -> Result<Vec<Batch>> {
        self.list_batches_impl().await
    }

    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    async fn assign_batch_course(
        &self,
        batch_id: i64,
        req: AssignBatchCourseRequest,
    ) -> Result<BatchCourse> {
        self.assign_batch_course_impl(batch_id, req).await
    }

    async fn list_courses_of_batch(&self, batch_id: i64) -> Result<Vec<Course>> {
        self.list_courses_of_batch_impl(batch_id).await
    }

    async fn is_course_in_batch(&self, batch_id: i64, course_id: i64) -> Result<bool> {
        self.is_course_in_batch_impl(batch_id, course_id).await
    }

    async fn is_professor_assigned(&self, professor_id: i64, course_id: i64) -> Result<bool> {
        self.is_professor_assigned_impl(professor_id, course_id)
            .await
    }

    async fn create_material(
        &self,
        professor_id: Option<i64>,
        material: CreateMaterialRequest,
    ) -> Result<Material> {
        self.create_material_impl(professor_id, material).await
    }

    async fn get_material_by_id(&self, material_id: i64) -> Result<Option<Material>> {
        self.get_material_by_id_impl(material_id).await
    }

    async fn list_materials_by_course(&self, course_id: i64) -> Result<Vec<Material>> {
        self.list_materials_by_course_impl(course_id).await
    }

    async fn delete_material(&self, material_id: i64) -> Result<bool> {
        self.delete_material_impl(material_id).await
    }

    async fn count_materials(&self) -> Result<u64> {
        self.count_materials_impl().await
    }

    // 视频进度模块
    async fn upsert_video_progress(
        &self,
        user_id: i64,
        material_id: i64,
        progress: i32,
    ) -> Result<VideoProgress> {
        self.upsert_video_progress_impl(user_id, material_id, progress)
            .await
    }

    async fn get_progress_map(
        &self,
        user_id: i64,
        material_ids: &[i64],
    ) -> Result<HashMap<i64, i32>> {
        self.get_progress_map_impl(user_id, material_ids).await
    }

    async fn sum_video_progress(&self, user_id: i64) -> Result<i64> {
        self.sum_video_progress_impl(user_id).await
    }

    // 选择题模块
    async fn create_mcqs(
        &self,
        course_id: i64,
        material_id: i64,
        mcqs: Vec<McqInput>,
    ) -> Result<Vec<Mcq>> {
        self.create_mcqs_impl(course_id, material_id, mcqs).await
    }

    async fn get_mcq_by_id(&self, mcq_id: i64) -> Result<Option<Mcq>> {
        self.get_mcq_by_id_impl(mcq_id).await
    }

    async fn list_mcqs_by_material(&self, course_id: i64, material_id: i64) -> Result<Vec<Mcq>> {
        self.list_mcqs_by_material_impl(course_id, material_id)
            .await
    }

    async fn update_mcq(&self, mcq_id: i64, mcq: McqInput) -> Result<Option<Mcq>> {
        self.update_mcq_impl(mcq_id, mcq).await
    }

    async fn delete_mcq(&self, mcq_id: i64) -> Result<bool> {
        self.delete_mcq_impl(mcq_id).await
    }

    async fn save_student_answers(
        &self,
        student_id: i64,
        answers: Vec<ScoredAnswer>,
    ) -> Result<()> {
        self.save_student_answers_impl(student_id, answers).await
    }

    async fn list_student_answers(&self, student_id: i64) -> Result<Vec<StudentAnswer>> {
        self.list_student_answers_impl(student_id).await
    }

    // 作业提交模块
    async fn upsert_assignment_submission(
        &self,
        submission: NewSubmission,
    ) -> Result<AssignmentSubmission> {
        self.upsert_assignment_submission_impl(submission).await
    }

    async fn get_assignment_submission(
        &self,
        student_id: i64,
        course_id: i64,
        material_id: i64,
    ) -> Result<Option<AssignmentSubmission>> {
        self.get_assignment_submission_impl(student_id, course_id, material_id)
            .await
    }

    async fn list_assignment_submissions(
        &self,
        course_id: i64,
        material_id: i64,
    ) -> Result<Vec<AssignmentSubmission>> {
        self.list_assignment_submissions_impl(course_id, material_id)
            .await
    }

    async fn grade_assignment_submission(
        &self,
        submission_id: i64,
        marks: f64,
    ) -> Result<Option<AssignmentSubmission>> {
        self.grade_assignment_submission_impl(submission_id, marks)
            .await
    }

    // 成绩统计模块
    async fn collect_marks_totals(
        &self,
        student_id: i64,
        scope: MarksScope,
    ) -> Result<MarksTotals> {
        self.collect_marks_totals_impl(student_id, scope).await
    }

    // 证书模块
    async fn create_certificate(&self, certificate: NewCertificate) -> Result<Certificate> {
        self.create_certificate_impl(certificate).await
    }

    async fn get_certificate_by_id(&self, certificate_id: i64) -> Result<Option<Certificate>> {
        self.get_certificate_by_id_impl(certificate_id).await
    }

    async fn approve_certificate(&self, certificate_id: i64) -> Result<Option<ApprovalOutcome>> {
        self.approve_certificate_impl(certificate_id).await
    }

    async fn list_certificates_with_pagination(
        &self,
        query: PaginationQuery,
    ) -> Result<CertificateListResponse> {
        self.list_certificates_with_pagination_impl(query).await
    }

    async fn delete_certificate(&self, certificate_id: i64) -> Result<bool> {
        self.delete_certificate_impl(certificate_id).await
    }

    async fn get_latest_approved_certificate(
        &self,
        student_id: i64,
    ) -> Result<Option<Certificate>> {
        self.get_latest_approved_certificate_impl(student_id).await
    }

    // 通知模块
    async fn create_notification(&self, req: CreateNotificationRequest) -> Result<Notification> {
        self.create_notification_impl(req).await
    }

    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        query: PaginationQuery,
    ) -> Result<NotificationListResponse> {
        self.list_notifications_with_pagination_impl(user_id, query)
            .await
    }

    async fn count_unread_notifications(&self, user_id: i64) -> Result<u64> {
        self.count_unread_notifications_impl(user_id).await
    }
}

/// 唯一约束冲突转为 Conflict，其余为数据库错误
pub(crate) fn map_write_err(err: sea_orm::DbErr, conflict: &str, context: &str) -> LmsError {
    if let Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return LmsError::conflict(conflict);
    }
    LmsError::database_operation(format!("{context}: {err}"))
}
