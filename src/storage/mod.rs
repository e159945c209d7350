use std::collections::HashMap;
use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;
#[cfg(test)]
pub(crate) mod testing;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（密码需已哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计某角色的用户数
    async fn count_users_by_role(&self, role: UserRole) -> Result<u64>;

    /// 档案管理方法
    // 同一事务内创建学生账号与档案
    async fn create_student_account(
        &self,
        user: CreateUserRequest,
        profile: CreateStudentRequest,
    ) -> Result<(User, Student)>;
    // 同一事务内创建教师账号与档案
    async fn create_professor_account(
        &self,
        user: CreateUserRequest,
        profile: CreateProfessorRequest,
    ) -> Result<(User, Professor)>;
    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>>;
    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>>;
    async fn get_professor_by_user_id(&self, user_id: i64) -> Result<Option<Professor>>;
    async fn get_professor_by_id(&self, professor_id: i64) -> Result<Option<Professor>>;

    /// 课程目录方法
    async fn create_batch(&self, batch: CreateBatchRequest) -> Result<Batch>;
    async fn get_batch_by_id(&self, batch_id: i64) -> Result<Option<Batch>>;
    async fn list_batches(&self) -> Result<Vec<Batch>>;
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    async fn list_courses(&self) -> Result<Vec<Course>>;
    // 为批次分配课程与教师，(batch, course) 已存在时覆盖教师
    async fn assign_batch_course(
        &self,
        batch_id: i64,
        req: AssignBatchCourseRequest,
    ) -> Result<BatchCourse>;
    // 批次下的全部课程
    async fn list_courses_of_batch(&self, batch_id: i64) -> Result<Vec<Course>>;
    async fn is_course_in_batch(&self, batch_id: i64, course_id: i64) -> Result<bool>;
    // 教师是否在任一批次中负责该课程
    async fn is_professor_assigned(&self, professor_id: i64, course_id: i64) -> Result<bool>;
    async fn create_material(
        &self,
        professor_id: Option<i64>,
        material: CreateMaterialRequest,
    ) -> Result<Material>;
    async fn get_material_by_id(&self, material_id: i64) -> Result<Option<Material>>;
    // 按创建顺序（id 升序）列出课程资料
    async fn list_materials_by_course(&self, course_id: i64) -> Result<Vec<Material>>;
    async fn delete_material(&self, material_id: i64) -> Result<bool>;
    async fn count_materials(&self) -> Result<u64>;

    /// 视频进度方法
    async fn upsert_video_progress(
        &self,
        user_id: i64,
        material_id: i64,
        progress: i32,
    ) -> Result<VideoProgress>;
    // material_id -> progress
    async fn get_progress_map(
        &self,
        user_id: i64,
        material_ids: &[i64],
    ) -> Result<HashMap<i64, i32>>;
    async fn sum_video_progress(&self, user_id: i64) -> Result<i64>;

    /// 选择题方法
    async fn create_mcqs(
        &self,
        course_id: i64,
        material_id: i64,
        mcqs: Vec<McqInput>,
    ) -> Result<Vec<Mcq>>;
    async fn get_mcq_by_id(&self, mcq_id: i64) -> Result<Option<Mcq>>;
    async fn list_mcqs_by_material(&self, course_id: i64, material_id: i64) -> Result<Vec<Mcq>>;
    async fn update_mcq(&self, mcq_id: i64, mcq: McqInput) -> Result<Option<Mcq>>;
    async fn delete_mcq(&self, mcq_id: i64) -> Result<bool>;
    // 同一事务内写入整批作答，按 (student, mcq) 覆盖
    async fn save_student_answers(&self, student_id: i64, answers: Vec<ScoredAnswer>)
    -> Result<()>;
    async fn list_student_answers(&self, student_id: i64) -> Result<Vec<StudentAnswer>>;

    /// 作业提交方法
    // 按 (student, material, course, batch) 覆盖文件，保留分数
    async fn upsert_assignment_submission(
        &self,
        submission: NewSubmission,
    ) -> Result<AssignmentSubmission>;
    async fn get_assignment_submission(
        &self,
        student_id: i64,
        course_id: i64,
        material_id: i64,
    ) -> Result<Option<AssignmentSubmission>>;
    async fn list_assignment_submissions(
        &self,
        course_id: i64,
        material_id: i64,
    ) -> Result<Vec<AssignmentSubmission>>;
    async fn grade_assignment_submission(
        &self,
        submission_id: i64,
        marks: f64,
    ) -> Result<Option<AssignmentSubmission>>;

    /// 成绩统计方法
    async fn collect_marks_totals(&self, student_id: i64, scope: MarksScope)
    -> Result<MarksTotals>;

    /// 证书方法
    async fn create_certificate(&self, certificate: NewCertificate) -> Result<Certificate>;
    async fn get_certificate_by_id(&self, certificate_id: i64) -> Result<Option<Certificate>>;
    // 条件更新 approved=false 的行，只有一个调用方得到 Approved
    async fn approve_certificate(&self, certificate_id: i64) -> Result<Option<ApprovalOutcome>>;
    async fn list_certificates_with_pagination(
        &self,
        query: PaginationQuery,
    ) -> Result<CertificateListResponse>;
    async fn delete_certificate(&self, certificate_id: i64) -> Result<bool>;
    async fn get_latest_approved_certificate(&self, student_id: i64)
    -> Result<Option<Certificate>>;

    /// 通知方法
    async fn create_notification(&self, req: CreateNotificationRequest) -> Result<Notification>;
    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        query: PaginationQuery,
    ) -> Result<NotificationListResponse>;
    async fn count_unread_notifications(&self, user_id: i64) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
