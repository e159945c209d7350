//! 测试夹具：内存 SQLite 与常用数据

use std::sync::Arc;

use super::Storage;
use super::sea_orm_storage::SeaOrmStorage;
use crate::models::catalog::entities::{Batch, Course, CourseStatus, Material};
use crate::models::catalog::requests::{
    AssignBatchCourseRequest, CreateBatchRequest, CreateCourseRequest, CreateMaterialRequest,
};
use crate::models::profiles::entities::{Professor, Student};
use crate::models::profiles::requests::{
    AccountFields, CreateProfessorRequest, CreateStudentRequest,
};
use crate::models::users::entities::{User, UserRole};
use crate::models::users::requests::CreateUserRequest;

pub async fn memory_storage() -> Arc<dyn Storage> {
    let storage = SeaOrmStorage::connect("sqlite::memory:", 1, 5)
        .await
        .expect("in-memory sqlite");
    Arc::new(storage)
}

fn user_request(username: &str, role: UserRole) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        // 夹具不走登录，哈希值无需可验证
        password: "$argon2id$v=19$m=19456,t=2,p=1$fixture$fixture".to_string(),
        role,
        display_name: None,
    }
}

fn account(username: &str) -> AccountFields {
    AccountFields {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: "secret123".to_string(),
    }
}

pub async fn admin(storage: &Arc<dyn Storage>) -> User {
    storage
        .create_user(user_request("admin", UserRole::Admin))
        .await
        .expect("admin")
}

pub async fn professor(storage: &Arc<dyn Storage>, username: &str) -> (User, Professor) {
    storage
        .create_professor_account(
            user_request(username, UserRole::Professor),
            CreateProfessorRequest {
                account: account(username),
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                designation: Some("Lecturer".into()),
            },
        )
        .await
        .expect("professor")
}

pub async fn student(storage: &Arc<dyn Storage>, username: &str, batch_id: i64) -> (User, Student) {
    storage
        .create_student_account(
            user_request(username, UserRole::Student),
            CreateStudentRequest {
                account: account(username),
                batch_id,
                student_code: format!("S-{username}"),
                first_name: "Alan".into(),
                last_name: "Turing".into(),
                program: "Computer Science".into(),
            },
        )
        .await
        .expect("student")
}

pub async fn batch(storage: &Arc<dyn Storage>, title: &str) -> Batch {
    storage
        .create_batch(CreateBatchRequest {
            title: title.to_string(),
            subtitle: None,
        })
        .await
        .expect("batch")
}

pub async fn course(storage: &Arc<dyn Storage>, name: &str, credit: i32) -> Course {
    storage
        .create_course(CreateCourseRequest {
            name: name.to_string(),
            description: None,
            credit,
            status: CourseStatus::Published,
        })
        .await
        .expect("course")
}

pub async fn assign(storage: &Arc<dyn Storage>, batch_id: i64, course_id: i64, professor_id: i64) {
    storage
        .assign_batch_course(
            batch_id,
            AssignBatchCourseRequest {
                course_id,
                professor_id,
            },
        )
        .await
        .expect("assign course");
}

pub async fn material(
    storage: &Arc<dyn Storage>,
    batch_id: i64,
    course_id: i64,
    title: &str,
    marks: Option<f64>,
) -> Material {
    storage
        .create_material(
            None,
            CreateMaterialRequest {
                batch_id,
                course_id,
                title: title.to_string(),
                subtitle: None,
                description: None,
                video_path: Some(format!("videos/{title}.mp4")),
                assignment_path: None,
                marks,
            },
        )
        .await
        .expect("material")
}

/// 一个批次、一门课、一位负责教师与一名学生
pub struct Campus {
    pub storage: Arc<dyn Storage>,
    pub admin: User,
    pub professor_user: User,
    pub professor: Professor,
    pub student_user: User,
    pub student: Student,
    pub batch: Batch,
    pub course: Course,
}

pub async fn campus() -> Campus {
    let storage = memory_storage().await;
    let admin = admin(&storage).await;
    let batch = batch(&storage, "Batch 2024").await;
    let course = course(&storage, "Algorithms", 3).await;
    let (professor_user, professor) = professor(&storage, "prof").await;
    assign(&storage, batch.id, course.id, professor.id).await;
    let (student_user, student) = student(&storage, "alan", batch.id).await;

    Campus {
        storage,
        admin,
        professor_user,
        professor,
        student_user,
        student,
        batch,
        course,
    }
}
