use super::grade::{GradeTarget, grade_assignment};
use super::list::list_submissions;
use super::submit::{authorize_submission, record_submission};
use crate::errors::LmsError;
use crate::models::assignments::requests::GradeAssignmentRequest;
use crate::storage::testing;

#[tokio::test]
async fn test_resubmission_keeps_existing_marks() {
    let c = testing::campus().await;
    let s = &c.storage;
    let material = testing::material(s, c.batch.id, c.course.id, "essay", Some(20.0)).await;

    let (student, material) =
        authorize_submission(s, Some(&c.student_user), c.course.id, material.id)
            .await
            .unwrap();
    record_submission(s, &student, &material, "uploads/first.pdf".into())
        .await
        .unwrap();

    let target = GradeTarget {
        course_id: c.course.id,
        material_id: material.id,
        student_id: student.id,
    };
    let graded = grade_assignment(
        s,
        Some(&c.professor_user),
        target,
        GradeAssignmentRequest { marks: 17.5 },
    )
    .await
    .unwrap();
    assert_eq!(graded.marks, Some(17.5));

    let resubmitted = record_submission(s, &student, &material, "uploads/second.pdf".into())
        .await
        .unwrap();
    assert_eq!(resubmitted.id, graded.id);
    assert_eq!(resubmitted.file_path, "uploads/second.pdf");
    assert_eq!(resubmitted.marks, Some(17.5));

    let all = list_submissions(s, Some(&c.professor_user), c.course.id, material.id)
        .await
        .unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_unassigned_professor_cannot_grade() {
    let c = testing::campus().await;
    let s = &c.storage;
    let material = testing::material(s, c.batch.id, c.course.id, "essay", Some(20.0)).await;
    let (student, material) =
        authorize_submission(s, Some(&c.student_user), c.course.id, material.id)
            .await
            .unwrap();
    record_submission(s, &student, &material, "uploads/a.pdf".into())
        .await
        .unwrap();

    let (outsider, _) = testing::professor(s, "outsider").await;
    let err = grade_assignment(
        s,
        Some(&outsider),
        GradeTarget {
            course_id: c.course.id,
            material_id: material.id,
            student_id: student.id,
        },
        GradeAssignmentRequest { marks: 10.0 },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, LmsError::Authorization(_)));
    assert_eq!(err.message(), "Forbidden. You are not assigned to this course.");
}

#[tokio::test]
async fn test_grading_missing_submission() {
    let c = testing::campus().await;
    let material = testing::material(&c.storage, c.batch.id, c.course.id, "essay", Some(20.0)).await;

    let err = grade_assignment(
        &c.storage,
        Some(&c.professor_user),
        GradeTarget {
            course_id: c.course.id,
            material_id: material.id,
            student_id: c.student.id,
        },
        GradeAssignmentRequest { marks: 10.0 },
    )
    .await
    .unwrap_err();
    assert_eq!(err.message(), "Assignment not found.");
}

#[tokio::test]
async fn test_submission_requires_course_in_batch() {
    let c = testing::campus().await;
    let s = &c.storage;
    let other_batch = testing::batch(s, "Batch 2025").await;
    let elective = testing::course(s, "Compilers", 4).await;
    testing::assign(s, other_batch.id, elective.id, c.professor.id).await;
    let material = testing::material(s, other_batch.id, elective.id, "parser", Some(10.0)).await;

    let err = authorize_submission(s, Some(&c.student_user), elective.id, material.id)
        .await
        .unwrap_err();
    assert!(matches!(err, LmsError::Authorization(_)));
    assert_eq!(err.message(), "You are not enrolled in this course");

    let err = authorize_submission(s, Some(&c.student_user), c.course.id, material.id)
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Material not found");
}

#[tokio::test]
async fn test_failed_submission_removes_saved_file() {
    let c = testing::campus().await;
    let s = &c.storage;
    let material = testing::material(s, c.batch.id, c.course.id, "essay", Some(20.0)).await;
    let (student, mut material) =
        authorize_submission(s, Some(&c.student_user), c.course.id, material.id)
            .await
            .unwrap();

    let path = std::env::temp_dir().join(format!("lms-orphan-{}.pdf", uuid::Uuid::new_v4()));
    let path = path.to_string_lossy().to_string();
    tokio::fs::write(&path, b"%PDF-1.4").await.unwrap();

    // 资料不存在，外键约束让写库失败
    material.id = 9999;
    assert!(record_submission(s, &student, &material, path.clone()).await.is_err());
    assert!(!std::path::Path::new(&path).exists());
}
