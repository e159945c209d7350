use super::compute::{StudentRef, course_marks, material_marks, overall_marks, resolve_student};
use crate::errors::LmsError;
use crate::models::assignments::requests::NewSubmission;
use crate::models::mcqs::entities::ScoredAnswer;
use crate::models::mcqs::requests::McqInput;
use crate::storage::testing;

fn question(correct: &str) -> McqInput {
    McqInput {
        question: "Pick one".into(),
        answers: vec!["a".into(), "b".into()],
        correct_answer: correct.into(),
    }
}

#[tokio::test]
async fn test_course_marks_aggregate_mcqs_and_assignments() {
    let c = testing::campus().await;
    let s = &c.storage;
    let m1 = testing::material(s, c.batch.id, c.course.id, "week1", Some(20.0)).await;
    let m2 = testing::material(s, c.batch.id, c.course.id, "week2", Some(30.0)).await;

    let mcqs = s
        .create_mcqs(c.course.id, m1.id, vec![question("a"), question("b")])
        .await
        .unwrap();
    s.save_student_answers(
        c.student.id,
        vec![
            ScoredAnswer {
                mcq_id: mcqs[0].id,
                selected_answer: "a".into(),
                is_correct: true,
            },
            ScoredAnswer {
                mcq_id: mcqs[1].id,
                selected_answer: "a".into(),
                is_correct: false,
            },
        ],
    )
    .await
    .unwrap();

    let submission = s
        .upsert_assignment_submission(NewSubmission {
            student_id: c.student.id,
            material_id: m1.id,
            course_id: c.course.id,
            batch_id: c.batch.id,
            file_path: "uploads/w1.pdf".into(),
        })
        .await
        .unwrap();
    s.grade_assignment_submission(submission.id, 15.0)
        .await
        .unwrap();

    let marks = course_marks(s, &c.student, c.course.id).await.unwrap();
    assert_eq!(marks.mcq.obtained, 1.0);
    assert_eq!(marks.mcq.expected, 2.0);
    assert_eq!(marks.mcq.percentage, 50.0);
    assert_eq!(marks.assignment.obtained, 15.0);
    assert_eq!(marks.assignment.expected, 50.0);
    assert_eq!(marks.assignment.percentage, 30.0);
    assert_eq!(marks.assignment_average.graded_submissions, 1);

    let week2 = material_marks(s, &c.student, c.course.id, m2.id).await.unwrap();
    assert_eq!(week2.mcq.percentage, 0.0);
    assert_eq!(week2.assignment.obtained, 0.0);
    assert_eq!(week2.assignment.expected, 30.0);
}

#[tokio::test]
async fn test_average_ignores_ungraded_submissions() {
    let c = testing::campus().await;
    let s = &c.storage;
    let m1 = testing::material(s, c.batch.id, c.course.id, "week1", Some(20.0)).await;
    let m2 = testing::material(s, c.batch.id, c.course.id, "week2", Some(20.0)).await;

    let mut ids = Vec::new();
    for material in [&m1, &m2] {
        let saved = s
            .upsert_assignment_submission(NewSubmission {
                student_id: c.student.id,
                material_id: material.id,
                course_id: c.course.id,
                batch_id: c.batch.id,
                file_path: format!("uploads/{}.pdf", material.id),
            })
            .await
            .unwrap();
        ids.push(saved.id);
    }
    s.grade_assignment_submission(ids[0], 16.0).await.unwrap();

    // 未评分的提交不计入分母
    let marks = course_marks(s, &c.student, c.course.id).await.unwrap();
    assert_eq!(marks.assignment_average.graded_submissions, 1);
    assert_eq!(marks.assignment_average.average_marks, 16.0);
}

#[tokio::test]
async fn test_marks_without_any_work_are_zero() {
    let c = testing::campus().await;
    testing::material(&c.storage, c.batch.id, c.course.id, "intro", None).await;

    let overall = overall_marks(&c.storage, &c.student).await.unwrap();
    assert_eq!(overall.mcq.percentage, 0.0);
    assert_eq!(overall.assignment.percentage, 0.0);
    assert_eq!(overall.assignment_average.average_marks, 0.0);
}

#[tokio::test]
async fn test_marks_require_enrollment() {
    let c = testing::campus().await;
    let s = &c.storage;
    let elective = testing::course(s, "Compilers", 4).await;

    let err = course_marks(s, &c.student, elective.id).await.unwrap_err();
    assert!(matches!(err, LmsError::Authorization(_)));
    assert_eq!(err.message(), "Student is not enrolled in this course.");

    let lonely_batch = testing::batch(s, "Empty batch").await;
    let (_, lonely) = testing::student(s, "lonely", lonely_batch.id).await;
    let err = overall_marks(s, &lonely).await.unwrap_err();
    assert_eq!(err.message(), "Student is not enrolled in any course.");
}

#[tokio::test]
async fn test_admin_lookup_of_student() {
    let c = testing::campus().await;
    let s = &c.storage;

    let found = resolve_student(s, Some(&c.admin), StudentRef::ById(c.student.id))
        .await
        .unwrap();
    assert_eq!(found.id, c.student.id);

    let err = resolve_student(s, Some(&c.admin), StudentRef::ById(9999))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Student not found.");

    let err = resolve_student(s, Some(&c.student_user), StudentRef::ById(c.student.id))
        .await
        .unwrap_err();
    assert!(matches!(err, LmsError::Authorization(_)));
}
