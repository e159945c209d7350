use super::list::list_mcqs;
use super::manage::create_mcqs;
use super::submit::submit_answers;
use crate::errors::LmsError;
use crate::models::mcqs::entities::Mcq;
use crate::models::mcqs::requests::{AnswerInput, CreateMcqsRequest, McqInput, SubmitAnswersRequest};
use crate::models::mcqs::responses::McqListResponse;
use crate::storage::testing::{self, Campus};

fn question(text: &str, correct: &str) -> McqInput {
    McqInput {
        question: text.to_string(),
        answers: vec!["a".into(), "b".into(), "c".into()],
        correct_answer: correct.to_string(),
    }
}

fn answers(pairs: &[(i64, &str)]) -> SubmitAnswersRequest {
    SubmitAnswersRequest {
        mcq_answers: pairs
            .iter()
            .map(|(mcq_id, selected)| AnswerInput {
                mcq_id: *mcq_id,
                selected_answer: selected.to_string(),
            })
            .collect(),
    }
}

async fn quiz(c: &Campus) -> (i64, Vec<Mcq>) {
    let material = testing::material(&c.storage, c.batch.id, c.course.id, "quiz", None).await;
    let mcqs = create_mcqs(
        &c.storage,
        Some(&c.professor_user),
        c.course.id,
        material.id,
        CreateMcqsRequest {
            mcqs: vec![
                question("q1", "a"),
                question("q2", "b"),
                question("q3", "c"),
                question("q4", "a"),
            ],
        },
    )
    .await
    .unwrap();
    (material.id, mcqs)
}

#[tokio::test]
async fn test_three_answers_of_four_questions() {
    let c = testing::campus().await;
    let (material_id, mcqs) = quiz(&c).await;
    let ids: Vec<i64> = mcqs.iter().map(|m| m.id).collect();

    let summary = submit_answers(
        &c.storage,
        Some(&c.student_user),
        c.course.id,
        material_id,
        answers(&[(ids[0], "a"), (ids[1], "b"), (ids[2], "c")]),
    )
    .await
    .unwrap();

    assert_eq!(summary.total_questions, 4);
    assert_eq!(summary.answered_questions, 3);
    assert_eq!(summary.correct_answers, 3);
    assert_eq!(summary.total_score, 3);
}

#[tokio::test]
async fn test_unknown_question_rejects_whole_submission() {
    let c = testing::campus().await;
    let (material_id, mcqs) = quiz(&c).await;

    let err = submit_answers(
        &c.storage,
        Some(&c.student_user),
        c.course.id,
        material_id,
        answers(&[(mcqs[0].id, "a"), (9999, "a")]),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, LmsError::NotFound(_)));
    assert_eq!(err.message(), "MCQ with ID 9999 not found in this material");

    let stored = c.storage.list_student_answers(c.student.id).await.unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn test_resubmission_overwrites_previous_answer() {
    let c = testing::campus().await;
    let (material_id, mcqs) = quiz(&c).await;
    let first = mcqs[0].id;

    for selected in ["b", "a"] {
        submit_answers(
            &c.storage,
            Some(&c.student_user),
            c.course.id,
            material_id,
            answers(&[(first, selected)]),
        )
        .await
        .unwrap();
    }

    let stored = c.storage.list_student_answers(c.student.id).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].selected_answer, "a");
    assert!(stored[0].is_correct);
}

#[tokio::test]
async fn test_students_do_not_see_correct_answers() {
    let c = testing::campus().await;
    let (material_id, _) = quiz(&c).await;

    let for_student = list_mcqs(&c.storage, Some(&c.student_user), c.course.id, material_id)
        .await
        .unwrap();
    assert!(matches!(for_student, McqListResponse::Questions(ref q) if q.len() == 4));

    let for_professor = list_mcqs(&c.storage, Some(&c.professor_user), c.course.id, material_id)
        .await
        .unwrap();
    assert!(matches!(for_professor, McqListResponse::Full(_)));
}

#[tokio::test]
async fn test_students_cannot_create_questions() {
    let c = testing::campus().await;
    let material = testing::material(&c.storage, c.batch.id, c.course.id, "quiz", None).await;

    let err = create_mcqs(
        &c.storage,
        Some(&c.student_user),
        c.course.id,
        material.id,
        CreateMcqsRequest {
            mcqs: vec![question("q1", "a")],
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, LmsError::Authorization(_)));
}
