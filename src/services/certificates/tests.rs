use super::lifecycle::{
    approve_certificate, calculate_cgpa, certificate_for_student, delete_certificate,
    issue_certificate,
};
use crate::errors::LmsError;
use crate::models::assignments::requests::NewSubmission;
use crate::models::certificates::entities::ApprovalOutcome;
use crate::models::certificates::requests::CreateCertificateRequest;
use crate::models::mcqs::entities::ScoredAnswer;
use crate::models::mcqs::requests::McqInput;
use crate::storage::testing::{self, Campus};

fn issuer() -> CreateCertificateRequest {
    CreateCertificateRequest {
        issued_by: "Registrar".into(),
    }
}

/// 选择题 1/1 正确，作业 18/20
async fn strong_record(c: &Campus) {
    let s = &c.storage;
    let material = testing::material(s, c.batch.id, c.course.id, "final", Some(20.0)).await;
    let mcqs = s
        .create_mcqs(
            c.course.id,
            material.id,
            vec![McqInput {
                question: "Pick".into(),
                answers: vec!["a".into(), "b".into()],
                correct_answer: "a".into(),
            }],
        )
        .await
        .unwrap();
    s.save_student_answers(
        c.student.id,
        vec![ScoredAnswer {
            mcq_id: mcqs[0].id,
            selected_answer: "a".into(),
            is_correct: true,
        }],
    )
    .await
    .unwrap();
    let submission = s
        .upsert_assignment_submission(NewSubmission {
            student_id: c.student.id,
            material_id: material.id,
            course_id: c.course.id,
            batch_id: c.batch.id,
            file_path: "uploads/final.pdf".into(),
        })
        .await
        .unwrap();
    s.grade_assignment_submission(submission.id, 18.0)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_cgpa_from_stored_marks() {
    let c = testing::campus().await;
    strong_record(&c).await;

    let cgpa = calculate_cgpa(&c.storage, Some(&c.admin), c.student.id)
        .await
        .unwrap();
    assert_eq!(cgpa.mcq_percentage, 100.0);
    assert_eq!(cgpa.assignment_percentage, 90.0);
    assert_eq!(cgpa.mcq_grade_point, 4.0);
    assert_eq!(cgpa.assignment_grade_point, 3.7);
    assert_eq!(cgpa.cgpa, 3.85);
    assert_eq!(cgpa.total_credits, 3);
}

#[tokio::test]
async fn test_certificate_hidden_until_approved() {
    let c = testing::campus().await;
    strong_record(&c).await;
    let s = &c.storage;

    let issued = issue_certificate(s, Some(&c.admin), c.student.id, issuer())
        .await
        .unwrap();
    assert!(!issued.approved);
    assert_eq!(issued.batch_title, "Batch 2024");
    assert_eq!(issued.cgpa, 3.85);

    let err = certificate_for_student(s, Some(&c.student_user))
        .await
        .unwrap_err();
    assert!(matches!(err, LmsError::NotFound(_)));
    assert_eq!(err.message(), "Certificate not found or not approved");

    let approved = approve_certificate(s, Some(&c.admin), issued.id).await.unwrap();
    assert!(approved.approved);

    let again = approve_certificate(s, Some(&c.admin), issued.id).await.unwrap();
    assert!(again.approved);
    assert_eq!(again.updated_at, approved.updated_at);

    let visible = certificate_for_student(s, Some(&c.student_user)).await.unwrap();
    assert_eq!(visible.id, issued.id);
}

#[tokio::test]
async fn test_concurrent_approvals_flip_once() {
    let c = testing::campus().await;
    let s = &c.storage;

    let issued = issue_certificate(s, Some(&c.admin), c.student.id, issuer())
        .await
        .unwrap();

    let (first, second) = tokio::join!(
        s.approve_certificate(issued.id),
        s.approve_certificate(issued.id)
    );
    let outcomes = [first.unwrap().unwrap(), second.unwrap().unwrap()];
    let flipped = outcomes
        .iter()
        .filter(|o| matches!(o, ApprovalOutcome::Approved(_)))
        .count();
    assert_eq!(flipped, 1);
    assert!(outcomes.iter().all(|o| matches!(
        o,
        ApprovalOutcome::Approved(cert) | ApprovalOutcome::AlreadyApproved(cert) if cert.approved
    )));

    let later = s.approve_certificate(issued.id).await.unwrap().unwrap();
    assert!(matches!(later, ApprovalOutcome::AlreadyApproved(_)));
    assert_eq!(later.into_certificate().id, issued.id);
    assert!(s.approve_certificate(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_approved_certificate_cannot_be_deleted() {
    let c = testing::campus().await;
    let s = &c.storage;

    let draft = issue_certificate(s, Some(&c.admin), c.student.id, issuer())
        .await
        .unwrap();
    delete_certificate(s, Some(&c.admin), draft.id).await.unwrap();
    assert!(s.get_certificate_by_id(draft.id).await.unwrap().is_none());

    let issued = issue_certificate(s, Some(&c.admin), c.student.id, issuer())
        .await
        .unwrap();
    approve_certificate(s, Some(&c.admin), issued.id).await.unwrap();
    let err = delete_certificate(s, Some(&c.admin), issued.id)
        .await
        .unwrap_err();
    assert!(matches!(err, LmsError::Conflict(_)));
}

#[tokio::test]
async fn test_only_admins_issue_certificates() {
    let c = testing::campus().await;
    let err = issue_certificate(&c.storage, Some(&c.professor_user), c.student.id, issuer())
        .await
        .unwrap_err();
    assert!(matches!(err, LmsError::Authorization(_)));
}
