//! 站内通知投递
//!
//! 通知在业务写入提交之后异步写入，失败只记录日志。

use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::assignments::entities::AssignmentSubmission;
use crate::models::certificates::entities::Certificate;
use crate::models::notifications::{entities::NotificationKind, requests::CreateNotificationRequest};
use crate::storage::Storage;

/// 在后台任务中写入通知
pub fn notify(storage: Arc<dyn Storage>, req: CreateNotificationRequest) {
    tokio::spawn(async move {
        let kind = req.kind;
        let user_id = req.user_id;
        match storage.create_notification(req).await {
            Ok(notification) => {
                debug!("Notification {} ({}) sent to user {}", notification.id, kind, user_id)
            }
            Err(e) => warn!("Failed to send {} notification to user {}: {}", kind, user_id, e),
        }
    });
}

pub fn certificate_issued(user_id: i64, certificate: &Certificate) -> CreateNotificationRequest {
    CreateNotificationRequest {
        user_id,
        kind: NotificationKind::CertificateIssued,
        title: "Certificate issued".to_string(),
        content: Some(format!(
            "A certificate with CGPA {:.2} has been issued and is awaiting approval.",
            certificate.cgpa
        )),
    }
}

pub fn certificate_approved(user_id: i64, certificate: &Certificate) -> CreateNotificationRequest {
    CreateNotificationRequest {
        user_id,
        kind: NotificationKind::CertificateApproved,
        title: "Certificate approved".to_string(),
        content: Some(format!(
            "Your certificate dated {} has been approved.",
            certificate.certificate_date
        )),
    }
}

pub fn assignment_graded(
    user_id: i64,
    submission: &AssignmentSubmission,
) -> CreateNotificationRequest {
    CreateNotificationRequest {
        user_id,
        kind: NotificationKind::AssignmentGraded,
        title: "Assignment graded".to_string(),
        content: Some(format!(
            "Your assignment for material {} received {} marks.",
            submission.material_id,
            submission.marks.unwrap_or_default()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graded_template() {
        let now = chrono::Utc::now();
        let submission = AssignmentSubmission {
            id: 1,
            student_id: 2,
            material_id: 3,
            course_id: 4,
            batch_id: 5,
            file_path: "uploads/a.pdf".into(),
            marks: Some(88.5),
            submitted_at: now,
            updated_at: now,
        };
        let req = assignment_graded(9, &submission);
        assert_eq!(req.user_id, 9);
        assert_eq!(req.kind, NotificationKind::AssignmentGraded);
        assert!(req.content.unwrap().contains("88.5"));
    }
}
