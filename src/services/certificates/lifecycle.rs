//! 证书签发、审批与查询

use std::sync::Arc;

use tracing::{info, warn};

use super::cgpa::compute_cgpa;
use crate::errors::{LmsError, Result};
use crate::middlewares::guard::{require_admin, require_student};
use crate::models::PaginationQuery;
use crate::models::certificates::{
    entities::{ApprovalOutcome, Certificate, NewCertificate},
    requests::CreateCertificateRequest,
    responses::{CertificateListResponse, CgpaResponse},
};
use crate::models::users::entities::User;
use crate::services::marks::compute::find_student;
use crate::services::notifications::{dispatch, notify};
use crate::storage::Storage;

pub async fn calculate_cgpa(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    student_id: i64,
) -> Result<CgpaResponse> {
    require_admin(caller)?;
    let student = find_student(storage, student_id).await?;
    compute_cgpa(storage, &student).await
}

/// 按当前成绩生成待审批的证书快照
pub async fn issue_certificate(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    student_id: i64,
    req: CreateCertificateRequest,
) -> Result<Certificate> {
    let admin = require_admin(caller)?;
    let issued_by = req.validated_issuer()?.to_string();

    let student = find_student(storage, student_id).await?;
    let batch = storage
        .get_batch_by_id(student.batch_id)
        .await?
        .ok_or_else(|| LmsError::not_found("Batch not found"))?;
    let cgpa = compute_cgpa(storage, &student).await?;

    let certificate = storage
        .create_certificate(NewCertificate {
            student_id: student.id,
            student_code: student.student_code.clone(),
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            program: student.program.clone(),
            batch_title: batch.title,
            cgpa: cgpa.cgpa,
            certificate_date: chrono::Utc::now().date_naive(),
            issued_by,
        })
        .await?;

    info!(
        "Admin {} issued certificate {} for student {} (cgpa {:.2})",
        admin.id, certificate.id, student.id, certificate.cgpa
    );
    notify(
        storage.clone(),
        dispatch::certificate_issued(student.user_id, &certificate),
    );

    Ok(certificate)
}

/// 审批证书，已审批的证书原样返回
pub async fn approve_certificate(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    certificate_id: i64,
) -> Result<Certificate> {
    require_admin(caller)?;

    let approved = match storage.approve_certificate(certificate_id).await? {
        Some(ApprovalOutcome::Approved(certificate)) => certificate,
        Some(ApprovalOutcome::AlreadyApproved(certificate)) => return Ok(certificate),
        None => return Err(LmsError::not_found("Certificate not found.")),
    };

    match storage.get_student_by_id(approved.student_id).await {
        Ok(Some(student)) => notify(
            storage.clone(),
            dispatch::certificate_approved(student.user_id, &approved),
        ),
        Ok(None) => warn!("Certificate {} has no student profile", approved.id),
        Err(e) => warn!("Skipping approval notification for certificate {}: {}", approved.id, e),
    }

    Ok(approved)
}

pub async fn list_certificates(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    query: PaginationQuery,
) -> Result<CertificateListResponse> {
    require_admin(caller)?;
    storage.list_certificates_with_pagination(query).await
}

/// 删除未审批的证书
pub async fn delete_certificate(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    certificate_id: i64,
) -> Result<()> {
    require_admin(caller)?;

    let certificate = storage
        .get_certificate_by_id(certificate_id)
        .await?
        .ok_or_else(|| LmsError::not_found("Certificate not found."))?;
    if certificate.approved {
        return Err(LmsError::conflict(
            "An approved certificate cannot be deleted.",
        ));
    }

    if !storage.delete_certificate(certificate_id).await? {
        return Err(LmsError::not_found("Certificate not found."));
    }
    Ok(())
}

/// 学生查看自己的证书；没有证书与未审批返回同样的错误
pub async fn certificate_for_student(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
) -> Result<Certificate> {
    let student = require_student(storage, caller).await?;

    storage
        .get_latest_approved_certificate(student.id)
        .await?
        .ok_or_else(|| LmsError::not_found("Certificate not found or not approved"))
}
