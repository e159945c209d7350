//! 证书存储操作

use super::SeaOrmStorage;
use crate::entity::certificates::{ActiveModel, Column, DATE_FORMAT, Entity as Certificates};
use crate::errors::{LmsError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    certificates::{
        entities::{ApprovalOutcome, Certificate, NewCertificate},
        responses::CertificateListResponse,
    },
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 保存一份待审批的证书快照
    pub async fn create_certificate_impl(&self, cert: NewCertificate) -> Result<Certificate> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(cert.student_id),
            student_code: Set(cert.student_code),
            first_name: Set(cert.first_name),
            last_name: Set(cert.last_name),
            program: Set(cert.program),
            batch_title: Set(cert.batch_title),
            cgpa: Set(cert.cgpa),
            certificate_date: Set(cert.certificate_date.format(DATE_FORMAT).to_string()),
            issued_by: Set(cert.issued_by),
            approved: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建证书失败: {e}")))?;

        Ok(result.into_certificate())
    }

    pub async fn get_certificate_by_id_impl(
        &self,
        certificate_id: i64,
    ) -> Result<Option<Certificate>> {
        let result = Certificates::find_by_id(certificate_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询证书失败: {e}")))?;

        Ok(result.map(|m| m.into_certificate()))
    }

    /// 审批证书
    pub async fn approve_certificate_impl(
        &self,
        certificate_id: i64,
    ) -> Result<Option<ApprovalOutcome>> {
        // 只更新尚未审批的行，并发审批时只有一个调用方命中
        let result = Certificates::update_many()
            .col_expr(Column::Approved, Expr::value(true))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::Id.eq(certificate_id))
            .filter(Column::Approved.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("审批证书失败: {e}")))?;

        let Some(model) = Certificates::find_by_id(certificate_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询证书失败: {e}")))?
        else {
            return Ok(None);
        };

        let certificate = model.into_certificate();
        Ok(Some(if result.rows_affected > 0 {
            ApprovalOutcome::Approved(certificate)
        } else {
            ApprovalOutcome::AlreadyApproved(certificate)
        }))
    }

    /// 分页列出证书，新的在前
    pub async fn list_certificates_with_pagination_impl(
        &self,
        query: PaginationQuery,
    ) -> Result<CertificateListResponse> {
        let (page, size) = query.normalized();

        let paginator = Certificates::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询证书总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询证书页数失败: {e}")))?;

        let certificates = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询证书列表失败: {e}")))?;

        Ok(CertificateListResponse {
            items: certificates
                .into_iter()
                .map(|m| m.into_certificate())
                .collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn delete_certificate_impl(&self, certificate_id: i64) -> Result<bool> {
        let result = Certificates::delete_by_id(certificate_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除证书失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 学生最新一份已审批证书
    pub async fn get_latest_approved_certificate_impl(
        &self,
        student_id: i64,
    ) -> Result<Option<Certificate>> {
        let result = Certificates::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Approved.eq(true))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询证书失败: {e}")))?;

        Ok(result.map(|m| m.into_certificate()))
    }
}
