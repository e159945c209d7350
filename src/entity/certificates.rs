//! 证书实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "certificates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub program: String,
    pub batch_title: String,
    pub cgpa: f64,
    /// YYYY-MM-DD
    pub certificate_date: String,
    pub issued_by: String,
    pub approved: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub const DATE_FORMAT: &str = "%Y-%m-%d";

impl Model {
    pub fn into_certificate(self) -> crate::models::certificates::entities::Certificate {
        crate::models::certificates::entities::Certificate {
            id: self.id,
            student_id: self.student_id,
            student_code: self.student_code,
            first_name: self.first_name,
            last_name: self.last_name,
            program: self.program,
            batch_title: self.batch_title,
            cgpa: self.cgpa,
            certificate_date: chrono::NaiveDate::parse_from_str(
                &self.certificate_date,
                DATE_FORMAT,
            )
            .unwrap_or_default(),
            issued_by: self.issued_by,
            approved: self.approved,
            created_at: super::ts_to_datetime(self.created_at),
            updated_at: super::ts_to_datetime(self.updated_at),
        }
    }
}
