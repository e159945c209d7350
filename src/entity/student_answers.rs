//! 学生作答实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_answers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub mcq_id: i64,
    pub selected_answer: String,
    pub is_correct: bool,
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
    #[sea_orm(
        belongs_to = "super::mcqs::Entity",
        from = "Column::McqId",
        to = "super::mcqs::Column::Id"
    )]
    Mcq,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::mcqs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mcq.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student_answer(self) -> crate::models::mcqs::entities::StudentAnswer {
        crate::models::mcqs::entities::StudentAnswer {
            id: self.id,
            student_id: self.student_id,
            mcq_id: self.mcq_id,
            selected_answer: self.selected_answer,
            is_correct: self.is_correct,
            created_at: super::ts_to_datetime(self.created_at),
            updated_at: super::ts_to_datetime(self.updated_at),
        }
    }
}
