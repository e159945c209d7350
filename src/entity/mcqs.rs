//! 选择题实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mcqs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub material_id: i64,
    pub question: String,
    /// 候选答案，JSON 字符串数组
    #[sea_orm(column_type = "Text")]
    pub answers: String,
    pub correct_answer: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::materials::Entity",
        from = "Column::MaterialId",
        to = "super::materials::Column::Id"
    )]
    Material,
    #[sea_orm(has_many = "super::student_answers::Entity")]
    Answers,
}

impl Related<super::materials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Material.def()
    }
}

impl Related<super::student_answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_mcq(self) -> crate::models::mcqs::entities::Mcq {
        crate::models::mcqs::entities::Mcq {
            id: self.id,
            course_id: self.course_id,
            material_id: self.material_id,
            question: self.question,
            answers: serde_json::from_str(&self.answers).unwrap_or_default(),
            correct_answer: self.correct_answer,
            created_at: super::ts_to_datetime(self.created_at),
            updated_at: super::ts_to_datetime(self.updated_at),
        }
    }
}
