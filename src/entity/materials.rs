//! 课程资料实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "materials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub batch_id: i64,
    pub course_id: i64,
    pub professor_id: Option<i64>,
    pub title: String,
    pub subtitle: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub video_path: Option<String>,
    pub assignment_path: Option<String>,
    pub marks: Option<f64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::batches::Entity",
        from = "Column::BatchId",
        to = "super::batches::Column::Id"
    )]
    Batch,
    #[sea_orm(has_many = "super::mcqs::Entity")]
    Mcqs,
    #[sea_orm(has_many = "super::video_progress::Entity")]
    VideoProgress,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::mcqs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mcqs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_material(self) -> crate::models::catalog::entities::Material {
        crate::models::catalog::entities::Material {
            id: self.id,
            batch_id: self.batch_id,
            course_id: self.course_id,
            professor_id: self.professor_id,
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            video_path: self.video_path,
            assignment_path: self.assignment_path,
            marks: self.marks,
            created_at: super::ts_to_datetime(self.created_at),
            updated_at: super::ts_to_datetime(self.updated_at),
        }
    }
}
