//! 预导入模块，方便使用

pub use super::assignment_submissions::{
    ActiveModel as AssignmentSubmissionActiveModel, Entity as AssignmentSubmissions,
    Model as AssignmentSubmissionModel,
};
pub use super::batch_courses::{
    ActiveModel as BatchCourseActiveModel, Entity as BatchCourses, Model as BatchCourseModel,
};
pub use super::batches::{ActiveModel as BatchActiveModel, Entity as Batches, Model as BatchModel};
pub use super::certificates::{
    ActiveModel as CertificateActiveModel, Entity as Certificates, Model as CertificateModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::materials::{
    ActiveModel as MaterialActiveModel, Entity as Materials, Model as MaterialModel,
};
pub use super::mcqs::{ActiveModel as McqActiveModel, Entity as Mcqs, Model as McqModel};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::professors::{
    ActiveModel as ProfessorActiveModel, Entity as Professors, Model as ProfessorModel,
};
pub use super::student_answers::{
    ActiveModel as StudentAnswerActiveModel, Entity as StudentAnswers, Model as StudentAnswerModel,
};
pub use super::students::{ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
pub use super::video_progress::{
    ActiveModel as VideoProgressActiveModel, Entity as VideoProgressRecords,
    Model as VideoProgressModel,
};
