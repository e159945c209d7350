/// 成绩汇总的统计范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarksScope {
    Material { course_id: i64, material_id: i64 },
    Course { course_id: i64 },
    /// 全系统范围
    Overall,
}

/// 某学生在某一范围内的原始统计值
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MarksTotals {
    pub total_mcqs: i64,
    pub correct_mcqs: i64,
    pub expected_marks: f64,
    pub obtained_marks: f64,
    pub graded_submissions: i64,
}
