//! 百分比到绩点的换算表

/// (下限百分比, 绩点)，按下限升序排列
const GRADE_SCALE: [(f64, f64); 7] = [
    (60.0, 2.0),
    (70.0, 2.5),
    (75.0, 2.8),
    (80.0, 3.0),
    (85.0, 3.3),
    (90.0, 3.7),
    (95.0, 4.0),
];

/// 取不超过 `percentage` 的最高一档，低于 60% 为 0
pub fn percentage_to_grade_point(percentage: f64) -> f64 {
    GRADE_SCALE
        .iter()
        .rev()
        .find(|(floor, _)| percentage >= *floor)
        .map(|(_, point)| *point)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(percentage_to_grade_point(59.99), 0.0);
        assert_eq!(percentage_to_grade_point(60.0), 2.0);
        assert_eq!(percentage_to_grade_point(69.99), 2.0);
        assert_eq!(percentage_to_grade_point(70.0), 2.5);
        assert_eq!(percentage_to_grade_point(75.0), 2.8);
        assert_eq!(percentage_to_grade_point(80.0), 3.0);
        assert_eq!(percentage_to_grade_point(85.0), 3.3);
        assert_eq!(percentage_to_grade_point(90.0), 3.7);
        assert_eq!(percentage_to_grade_point(94.99), 3.7);
        assert_eq!(percentage_to_grade_point(95.0), 4.0);
        assert_eq!(percentage_to_grade_point(100.0), 4.0);
    }

    #[test]
    fn test_non_numbers_and_negatives() {
        assert_eq!(percentage_to_grade_point(0.0), 0.0);
        assert_eq!(percentage_to_grade_point(-5.0), 0.0);
        assert_eq!(percentage_to_grade_point(f64::NAN), 0.0);
    }

    #[test]
    fn test_monotonic() {
        let mut previous = 0.0;
        for step in 0..=1000 {
            let point = percentage_to_grade_point(step as f64 / 10.0);
            assert!(point >= previous);
            previous = point;
        }
    }
}
