//! 分数与百分比计算
//!
//! 所有范围（单个资料、课程、全局）都使用同一个公式：
//! `round(100 * obtained / expected, 2)`，`expected == 0` 时为 0。

/// 四舍五入保留两位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 未取整的百分比，应得分为 0（或非正常数值）时返回 0
pub fn raw_percentage(obtained: f64, expected: f64) -> f64 {
    if expected == 0.0 || !expected.is_finite() || !obtained.is_finite() {
        return 0.0;
    }
    100.0 * obtained / expected
}

/// 计算百分比，保留两位小数
pub fn percentage(obtained: f64, expected: f64) -> f64 {
    round2(raw_percentage(obtained, expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.35), 3.35);
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(0.004), 0.0);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(3.0, 4.0), 75.0);
        assert_eq!(percentage(2.0, 3.0), 66.67);
        assert_eq!(percentage(45.5, 50.0), 91.0);
    }

    #[test]
    fn test_zero_expected_is_zero() {
        assert_eq!(percentage(0.0, 0.0), 0.0);
        assert_eq!(percentage(5.0, 0.0), 0.0);
        assert_eq!(raw_percentage(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_raw_percentage_keeps_precision() {
        assert!(raw_percentage(23_999.0, 40_000.0) < 60.0);
        assert_eq!(percentage(23_999.0, 40_000.0), 60.0);
    }
}
