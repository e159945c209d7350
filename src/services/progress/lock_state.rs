//! 顺序解锁规则
//!
//! 锁定状态从不落库，每次读取时根据进度表重新推导：
//! 第一个资料始终解锁，之后的资料在前一个资料进度达到阈值时解锁。

use std::collections::HashMap;

use crate::models::catalog::entities::Material;
use crate::models::progress::responses::MaterialWithLockState;

/// 解锁下一个资料所需的进度
pub const UNLOCK_THRESHOLD: i32 = 95;

/// 为按创建顺序排列的资料标注进度与锁定状态
///
/// `progress` 中没有记录的资料视为 0。
pub fn annotate(materials: Vec<Material>, progress: &HashMap<i64, i32>) -> Vec<MaterialWithLockState> {
    let mut previous: Option<i32> = None;

    materials
        .into_iter()
        .map(|material| {
            let own = progress.get(&material.id).copied().unwrap_or(0);
            let locked = match previous {
                None => false,
                Some(prev) => prev < UNLOCK_THRESHOLD,
            };
            previous = Some(own);

            MaterialWithLockState {
                material,
                progress: own,
                locked,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(id: i64) -> Material {
        let now = chrono::Utc::now();
        Material {
            id,
            batch_id: 1,
            course_id: 1,
            professor_id: None,
            title: format!("Lesson {id}"),
            subtitle: None,
            description: None,
            video_path: None,
            assignment_path: None,
            marks: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn locks(progress: &[(i64, i32)], ids: &[i64]) -> Vec<bool> {
        let map: HashMap<i64, i32> = progress.iter().copied().collect();
        annotate(ids.iter().map(|id| material(*id)).collect(), &map)
            .into_iter()
            .map(|m| m.locked)
            .collect()
    }

    #[test]
    fn test_chain_follows_previous_progress() {
        assert_eq!(
            locks(&[(1, 100), (2, 40), (3, 0)], &[1, 2, 3]),
            vec![false, false, true]
        );
    }

    #[test]
    fn test_first_material_never_locked() {
        assert_eq!(locks(&[], &[7]), vec![false]);
        assert_eq!(locks(&[], &[1, 2]), vec![false, true]);
    }

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(locks(&[(1, 94)], &[1, 2]), vec![false, true]);
        assert_eq!(locks(&[(1, 95)], &[1, 2]), vec![false, false]);
    }

    #[test]
    fn test_lock_depends_only_on_direct_predecessor() {
        // 中间资料已看完，即使更早的资料没看也能解锁下一个
        assert_eq!(
            locks(&[(1, 0), (2, 100)], &[1, 2, 3]),
            vec![false, true, false]
        );
    }

    #[test]
    fn test_progress_is_reported() {
        let map = HashMap::from([(1, 60)]);
        let annotated = annotate(vec![material(1), material(2)], &map);
        assert_eq!(annotated[0].progress, 60);
        assert_eq!(annotated[1].progress, 0);
    }

    #[test]
    fn test_empty_course() {
        assert!(annotate(vec![], &HashMap::new()).is_empty());
    }
}
