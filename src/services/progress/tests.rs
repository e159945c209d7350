use super::completion::own_completion;
use super::materials::{get_material_with_lock_state, list_materials_with_lock_state};
use super::record::record_progress;
use crate::errors::LmsError;
use crate::models::progress::requests::RecordProgressRequest;
use crate::storage::testing;

fn report(video_id: i64, progress: i64) -> RecordProgressRequest {
    RecordProgressRequest { video_id, progress }
}

#[tokio::test]
async fn test_progress_unlocks_next_video_in_order() {
    let c = testing::campus().await;
    let s = &c.storage;
    let m1 = testing::material(s, c.batch.id, c.course.id, "intro", None).await;
    let m2 = testing::material(s, c.batch.id, c.course.id, "loops", None).await;
    let m3 = testing::material(s, c.batch.id, c.course.id, "graphs", None).await;
    let caller = Some(&c.student_user);

    let locks = |list: Vec<crate::models::progress::responses::MaterialWithLockState>| {
        list.into_iter().map(|m| m.locked).collect::<Vec<_>>()
    };

    let list = list_materials_with_lock_state(s, caller, c.course.id).await.unwrap();
    assert_eq!(locks(list), vec![false, true, true]);

    record_progress(s, caller, report(m1.id, 95)).await.unwrap();
    let list = list_materials_with_lock_state(s, caller, c.course.id).await.unwrap();
    assert_eq!(locks(list), vec![false, false, true]);

    record_progress(s, caller, report(m2.id, 60)).await.unwrap();
    let third = get_material_with_lock_state(s, caller, c.course.id, m3.id)
        .await
        .unwrap();
    assert!(third.locked);
    assert_eq!(third.progress, 0);
}

#[tokio::test]
async fn test_progress_last_write_wins() {
    let c = testing::campus().await;
    let s = &c.storage;
    let m1 = testing::material(s, c.batch.id, c.course.id, "intro", None).await;
    let caller = Some(&c.student_user);

    record_progress(s, caller, report(m1.id, 100)).await.unwrap();
    let rewound = record_progress(s, caller, report(m1.id, 30)).await.unwrap();
    assert_eq!(rewound.progress, 30);

    let list = list_materials_with_lock_state(s, caller, c.course.id).await.unwrap();
    assert_eq!(list[0].progress, 30);

    let completion = own_completion(s, caller).await.unwrap();
    assert_eq!(completion.progress, 30);
    assert_eq!(completion.expected_progress, 100);
}

#[tokio::test]
async fn test_progress_for_unknown_video() {
    let c = testing::campus().await;
    let err = record_progress(&c.storage, Some(&c.student_user), report(404, 10))
        .await
        .unwrap_err();
    assert!(matches!(err, LmsError::NotFound(_)));
    assert_eq!(err.message(), "Video not found.");
}

#[tokio::test]
async fn test_progress_rejects_non_students() {
    let c = testing::campus().await;
    let m1 = testing::material(&c.storage, c.batch.id, c.course.id, "intro", None).await;
    let err = record_progress(&c.storage, Some(&c.professor_user), report(m1.id, 10))
        .await
        .unwrap_err();
    assert!(matches!(err, LmsError::Authorization(_)));
}
