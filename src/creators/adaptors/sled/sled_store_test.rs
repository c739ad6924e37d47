use super::*;
use crate::test_utils::CreatorBuilder;
use crate::CreatorLookup;
use crate::CreatorStore;
use crate::NameKind;

fn open_store(dir: &tempfile::TempDir) -> SledCreatorStore {
    let db = sled::Config::default().path(dir.path()).open().unwrap();
    SledCreatorStore::open(&db).unwrap()
}

#[tokio::test]
async fn records_survive_a_round_trip_through_the_trees() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let creator = CreatorBuilder::new(42)
        .channel_id("UCxyz")
        .handle("@Watson")
        .display_name("Watson Amelia")
        .build();
    store.upsert(creator.clone()).await.unwrap();

    assert_eq!(store.find_by_id(42).await.unwrap(), Some(creator.clone()));
    assert_eq!(store.find_by_channel_id("UCxyz").await.unwrap(), Some(creator.clone()));
    assert_eq!(store.find_by_handle("@watson").await.unwrap(), Some(creator));
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn handle_lookup_is_case_insensitive_both_ways() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let creator = CreatorBuilder::new(7).handle("@MiXeD").build();
    store.upsert(creator.clone()).await.unwrap();

    assert_eq!(store.find_by_handle("@mixed").await.unwrap(), Some(creator.clone()));
    assert_eq!(store.find_by_handle("@MIXED").await.unwrap(), Some(creator));
}

#[tokio::test]
async fn upsert_removes_stale_index_entries() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.upsert(CreatorBuilder::new(9).channel_id("UCfirst").handle("@first").build())
        .await
        .unwrap();
    let replacement = CreatorBuilder::new(9).channel_id("UCsecond").handle("@second").build();
    store.upsert(replacement.clone()).await.unwrap();

    assert_eq!(store.find_by_channel_id("UCfirst").await.unwrap(), None);
    assert_eq!(store.find_by_handle("@first").await.unwrap(), None);
    assert_eq!(store.find_by_channel_id("UCsecond").await.unwrap(), Some(replacement.clone()));
    assert_eq!(store.find_by_handle("@second").await.unwrap(), Some(replacement));
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn list_names_walks_every_stored_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store
        .upsert(
            CreatorBuilder::new(1)
                .original_name("宝鐘マリン")
                .display_name("Houshou Marine")
                .build(),
        )
        .await
        .unwrap();
    store.upsert(CreatorBuilder::new(2).display_name("IRyS").build()).await.unwrap();

    let names = store.list_names().await.unwrap();
    assert_eq!(names.len(), 3);
    // Primary keys are big-endian ids, so iteration is id-ordered.
    assert_eq!(names[0].kind, NameKind::Original);
    assert_eq!(names[0].name, "宝鐘マリン");
    assert_eq!(names[2].id, 2);
}
