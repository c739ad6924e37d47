use super::*;
use crate::test_utils::CreatorBuilder;
use crate::CreatorLookup;
use crate::CreatorStore;
use crate::NameKind;

fn sample_store() -> MemCreatorStore {
    MemCreatorStore::new()
}

#[tokio::test]
async fn upsert_then_find_by_every_key() {
    let store = sample_store();
    let creator = CreatorBuilder::new(1)
        .channel_id("UCaaa")
        .handle("@Pekora")
        .display_name("Usada Pekora")
        .original_name("兎田ぺこら")
        .build();
    store.upsert(creator.clone()).await.unwrap();

    assert_eq!(store.find_by_id(1).await.unwrap(), Some(creator.clone()));
    assert_eq!(store.find_by_channel_id("UCaaa").await.unwrap(), Some(creator.clone()));
    assert_eq!(store.find_by_handle("@pekora").await.unwrap(), Some(creator.clone()));
    assert_eq!(store.find_by_handle("@PEKORA").await.unwrap(), Some(creator));
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn missing_keys_resolve_to_none() {
    let store = sample_store();
    assert_eq!(store.find_by_id(404).await.unwrap(), None);
    assert_eq!(store.find_by_channel_id("UCnope").await.unwrap(), None);
    assert_eq!(store.find_by_handle("@nobody").await.unwrap(), None);
}

#[tokio::test]
async fn upsert_replaces_record_and_repairs_indexes() {
    let store = sample_store();
    let first = CreatorBuilder::new(5).channel_id("UCold").handle("@old").build();
    store.upsert(first).await.unwrap();

    let second = CreatorBuilder::new(5).channel_id("UCnew").handle("@new").build();
    store.upsert(second.clone()).await.unwrap();

    assert_eq!(store.count().await.unwrap(), 1);
    assert_eq!(store.find_by_channel_id("UCold").await.unwrap(), None);
    assert_eq!(store.find_by_handle("@old").await.unwrap(), None);
    assert_eq!(store.find_by_channel_id("UCnew").await.unwrap(), Some(second.clone()));
    assert_eq!(store.find_by_handle("@NEW").await.unwrap(), Some(second));
}

#[tokio::test]
async fn list_names_emits_only_non_empty_names_with_kinds() {
    let store = sample_store();
    store
        .upsert(
            CreatorBuilder::new(1)
                .display_name("Gawr Gura")
                .original_name("がうる・ぐら")
                .build(),
        )
        .await
        .unwrap();
    store.upsert(CreatorBuilder::new(2).display_name("Calli").build()).await.unwrap();
    store.upsert(CreatorBuilder::new(3).build()).await.unwrap();

    let names = store.list_names().await.unwrap();
    assert_eq!(names.len(), 3);
    assert_eq!(names[0].id, 1);
    assert_eq!(names[0].kind, NameKind::Original);
    assert_eq!(names[0].name, "がうる・ぐら");
    assert_eq!(names[1].id, 1);
    assert_eq!(names[1].kind, NameKind::Display);
    assert_eq!(names[2].id, 2);
    assert_eq!(names[2].name, "Calli");
}
