use crate::data::membership::MembershipRepository;

/// Tests that a user id absent from the member list is not premium.
#[tokio::test]
async fn absent_user_is_not_plus() {
    let (dir, store) = super::temp_store().await;
    super::write_members(&dir, serde_json::json!(["1001"])).await;

    let repo = MembershipRepository::new(&store);
    assert!(!repo.is_plus_member("9999").await.unwrap());
}

/// Tests matching against a string entry in the member list.
#[tokio::test]
async fn string_entry_matches() {
    let (dir, store) = super::temp_store().await;
    super::write_members(&dir, serde_json::json!(["1001"])).await;

    let repo = MembershipRepository::new(&store);
    assert!(repo.is_plus_member("1001").await.unwrap());
}

/// Tests matching against an integer entry.
///
/// The document is hand-edited and ids are sometimes pasted without quotes;
/// comparison is by stringified id.
#[tokio::test]
async fn integer_entry_matches() {
    let (dir, store) = super::temp_store().await;
    super::write_members(&dir, serde_json::json!([1001, "2002"])).await;

    let repo = MembershipRepository::new(&store);
    assert!(repo.is_plus_member("1001").await.unwrap());
    assert!(repo.is_plus_member("2002").await.unwrap());
}

/// Tests that an empty member list grants nobody premium.
#[tokio::test]
async fn empty_list_is_never_plus() {
    let (_dir, store) = super::temp_store().await;

    let repo = MembershipRepository::new(&store);
    assert!(!repo.is_plus_member("1001").await.unwrap());
}
