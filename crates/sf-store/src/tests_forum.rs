use sqlx::SqlitePool;

use crate::*;

async fn setup_db() -> DbHandle {
    // Use in-memory DB for testing
    let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
    let handle = DbHandle {
        pool,
        url: "sqlite::memory:".to_string(),
        path: None,
        freshly_created: true,
    };
    migrate(&handle).await.unwrap();
    handle
}

#[tokio::test]
async fn test_user_accounts() {
    let db = setup_db().await;
    let pool = db.into_pool();

    let id = create_user(&pool, "alice", "hash", Some("Alice W.")).await.unwrap();
    assert_eq!(fetch_user_id_by_name(&pool, "alice").await.unwrap(), Some(id));
    assert_eq!(fetch_user_id_by_name(&pool, "nobody").await.unwrap(), None);

    let record = fetch_user_auth_record(&pool, id).await.unwrap().unwrap();
    assert_eq!(record.username, "alice");
    assert_eq!(record.display_name.as_deref(), Some("Alice W."));
    assert_eq!(record.password_hash.as_deref(), Some("hash"));

    assert_eq!(fetch_user_password_hash(&pool, "alice").await.unwrap().as_deref(), Some("hash"));

    // Usernames are unique
    assert!(create_user(&pool, "alice", "other", None).await.is_err());
}

#[tokio::test]
async fn test_post_fetch_and_not_found() {
    let db = setup_db().await;
    let pool = db.into_pool();

    let alice = create_user(&pool, "alice", "hash", None).await.unwrap();
    let post_id = create_post(&pool, alice, "Midterm tips", "Math", "Study hard").await.unwrap();

    let post = fetch_post(&pool, post_id).await.unwrap().unwrap();
    assert_eq!(post.title, "Midterm tips");
    assert_eq!(post.subject, "Math");
    assert_eq!(post.content, "Study hard");
    // No display name set, author name falls back to the username
    assert_eq!(post.author.name, "alice");
    assert_eq!(post.author.id, alice);

    // A missing post is None, not an error
    assert!(fetch_post(&pool, post_id + 42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_posts_ordering_and_subject_filter() {
    let db = setup_db().await;
    let pool = db.into_pool();

    let alice = create_user(&pool, "alice", "hash", None).await.unwrap();
    create_post(&pool, alice, "First", "Math", "a").await.unwrap();
    create_post(&pool, alice, "Second", "Science", "b").await.unwrap();
    create_post(&pool, alice, "Third", "Math", "c").await.unwrap();

    // Newest first
    let all = list_posts(&pool, None).await.unwrap();
    let titles: Vec<_> = all.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Third", "Second", "First"]);

    // Subject filter
    let math = list_posts(&pool, Some("Math")).await.unwrap();
    assert_eq!(math.len(), 2);
    assert!(math.iter().all(|p| p.subject == "Math"));

    let history = list_posts(&pool, Some("History")).await.unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn test_comments_append_in_insertion_order() {
    let db = setup_db().await;
    let pool = db.into_pool();

    let alice = create_user(&pool, "alice", "hash", None).await.unwrap();
    let bob = create_user(&pool, "bob", "hash", None).await.unwrap();
    let post_id = create_post(&pool, alice, "Midterm tips", "Math", "Study hard").await.unwrap();

    assert!(list_comments_for_post(&pool, post_id).await.unwrap().is_empty());
    assert_eq!(count_comments_for_post(&pool, post_id).await.unwrap(), 0);

    create_comment(&pool, post_id, bob, "Thanks!").await.unwrap();
    create_comment(&pool, post_id, alice, "Good luck everyone").await.unwrap();
    let last = create_comment(&pool, post_id, bob, "See you there").await.unwrap();

    let comments = list_comments_for_post(&pool, post_id).await.unwrap();
    let contents: Vec<_> = comments.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, vec!["Thanks!", "Good luck everyone", "See you there"]);
    assert_eq!(comments.last().unwrap().id, last);
    assert!(comments.iter().all(|c| c.post_id == post_id));

    // Count matches the list length
    assert_eq!(count_comments_for_post(&pool, post_id).await.unwrap(), comments.len() as i64);

    let created = fetch_comment(&pool, last).await.unwrap().unwrap();
    assert_eq!(created.content, "See you there");
    assert_eq!(created.author.name, "bob");
}

#[tokio::test]
async fn test_profile_update_flows_into_author_name() {
    let db = setup_db().await;
    let pool = db.into_pool();

    let alice = create_user(&pool, "alice", "hash", None).await.unwrap();
    let post_id = create_post(&pool, alice, "Midterm tips", "Math", "Study hard").await.unwrap();

    let profile = fetch_profile(&pool, "alice").await.unwrap().unwrap();
    assert_eq!(profile.username, "alice");
    assert!(profile.display_name.is_none());
    assert!(profile.bio.is_none());

    update_profile(&pool, alice, Some("Alice W."), Some("Math major")).await.unwrap();

    let profile = fetch_profile(&pool, "alice").await.unwrap().unwrap();
    assert_eq!(profile.display_name.as_deref(), Some("Alice W."));
    assert_eq!(profile.bio.as_deref(), Some("Math major"));

    // Author names on existing posts pick up the display name
    let post = fetch_post(&pool, post_id).await.unwrap().unwrap();
    assert_eq!(post.author.name, "Alice W.");

    let authored = list_posts_by_author(&pool, alice).await.unwrap();
    assert_eq!(authored.len(), 1);

    // Unknown profile is None
    assert!(fetch_profile(&pool, "nobody").await.unwrap().is_none());
}
