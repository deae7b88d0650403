use super::*;

/// Requests with no session cookie render the anonymous view.
#[tokio::test]
async fn index_renders_anonymous_view_without_session() {
    let app = test_app();

    let response = get_path(&app, "/", None).await;

    assert!(response.status().is_success());

    let html = body_string(response).await;
    assert!(html.contains("not logged in"));
    assert!(html.contains("/auth/discord"));
    assert!(!html.contains("Log out"));
}

/// Round-trip: the identity stored at login is rendered unchanged on the next
/// request to `/`.
#[tokio::test]
async fn index_renders_stored_identity() {
    let app = test_app();

    let seeded = get_path(&app, "/test/login?id=123&username=alice", None).await;
    let cookie = session_cookie(&seeded).unwrap();

    let response = get_path(&app, "/", Some(&cookie)).await;
    let html = body_string(response).await;

    assert!(html.contains("Welcome, alice"));
    assert!(html.contains("https://cdn.discordapp.com/avatars/123/abc.png"));
    assert!(html.contains("/logout"));
}

/// A cookie referencing a session the store no longer has renders the
/// anonymous view rather than an error.
#[tokio::test]
async fn index_with_stale_cookie_renders_anonymous_view() {
    let app = test_app();

    let response = get_path(&app, "/", Some("id=AAAAAAAAAAAAAAAAAAAAAA")).await;

    assert!(response.status().is_success());
    assert!(body_string(response).await.contains("not logged in"));
}

/// Two browsers logging in concurrently end with independent sessions and
/// non-cross-contaminated identities.
#[tokio::test]
async fn concurrent_logins_produce_independent_sessions() {
    let app = test_app();

    let (alice, bob) = tokio::join!(
        get_path(&app, "/test/login?id=123&username=alice", None),
        get_path(&app, "/test/login?id=456&username=bob", None),
    );

    let alice_cookie = session_cookie(&alice).unwrap();
    let bob_cookie = session_cookie(&bob).unwrap();
    assert_ne!(alice_cookie, bob_cookie);

    let alice_page = body_string(get_path(&app, "/", Some(&alice_cookie)).await).await;
    let bob_page = body_string(get_path(&app, "/", Some(&bob_cookie)).await).await;

    assert!(alice_page.contains("Welcome, alice"));
    assert!(!alice_page.contains("bob"));
    assert!(bob_page.contains("Welcome, bob"));
    assert!(!bob_page.contains("alice"));
}
