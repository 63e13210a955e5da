// End-to-end scenarios over the in-memory backend: the full
// request -> accept -> dm -> message -> realtime path, and the contention
// cases (dm creation race, username claim race).

use parlor_application::friends::dtos::SendFriendRequest;
use parlor_application::friends::{
    AcceptFriendRequestUseCase, ListFriendsUseCase, SendFriendRequestUseCase,
};
use parlor_application::identity::dtos::ClaimUsernameRequest;
use parlor_application::identity::{ClaimUsernameUseCase, EnsureProfileUseCase, IdentityError};
use parlor_application::messages::dtos::{ListMessagesRequest, PostMessageRequest};
use parlor_application::messages::{ListMessagesUseCase, PostMessageUseCase};
use parlor_application::rooms::dtos::CreateGroupRequest;
use parlor_application::rooms::{
    CreateGroupUseCase, ListRoomsUseCase, RemoveMemberUseCase, RoomError, StartDmUseCase,
};
use parlor_application::Config;
use parlor_core::entities::prelude::MessageKind;
use parlor_core::{dm_room_id, UserId};
use parlor_infrastructure::auth::Principal;
use parlor_infrastructure::realtime::RoomFeed;
use parlor_infrastructure::Backend;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_test_writer()
        .try_init();
}

fn principal(id: &str) -> Principal {
    Principal {
        id: UserId::from(id),
        email: format!("{id}@example.com"),
        display_name: Some(id.to_string()),
        avatar_url: None,
    }
}

async fn sign_up(backend: &Backend, id: &str) {
    EnsureProfileUseCase::execute(backend, &principal(id))
        .await
        .unwrap();
}

async fn befriend(backend: &Backend, a: &str, b: &str) {
    let req = SendFriendRequestUseCase::execute(
        backend,
        SendFriendRequest {
            sender_id: UserId::from(a),
            receiver_id: UserId::from(b),
            resend_after_reject: false,
        },
    )
    .await
    .unwrap();
    AcceptFriendRequestUseCase::execute(backend, req.id, &UserId::from(b))
        .await
        .unwrap();
}

#[tokio::test]
async fn alice_and_bob_become_friends_and_chat() {
    init_tracing();
    let (backend, _hub) = Backend::in_memory();
    let config = Config::default();
    sign_up(&backend, "1").await;
    sign_up(&backend, "2").await;

    // alice (1) requests, bob (2) accepts.
    befriend(&backend, "1", "2").await;
    let friends = ListFriendsUseCase::execute(&backend, &UserId::from("1"))
        .await
        .unwrap();
    assert_eq!(friends.len(), 1);

    // alice opens the DM; the id is the canonical derived one.
    let room = StartDmUseCase::execute(&backend, &UserId::from("1"), &UserId::from("2"))
        .await
        .unwrap();
    assert_eq!(room.id.as_str(), "dm_1_2");

    PostMessageUseCase::execute(
        &backend,
        &config,
        PostMessageRequest::text(room.id.clone(), UserId::from("1"), "hi"),
    )
    .await
    .unwrap();

    // bob reads one message with alice's content.
    let rows = ListMessagesUseCase::execute(
        &backend,
        &config,
        ListMessagesRequest {
            room_id: room.id.clone(),
            caller_id: UserId::from("2"),
            limit: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].content, "hi");
    assert_eq!(rows[0].sender_id, UserId::from("1"));
    assert_eq!(rows[0].kind, MessageKind::Text);

    // And the DM shows up in bob's room list with the preview.
    let bobs_rooms = ListRoomsUseCase::execute(&backend, &UserId::from("2"))
        .await
        .unwrap();
    assert_eq!(bobs_rooms.len(), 1);
    assert_eq!(bobs_rooms[0].last_text.as_deref(), Some("hi"));
}

#[tokio::test]
async fn group_removal_is_owner_gated() {
    init_tracing();
    let (backend, _hub) = Backend::in_memory();
    for id in ["owner", "alice", "bob"] {
        sign_up(&backend, id).await;
    }

    let group = CreateGroupUseCase::execute(
        &backend,
        CreateGroupRequest {
            title: "Team".to_string(),
            owner_id: UserId::from("owner"),
            member_ids: vec![UserId::from("alice"), UserId::from("bob")],
        },
    )
    .await
    .unwrap();

    let err = RemoveMemberUseCase::execute(
        &backend,
        &group.id,
        &UserId::from("bob"),
        &UserId::from("alice"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RoomError::NotAuthorized));

    RemoveMemberUseCase::execute(
        &backend,
        &group.id,
        &UserId::from("bob"),
        &UserId::from("owner"),
    )
    .await
    .unwrap();

    let bobs_rooms = ListRoomsUseCase::execute(&backend, &UserId::from("bob"))
        .await
        .unwrap();
    assert!(bobs_rooms.iter().all(|r| r.room_id != group.id));
}

#[tokio::test]
async fn concurrent_username_claims_have_one_winner() {
    init_tracing();
    let (backend, _hub) = Backend::in_memory();
    sign_up(&backend, "alice").await;
    sign_up(&backend, "bob").await;

    let claim = |user: &str| {
        ClaimUsernameUseCase::execute(
            &backend,
            ClaimUsernameRequest {
                user_id: UserId::from(user),
                username: "coveted".to_string(),
            },
        )
    };
    let (a, b) = tokio::join!(claim("alice"), claim("bob"));

    let outcomes = [a, b];
    let winners = outcomes.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1);
    let loser = outcomes.iter().find(|r| r.is_err()).unwrap();
    assert!(matches!(
        loser.as_ref().unwrap_err(),
        IdentityError::AlreadyTaken
    ));
}

#[tokio::test]
async fn realtime_feed_tracks_an_open_room() {
    init_tracing();
    let (backend, hub) = Backend::in_memory();
    let config = Config::default();
    sign_up(&backend, "1").await;
    sign_up(&backend, "2").await;
    befriend(&backend, "1", "2").await;

    let room = StartDmUseCase::execute(&backend, &UserId::from("1"), &UserId::from("2"))
        .await
        .unwrap();

    // Subscribe before posting, as an open room view would.
    let mut rx = hub.subscribe();
    let mut feed = RoomFeed::new(room.id.clone(), Vec::new());

    for content in ["first", "second"] {
        PostMessageUseCase::execute(
            &backend,
            &config,
            PostMessageRequest::text(room.id.clone(), UserId::from("1"), content),
        )
        .await
        .unwrap();
    }

    // Drain whatever the feed has delivered so far.
    while let Ok(event) = rx.try_recv() {
        feed.apply(&event);
    }

    let contents: Vec<&str> = feed.messages().iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["first", "second"]);
}

#[tokio::test]
async fn dm_room_id_matches_between_lookup_and_create() {
    init_tracing();
    let (backend, _hub) = Backend::in_memory();
    sign_up(&backend, "x").await;
    sign_up(&backend, "y").await;
    befriend(&backend, "y", "x").await;

    let id = dm_room_id(&UserId::from("x"), &UserId::from("y"));
    let room = StartDmUseCase::execute(&backend, &UserId::from("y"), &UserId::from("x"))
        .await
        .unwrap();
    assert_eq!(room.id, id);
    assert!(backend.rooms.find_room(&id).await.unwrap().is_some());
}
