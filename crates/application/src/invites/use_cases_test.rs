use parlor_core::entities::prelude::MessageKind;
use parlor_core::{dm_room_id, UserId};
use parlor_infrastructure::auth::Principal;
use parlor_infrastructure::Backend;

use super::{AcceptInviteUseCase, InviteError, SendGroupInviteUseCase};
use crate::friends::dtos::SendFriendRequest;
use crate::friends::{AcceptFriendRequestUseCase, SendFriendRequestUseCase};
use crate::identity::dtos::ClaimUsernameRequest;
use crate::identity::{ClaimUsernameUseCase, EnsureProfileUseCase};
use crate::rooms::dtos::CreateGroupRequest;
use crate::rooms::{CreateGroupUseCase, ListRoomsUseCase, RoomError};
use crate::Config;

/// Owner "alice" with friends "bob" (in the group) and "carol" (claimed
/// username `carol`, not yet in the group).
async fn group_fixture() -> (Backend, parlor_core::RoomId) {
    let (backend, _hub) = Backend::in_memory();
    for id in ["alice", "bob", "carol"] {
        let principal = Principal {
            id: UserId::from(id),
            email: format!("{id}@example.com"),
            display_name: Some(id.to_string()),
            avatar_url: None,
        };
        EnsureProfileUseCase::execute(&backend, &principal)
            .await
            .unwrap();
        ClaimUsernameUseCase::execute(
            &backend,
            ClaimUsernameRequest {
                user_id: UserId::from(id),
                username: id.to_string(),
            },
        )
        .await
        .unwrap();
    }
    for peer in ["bob", "carol"] {
        let req = SendFriendRequestUseCase::execute(
            &backend,
            SendFriendRequest {
                sender_id: UserId::from("alice"),
                receiver_id: UserId::from(peer),
                resend_after_reject: false,
            },
        )
        .await
        .unwrap();
        AcceptFriendRequestUseCase::execute(&backend, req.id, &UserId::from(peer))
            .await
            .unwrap();
    }
    let room = CreateGroupUseCase::execute(
        &backend,
        CreateGroupRequest {
            title: "Team".to_string(),
            owner_id: UserId::from("alice"),
            member_ids: vec![UserId::from("bob")],
        },
    )
    .await
    .unwrap();
    (backend, room.id)
}

#[tokio::test]
async fn invite_is_delivered_through_the_dm_room() {
    let (backend, group_id) = group_fixture().await;
    let config = Config::default();

    SendGroupInviteUseCase::execute(&backend, &config, &group_id, &UserId::from("alice"), "carol")
        .await
        .unwrap();

    let dm_id = dm_room_id(&UserId::from("alice"), &UserId::from("carol"));
    let rows = backend.messages.list_for_room(&dm_id, 10).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind, MessageKind::Invite);
    assert_eq!(rows[0].content, "invite");
    assert_eq!(rows[0].group_id.as_ref(), Some(&group_id));
    assert_eq!(rows[0].group_title.as_deref(), Some("Team"));
    // Delivered via the DM, targeting a different room.
    assert_ne!(rows[0].room_id, group_id);
}

#[tokio::test]
async fn only_the_owner_may_invite() {
    let (backend, group_id) = group_fixture().await;
    let err = SendGroupInviteUseCase::execute(
        &backend,
        &Config::default(),
        &group_id,
        &UserId::from("bob"),
        "carol",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, InviteError::NotGroupOwner));
}

#[tokio::test]
async fn unknown_username_is_reported() {
    let (backend, group_id) = group_fixture().await;
    let err = SendGroupInviteUseCase::execute(
        &backend,
        &Config::default(),
        &group_id,
        &UserId::from("alice"),
        "ghost",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, InviteError::UserNotFound(name) if name == "ghost"));
}

#[tokio::test]
async fn inviting_into_a_dm_is_rejected() {
    let (backend, _group_id) = group_fixture().await;
    let config = Config::default();
    // Materialize the alice<->bob DM, then try to use it as an invite target.
    let dm = crate::rooms::StartDmUseCase::execute(
        &backend,
        &UserId::from("alice"),
        &UserId::from("bob"),
    )
    .await
    .unwrap();

    let err = SendGroupInviteUseCase::execute(
        &backend,
        &config,
        &dm.id,
        &UserId::from("alice"),
        "carol",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, InviteError::NotAGroup));
}

#[tokio::test]
async fn invites_require_friendship_with_the_invitee() {
    let (backend, group_id) = group_fixture().await;
    // A fourth user with a username but no friendship to alice.
    let principal = Principal {
        id: UserId::from("dave"),
        email: "dave@example.com".to_string(),
        display_name: Some("dave".to_string()),
        avatar_url: None,
    };
    EnsureProfileUseCase::execute(&backend, &principal)
        .await
        .unwrap();
    ClaimUsernameUseCase::execute(
        &backend,
        ClaimUsernameRequest {
            user_id: UserId::from("dave"),
            username: "dave".to_string(),
        },
    )
    .await
    .unwrap();

    let err = SendGroupInviteUseCase::execute(
        &backend,
        &Config::default(),
        &group_id,
        &UserId::from("alice"),
        "dave",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, InviteError::Room(RoomError::NotFriends)));
}

#[tokio::test]
async fn accepting_an_invite_joins_the_group() {
    let (backend, group_id) = group_fixture().await;
    let config = Config::default();
    SendGroupInviteUseCase::execute(&backend, &config, &group_id, &UserId::from("alice"), "carol")
        .await
        .unwrap();

    AcceptInviteUseCase::execute(&backend, &group_id, &UserId::from("carol"))
        .await
        .unwrap();

    let rooms = ListRoomsUseCase::execute(&backend, &UserId::from("carol"))
        .await
        .unwrap();
    assert!(rooms.iter().any(|r| r.room_id == group_id));

    // Accepting again is still success.
    AcceptInviteUseCase::execute(&backend, &group_id, &UserId::from("carol"))
        .await
        .unwrap();
}
