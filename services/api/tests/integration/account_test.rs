use chrono::Utc;
use uuid::Uuid;

use shipway_api::domain::types::{AccountType, User};
use shipway_api::error::ApiServiceError;
use shipway_api::usecase::account::{
    GetMeUseCase, ListUsersUseCase, LoginCheckUseCase, MarkEmailVerifiedUseCase,
    RegisterUserInput, RegisterUserUseCase, UpdateMyProfileInput, UpdateMyProfileUseCase,
};
use shipway_domain::pagination::PageRequest;

use crate::helpers::{MockUserRepo, test_profile, test_user};

#[tokio::test]
async fn should_register_verify_then_pass_login_check() {
    let store = MockUserRepo::empty();
    let profiles_handle = store.profiles_handle();

    let register = RegisterUserUseCase {
        repo: store.share(),
    };
    let verify = MarkEmailVerifiedUseCase {
        repo: store.share(),
    };
    let login = LoginCheckUseCase { repo: store };

    let user = register
        .execute(RegisterUserInput {
            email: "sam@shipway.example".to_owned(),
            account_type: Some("logistics".to_owned()),
        })
        .await
        .unwrap();

    // The login gate holds until the email is verified.
    let result = login.execute("sam@shipway.example").await;
    assert!(
        matches!(result, Err(ApiServiceError::UnverifiedEmail { .. })),
        "expected UnverifiedEmail, got {result:?}"
    );

    verify.execute(user.id).await.unwrap();

    let checked = login.execute("sam@shipway.example").await.unwrap();
    assert_eq!(checked.id, user.id);
    assert!(checked.verified_email);

    // The profile was provisioned alongside the account.
    let profiles = profiles_handle.lock().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].user_id, user.id);
    assert_eq!(profiles[0].username, "sam");
    assert_eq!(profiles[0].account_type, Some(AccountType::Logistics));
    assert!(!profiles[0].approved, "new accounts start unapproved");
}

#[tokio::test]
async fn should_reject_second_registration_with_same_email() {
    let store = MockUserRepo::empty();
    let users_handle = store.users_handle();

    let uc = RegisterUserUseCase { repo: store };
    uc.execute(RegisterUserInput {
        email: "sam@shipway.example".to_owned(),
        account_type: None,
    })
    .await
    .unwrap();

    let result = uc
        .execute(RegisterUserInput {
            email: "sam@shipway.example".to_owned(),
            account_type: Some("transportation".to_owned()),
        })
        .await;
    assert!(matches!(result, Err(ApiServiceError::EmailTaken)));
    assert_eq!(users_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_update_profile_and_read_it_back() {
    let user = test_user();
    let store = MockUserRepo::new(vec![user.clone()], vec![test_profile(user.id)]);

    let update = UpdateMyProfileUseCase {
        repo: store.share(),
    };
    let me = GetMeUseCase { repo: store };

    update
        .execute(
            user.id,
            UpdateMyProfileInput {
                first_name: None,
                last_name: None,
                phone: Some("08109998877".to_owned()),
                address: None,
                city: None,
                state: None,
                zip: None,
                about: None,
                account_type: Some("transportation".to_owned()),
            },
        )
        .await
        .unwrap();

    let (fetched, profile) = me.execute(user.id).await.unwrap();
    assert_eq!(fetched.email, "sam@shipway.example");
    assert_eq!(profile.phone, "08109998877");
    assert_eq!(profile.account_type, Some(AccountType::Transportation));
    // Fields outside the patch are left alone.
    assert_eq!(profile.username, "sam");
    assert_eq!(profile.first_name, "Sam");
}

#[tokio::test]
async fn should_paginate_user_listing() {
    let users: Vec<User> = (0..5)
        .map(|n| User {
            id: Uuid::now_v7(),
            email: format!("user{n}@shipway.example"),
            active: true,
            staff: false,
            admin: false,
            verified_email: true,
            created_at: Utc::now(),
        })
        .collect();

    let uc = ListUsersUseCase {
        repo: MockUserRepo::new(users, vec![]),
    };

    let second = uc
        .execute(PageRequest {
            per_page: 2,
            page: 2,
        })
        .await
        .unwrap();
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].email, "user2@shipway.example");

    let last = uc
        .execute(PageRequest {
            per_page: 2,
            page: 3,
        })
        .await
        .unwrap();
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].email, "user4@shipway.example");
}
