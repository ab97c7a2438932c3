use super::*;
use crate::pages::test_helpers::{Call, MockApi, dummy_user, empty_store, signed_in_store};

fn page(name: &str, email: &str, phone: &str) -> UpdateProfilePage {
    UpdateProfilePage { name: name.into(), email: email.into(), phone: phone.into(), ..UpdateProfilePage::new() }
}

#[test]
fn for_user_prefills_fields() {
    let user = User { phone: Some("555".into()), ..dummy_user() };
    let form = UpdateProfilePage::for_user(&user);
    assert_eq!(form.name, "Test User");
    assert_eq!(form.email, "test@example.com");
    assert_eq!(form.phone, "555");

    assert_eq!(UpdateProfilePage::for_user(&dummy_user()).phone, "");
}

#[tokio::test]
async fn successful_update_merges_into_session() {
    let api = MockApi::ok(dummy_user());
    let mut store = signed_in_store(dummy_user());
    let mut router = Router::new();
    let mut form = page("Jane", "jane@example.com", "1234567890");

    form.submit(&api, &mut store, &mut router).await.unwrap();

    assert_eq!(
        api.calls(),
        vec![Call::UpdateProfile(ProfileUpdate {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            phone: "1234567890".into(),
        })]
    );
    let user = store.user().unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Jane");
    assert_eq!(user.phone.as_deref(), Some("1234567890"));
    assert_eq!(router.current(), Route::Dashboard);
}

#[tokio::test]
async fn update_without_session_is_noop_and_guard_redirects() {
    let api = MockApi::ok(dummy_user());
    let mut store = empty_store();
    let mut router = Router::new();
    let mut form = page("Jane", "jane@example.com", "1234567890");

    form.submit(&api, &mut store, &mut router).await.unwrap();

    assert!(store.user().is_none());
    assert_eq!(router.current(), Route::Login);
}

#[tokio::test]
async fn missing_phone_blocks_the_call() {
    let api = MockApi::ok(dummy_user());
    let mut store = signed_in_store(dummy_user());
    let mut router = Router::new();
    let mut form = page("Jane", "jane@example.com", " ");

    let err = form.submit(&api, &mut store, &mut router).await.unwrap_err();

    assert!(matches!(err, FormError::Required(Field::Phone)));
    assert!(api.calls().is_empty());
    assert_eq!(store.user(), Some(&dummy_user()));
}

#[tokio::test]
async fn invalid_email_blocks_the_call() {
    let api = MockApi::ok(dummy_user());
    let mut store = signed_in_store(dummy_user());
    let mut router = Router::new();
    let mut form = page("Jane", "jane-at-example", "123");

    assert!(matches!(
        form.submit(&api, &mut store, &mut router).await,
        Err(FormError::InvalidEmail)
    ));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn rejected_update_leaves_session_unchanged() {
    let api = MockApi::failing(400);
    let mut store = signed_in_store(dummy_user());
    let mut router = Router::new();
    let mut form = page("Jane", "jane@example.com", "1234567890");

    let err = form.submit(&api, &mut store, &mut router).await.unwrap_err();

    assert!(matches!(err, FormError::Request(_)));
    assert_eq!(store.user(), Some(&dummy_user()));
    assert_eq!(router.current(), Route::Login);
    assert_eq!(form.message().unwrap().text, "Request failed. Please try again.");
}
