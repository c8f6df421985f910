use address_book::application::{
    commands::addresses::{CreateAddressCommand, DeleteAddressCommand, UpdateAddressCommand},
    mediator::{Mediator, RegistryError, RequestContext},
    ports::time::Clock,
    queries::addresses::{GetAddressByIdQuery, GetAllAddressesQuery},
    services::{ApplicationServices, register_address_features},
    ErrorKind,
};
use address_book::domain::address::{AddressId, AddressRepository};
use address_book::infrastructure::repositories::InMemoryAddressRepository;
use std::sync::Arc;

mod support;

use support::{SteppingClock, fixed_now};

fn services() -> ApplicationServices {
    let repo: Arc<dyn AddressRepository> = Arc::new(InMemoryAddressRepository::new());
    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::default());
    ApplicationServices::new(repo, clock).unwrap()
}

fn create_command(street: &str) -> CreateAddressCommand {
    CreateAddressCommand {
        street: street.into(),
        city: "Springfield".into(),
        state: "IL".into(),
        zip_code: "62701".into(),
        country: "USA".into(),
    }
}

/// すべてのリクエスト型にハンドラが一つずつ登録される
#[test]
fn every_request_type_has_a_handler() {
    let services = services();
    let mediator = services.mediator();

    assert!(mediator.has_handler::<CreateAddressCommand>());
    assert!(mediator.has_handler::<GetAddressByIdQuery>());
    assert!(mediator.has_handler::<GetAllAddressesQuery>());
    assert!(mediator.has_handler::<UpdateAddressCommand>());
    assert!(mediator.has_handler::<DeleteAddressCommand>());

    assert_eq!(mediator.validator_count::<CreateAddressCommand>(), 1);
    assert_eq!(mediator.validator_count::<UpdateAddressCommand>(), 1);
    assert_eq!(mediator.validator_count::<GetAllAddressesQuery>(), 0);
}

/// 同じ機能を二度登録すると構成エラーになる
#[test]
fn registering_features_twice_is_rejected() {
    let repo: Arc<dyn AddressRepository> = Arc::new(InMemoryAddressRepository::new());
    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::default());

    let builder = register_address_features(Mediator::builder(), &repo, &clock).unwrap();
    let err = register_address_features(builder, &repo, &clock).err().unwrap();

    assert!(matches!(err, RegistryError::DuplicateHandler(name) if name.contains("CreateAddressCommand")));
}

/// メディエータ経由の作成・取得・削除
#[tokio::test]
async fn dispatch_round_trip_through_the_mediator() {
    let services = services();
    let mediator = services.mediator();
    let ctx = RequestContext::detached();

    let created = mediator
        .send(create_command("1 Main St"), &ctx)
        .await
        .unwrap()
        .into_value()
        .unwrap();
    assert_eq!(created.created_at, fixed_now());
    assert_eq!(created.updated_at, None);

    let id = AddressId::from_uuid(created.id);
    let fetched = mediator.send(GetAddressByIdQuery { id }, &ctx).await.unwrap();
    assert_eq!(fetched.value().unwrap(), &created);

    let deleted = mediator.send(DeleteAddressCommand { id }, &ctx).await.unwrap();
    assert!(deleted.is_success());

    let missing = mediator.send(GetAddressByIdQuery { id }, &ctx).await.unwrap();
    assert_eq!(missing.error().kind(), ErrorKind::NotFound);
    assert_eq!(
        missing.error().message(),
        format!("Address with ID {} was not found", created.id)
    );
    assert!(missing.value().is_err());
}

/// 不正なコマンドはハンドラに届かない
#[tokio::test]
async fn invalid_create_never_reaches_the_store() {
    let services = services();
    let mediator = services.mediator();
    let ctx = RequestContext::detached();

    let rejected = mediator.send(create_command("  "), &ctx).await.unwrap();
    assert_eq!(rejected.error().kind(), ErrorKind::Validation);
    assert_eq!(rejected.error().code(), "Validation.Failed");

    let all = mediator.send(GetAllAddressesQuery, &ctx).await.unwrap();
    assert!(all.into_value().unwrap().is_empty());
}
