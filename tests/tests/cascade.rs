//! Cascading soft delete over the real domain records.

use haul_tests::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_document_with_uploads_deletes_each_once() {
    // GIVEN
    let mut world = World::new();
    let mut document = world.document(&["one.pdf", "two.pdf", "three.pdf", "four.pdf"]);
    document.user_uploads.clear();

    // WHEN
    let deleted = haul_cascade::soft_destroy(&mut world.store, &mut document).unwrap();

    // THEN
    assert_eq!(deleted.len(), 5);
    assert_eq!(deleted.count(DOCUMENT), 1);
    assert_eq!(deleted.count(USER_UPLOAD), 4);
    let live: Vec<UserUpload> = world
        .store
        .select("document_id", document.id, Scope::Live)
        .unwrap();
    assert!(live.is_empty());
    let all: Vec<UserUpload> = world
        .store
        .select("document_id", document.id, Scope::All)
        .unwrap();
    assert_eq!(all.len(), 4);
    assert!(all.iter().all(|upload| upload.deleted_at.is_some()));
}

#[test]
fn test_shipment_cascades_through_dependents() {
    // GIVEN
    let mut world = World::new();
    let mut shipment = world.shipment(ShipmentType::BoatTowAway);
    let mut document = Document::new(world.member);
    document.user_uploads = vec![UserUpload::new(world.member, "registration.pdf")];
    let created = world
        .boats()
        .create(
            &mut world.customer_ctx(),
            BoatShipment {
                document: Some(document),
                ..boat(shipment.id)
            },
        )
        .unwrap();

    // WHEN
    let deleted = world
        .store
        .with_transaction(|store| haul_cascade::soft_destroy(store, &mut shipment))
        .unwrap();

    // THEN
    let order: Vec<_> = deleted.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(order, vec![SHIPMENT, BOAT_SHIPMENT, DOCUMENT, USER_UPLOAD]);
    assert!(deleted.contains(BOAT_SHIPMENT, created.id));
    assert!(deleted.contains(DOCUMENT, created.document_id));
    assert!(world
        .boats()
        .fetch(&world.office_ctx(), created.id, &[], &[])
        .unwrap_err()
        .is_not_found());
}

#[test]
fn test_failed_descendant_rolls_back_cascade() {
    // GIVEN
    let mut world = World::new();
    let shipment = world.shipment(ShipmentType::MobileHome);
    let mut document = Document::new(world.member);
    document.user_uploads = vec![UserUpload::new(world.member, "deed.pdf")];
    let created = world
        .mobile_homes()
        .create(
            &mut world.customer_ctx(),
            MobileHome {
                document: Some(document),
                ..mobile_home(shipment.id)
            },
        )
        .unwrap();
    let session = world.customer();
    let mut store =
        FailingStore::new(std::mem::take(&mut world.store)).fail_on(FailOn::Update(USER_UPLOAD));

    // WHEN
    let err = world
        .mobile_homes()
        .soft_destroy(&mut AppContext::new(&mut store, session), created.id)
        .unwrap_err();

    // THEN
    assert!(matches!(
        err,
        AppError::Persistence { kind, .. } if kind == USER_UPLOAD
    ));
    let home: Option<MobileHome> = store.inner().find(created.id, Scope::Live).unwrap();
    let document: Option<Document> = store.inner().find(created.document_id, Scope::Live).unwrap();
    assert!(home.is_some());
    assert!(document.is_some());
}

#[test]
fn test_already_deleted_children_are_skipped() {
    // GIVEN
    let mut world = World::new();
    let mut document = world.document(&["a.pdf", "b.pdf"]);
    let mut first = document.user_uploads[0].clone();
    haul_cascade::soft_destroy(&mut world.store, &mut first).unwrap();
    document.user_uploads.clear();

    // WHEN
    let deleted = haul_cascade::soft_destroy(&mut world.store, &mut document).unwrap();

    // THEN
    assert_eq!(deleted.len(), 2);
    assert!(!deleted.contains(USER_UPLOAD, first.id));
    assert!(deleted.contains(USER_UPLOAD, document.user_uploads[0].id));
}
