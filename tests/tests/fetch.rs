//! Fetching with eager and post-load associations, and ownership scoping.

use haul_tests::prelude::*;
use pretty_assertions::assert_eq;

/// A mobile home whose document has one live and one soft-deleted upload.
fn home_with_deleted_upload(world: &mut World) -> MobileHome {
    let shipment = world.shipment(ShipmentType::MobileHome);
    let mut document = Document::new(world.member);
    document.user_uploads = vec![
        UserUpload::new(world.member, "kept.pdf"),
        UserUpload::new(world.member, "removed.pdf"),
    ];
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

    let removed_id = created.document.as_ref().unwrap().user_uploads[1].id;
    let mut removed: UserUpload = world.store.find(removed_id, Scope::Live).unwrap().unwrap();
    haul_cascade::soft_destroy(&mut world.store, &mut removed).unwrap();
    created
}

fn filenames(home: &MobileHome) -> Vec<&str> {
    home.document
        .as_ref()
        .map(|document| {
            document
                .user_uploads
                .iter()
                .map(|upload| upload.filename.as_str())
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn test_plain_fetch_loads_no_associations() {
    let mut world = World::new();
    let created = home_with_deleted_upload(&mut world);

    let fetched = world
        .mobile_homes()
        .fetch(&world.customer_ctx(), created.id, &[], &[])
        .unwrap();

    assert_eq!(fetched.document, None);
    assert_eq!(fetched.shipment, None);
    assert_eq!(fetched.document_id, created.document_id);
}

#[test]
fn test_eager_uploads_include_deleted() {
    // GIVEN
    let mut world = World::new();
    let created = home_with_deleted_upload(&mut world);

    // WHEN
    let fetched = world
        .mobile_homes()
        .fetch_by_names(
            &world.customer_ctx(),
            created.id,
            &["Shipment", "Document.UserUploads"],
            &[],
        )
        .unwrap();

    // THEN
    assert_eq!(filenames(&fetched), vec!["kept.pdf", "removed.pdf"]);
    assert_eq!(fetched.shipment.unwrap().id, created.shipment_id);
}

#[test]
fn test_active_uploads_drop_deleted() {
    // GIVEN
    let mut world = World::new();
    let created = home_with_deleted_upload(&mut world);
    let homes = world.mobile_homes();

    // WHEN
    let postload_only = homes
        .fetch(
            &world.customer_ctx(),
            created.id,
            &[],
            &[PostloadAssociation::ActiveUserUploads],
        )
        .unwrap();
    let with_eager = homes
        .fetch_by_names(
            &world.customer_ctx(),
            created.id,
            &["Document.UserUploads"],
            &["ActiveUserUploads"],
        )
        .unwrap();

    // THEN
    assert_eq!(filenames(&postload_only), vec!["kept.pdf"]);
    assert_eq!(filenames(&with_eager), vec!["kept.pdf"]);
}

#[test]
fn test_unknown_names_fail_before_reaching_the_store() {
    // GIVEN
    let mut world = World::new();
    let session = world.customer();
    let mut store = FailingStore::new(std::mem::take(&mut world.store)).fail_on(FailOn::Read);
    let ctx = AppContext::new(&mut store, session);
    let homes = world.mobile_homes();

    // WHEN
    let eager = homes
        .fetch_by_names(&ctx, RecordId::new_v4(), &["Document.Pages"], &[])
        .unwrap_err();
    let postload = homes
        .fetch_by_names(&ctx, RecordId::new_v4(), &[], &["DeletedUserUploads"])
        .unwrap_err();
    let known = homes
        .fetch_by_names(&ctx, RecordId::new_v4(), &["Document"], &[])
        .unwrap_err();

    // THEN
    assert!(matches!(eager, AppError::NotImplemented { .. }));
    assert_eq!(
        eager.to_string(),
        "Eager association Document.Pages is not implemented"
    );
    assert_eq!(
        postload.to_string(),
        "Post load association DeletedUserUploads is not implemented"
    );
    assert!(matches!(known, AppError::Query { .. }));
}

#[test]
fn test_stranger_sees_not_found() {
    // GIVEN
    let mut world = World::new();
    let created = home_with_deleted_upload(&mut world);
    let stranger = world.stranger();
    let homes = world.mobile_homes();

    // WHEN
    let err = homes
        .fetch(&world.ctx(stranger), created.id, &[], &[])
        .unwrap_err();
    let office = homes.fetch(&world.office_ctx(), created.id, &[], &[]);

    // THEN
    assert_eq!(
        err.to_string(),
        format!("ID: {} not found while looking for MobileHome", created.id)
    );
    assert!(office.is_ok());
}

#[test]
fn test_anonymous_fetch_is_unrestricted() {
    let mut world = World::new();
    let created = home_with_deleted_upload(&mut world);

    let fetched = world
        .mobile_homes()
        .fetch(&world.ctx(Session::anonymous()), created.id, &[], &[]);

    assert!(fetched.is_ok());
}

#[test]
fn test_missing_id_is_not_found() {
    let mut world = World::new();
    let id = RecordId::new_v4();

    let err = world
        .boats()
        .fetch(&world.office_ctx(), id, &[], &[])
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        format!("ID: {id} not found while looking for BoatShipment")
    );
}
