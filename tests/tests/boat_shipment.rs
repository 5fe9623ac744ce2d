//! Boat shipment create, update and fetch against the in-memory store.

use haul_tests::prelude::*;
use pretty_assertions::assert_eq;

fn field_errors(err: &AppError) -> Vec<(String, Vec<String>)> {
    err.field_errors()
        .map(|errors| {
            errors
                .iter()
                .map(|(field, messages)| (field.to_string(), messages.to_vec()))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn test_create_then_fetch_returns_stored_record() {
    // GIVEN
    let mut world = World::new();
    let shipment = world.shipment(ShipmentType::BoatTowAway);
    let boats = world.boats();

    // WHEN
    let created = boats.create(&mut world.customer_ctx(), boat(shipment.id)).unwrap();
    let fetched = boats
        .fetch(
            &world.customer_ctx(),
            created.id,
            &[EagerAssociation::DocumentUserUploads],
            &[],
        )
        .unwrap();

    // THEN
    assert!(!created.id.is_nil());
    assert!(!created.document_id.is_nil());
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(
        created,
        BoatShipment {
            id: created.id,
            document_id: created.document_id,
            created_at: created.created_at,
            updated_at: created.updated_at,
            document: created.document.clone(),
            ..boat(shipment.id)
        }
    );
    assert_eq!(fetched, created);
    let document = fetched.document.unwrap();
    assert_eq!(document.service_member_id, world.member);
    assert!(document.user_uploads.is_empty());
}

#[test]
fn test_create_on_wrong_shipment_type() {
    // GIVEN
    let mut world = World::new();
    let shipment = world.shipment(ShipmentType::Hhg);

    // WHEN
    let err = world
        .boats()
        .create(&mut world.customer_ctx(), boat(shipment.id))
        .unwrap_err();

    // THEN
    assert_eq!(
        err.to_string(),
        "Invalid input found while validating the boat shipment."
    );
    assert_eq!(
        field_errors(&err),
        vec![(
            "shipment_id".to_string(),
            vec![messages::ERR_PARENT_TYPE.to_string()]
        )]
    );
    assert_eq!(world.store.row_count(BOAT_SHIPMENT), 0);
    assert_eq!(world.store.row_count(DOCUMENT), 0);
}

#[test]
fn test_boat_type_must_match_parent() {
    let mut world = World::new();
    let shipment = world.shipment(ShipmentType::BoatHaulAway);

    let err = world
        .boats()
        .create(&mut world.customer_ctx(), boat(shipment.id))
        .unwrap_err();

    assert_eq!(
        field_errors(&err),
        vec![(
            "boat_type".to_string(),
            vec![messages::ERR_BOAT_TYPE_MISMATCH.to_string()]
        )]
    );
}

#[test]
fn test_small_boat_fails_every_dimension() {
    // GIVEN
    let mut world = World::new();
    let shipment = world.shipment(ShipmentType::BoatTowAway);
    let candidate = BoatShipment {
        length_in_inches: Some(10),
        width_in_inches: Some(10),
        height_in_inches: Some(10),
        ..boat(shipment.id)
    };

    // WHEN
    let err = world
        .boats()
        .create(&mut world.customer_ctx(), candidate)
        .unwrap_err();

    // THEN
    let errors = err.field_errors().unwrap();
    assert_eq!(errors.len(), 3);
    for field in ["length_in_inches", "width_in_inches", "height_in_inches"] {
        assert_eq!(errors.get(field), &[messages::ERR_BOAT_TOO_SMALL.to_string()]);
    }
}

#[test]
fn test_missing_fields_are_reported_together() {
    let mut world = World::new();
    let shipment = world.shipment(ShipmentType::BoatTowAway);
    let candidate = BoatShipment {
        shipment_id: shipment.id,
        ..Default::default()
    };

    let err = world
        .boats()
        .create(&mut world.customer_ctx(), candidate)
        .unwrap_err();

    assert_eq!(
        err.field_errors().unwrap().keys().collect::<Vec<_>>(),
        vec![
            "boat_type",
            "has_trailer",
            "height_in_inches",
            "length_in_inches",
            "make",
            "model",
            "width_in_inches",
            "year",
        ]
    );
}

#[test]
fn test_customer_cannot_create_on_foreign_shipment() {
    // GIVEN
    let mut world = World::new();
    let shipment = world.shipment_for(ShipmentType::BoatTowAway, RecordId::new_v4());

    // WHEN
    let err = world
        .boats()
        .create(&mut world.customer_ctx(), boat(shipment.id))
        .unwrap_err();

    // THEN
    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        format!("ID: {} not found while looking for Shipment", shipment.id)
    );
}

#[test]
fn test_update_without_trailer_clears_roadworthiness() {
    // GIVEN
    let mut world = World::new();
    let shipment = world.shipment(ShipmentType::BoatTowAway);
    let boats = world.boats();
    let created = boats.create(&mut world.customer_ctx(), boat(shipment.id)).unwrap();
    let payload = BoatShipmentUpdate {
        has_trailer: Some(false),
        is_roadworthy: Some(true),
        make: Some("Grady-White".to_string()),
        ..Default::default()
    };

    // WHEN
    let updated = boats
        .update(
            &mut world.customer_ctx(),
            &payload,
            shipment.id,
            &etag::generate(created.updated_at),
        )
        .unwrap();

    // THEN
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.has_trailer, Some(false));
    assert_eq!(updated.is_roadworthy, None);
    assert_eq!(updated.make.as_deref(), Some("Grady-White"));
    assert_eq!(updated.model, created.model);
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.created_at, created.created_at);

    let stored: BoatShipment = world.store.find(created.id, Scope::Live).unwrap().unwrap();
    assert_eq!(stored.is_roadworthy, None);
}

#[test]
fn test_stale_etag_is_rejected() {
    // GIVEN
    let mut world = World::new();
    let shipment = world.shipment(ShipmentType::BoatTowAway);
    let boats = world.boats();
    let created = boats.create(&mut world.customer_ctx(), boat(shipment.id)).unwrap();
    let first = BoatShipmentUpdate {
        year: Some(2001),
        ..Default::default()
    };
    let stale = etag::generate(created.updated_at);
    boats
        .update(&mut world.customer_ctx(), &first, shipment.id, &stale)
        .unwrap();

    // WHEN
    let err = boats
        .update(&mut world.customer_ctx(), &first, shipment.id, &stale)
        .unwrap_err();

    // THEN
    assert!(matches!(err, AppError::PreconditionFailed { id } if id == created.id));
}

#[test]
fn test_update_of_missing_boat() {
    let mut world = World::new();
    let shipment = world.shipment(ShipmentType::BoatTowAway);

    let err = world
        .boats()
        .update(
            &mut world.customer_ctx(),
            &BoatShipmentUpdate::default(),
            shipment.id,
            "",
        )
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        format!("ID: {} not found while looking for BoatShipment", shipment.id)
    );
}

#[test]
fn test_failed_write_rolls_back_document() {
    // GIVEN
    let mut world = World::new();
    let shipment = world.shipment(ShipmentType::BoatTowAway);
    let session = world.customer();
    let mut store =
        FailingStore::new(std::mem::take(&mut world.store)).fail_on(FailOn::Create(BOAT_SHIPMENT));

    // WHEN
    let err = world
        .boats()
        .create(&mut AppContext::new(&mut store, session), boat(shipment.id))
        .unwrap_err();

    // THEN
    assert!(matches!(err, AppError::Query { .. }));
    assert_eq!(store.inner().row_count(DOCUMENT), 0);
    assert_eq!(store.inner().row_count(BOAT_SHIPMENT), 0);
    assert!(!store.inner().in_transaction());
}
