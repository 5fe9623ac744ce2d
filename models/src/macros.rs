//! Shared `Record` implementation for shipment-dependent sub-records.

/// Implement `Record` and `Model` for a dependent sub-record.
///
/// The type must have `id`, `shipment_id`, `document_id`, `created_at`,
/// `updated_at`, `deleted_at` and `document: Option<Document>` fields.
macro_rules! dependent_record {
    ($ty:ty, $kind:expr) => {
        impl haul_core::Record for $ty {
            fn kind(&self) -> haul_core::RecordKind {
                $kind
            }

            fn id(&self) -> haul_core::RecordId {
                self.id
            }

            fn set_id(&mut self, id: haul_core::RecordId) {
                self.id = id;
            }

            fn deleted_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.deleted_at
            }

            fn soft_delete_field(&mut self) -> haul_core::SoftDelete<'_> {
                haul_core::SoftDelete::Field(&mut self.deleted_at)
            }

            fn stamp(&mut self, now: chrono::DateTime<chrono::Utc>, created: bool) {
                if created {
                    self.created_at = now;
                }
                self.updated_at = now;
            }

            fn associations(&self) -> &'static [haul_core::AssociationRef] {
                &$crate::DOCUMENT_ASSOCIATION
            }

            fn associated_mut(&mut self) -> Vec<&mut dyn haul_core::Record> {
                self.document
                    .iter_mut()
                    .map(|document| document as &mut dyn haul_core::Record)
                    .collect()
            }

            fn attach(
                &mut self,
                name: &str,
                rows: Vec<haul_core::Row>,
            ) -> Result<(), haul_core::RecordError> {
                match name {
                    "document" => {
                        self.document = match rows.into_iter().next() {
                            Some(row) => Some(haul_core::from_row(row)?),
                            None => None,
                        };
                        Ok(())
                    }
                    _ => Err(haul_core::RecordError::unknown_association($kind, name)),
                }
            }

            fn to_row(&self) -> Result<haul_core::Row, haul_core::RecordError> {
                haul_core::to_row($kind, self)
            }

            fn validate(&self) -> haul_core::FieldErrors {
                let mut errors = haul_core::FieldErrors::new();
                if self.shipment_id.is_nil() {
                    errors.add("shipment_id", haul_core::messages::ERR_REQUIRED);
                }
                if self.document_id.is_nil() {
                    errors.add("document_id", haul_core::messages::ERR_REQUIRED);
                }
                errors
            }
        }

        impl haul_core::Model for $ty {
            const KIND: haul_core::RecordKind = $kind;
        }
    };
}
