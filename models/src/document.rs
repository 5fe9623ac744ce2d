//! Supporting documents and their uploads.

use chrono::{DateTime, Utc};
use haul_core::{
    from_row, messages, to_row, AssociationRef, FieldErrors, Link, Model, Record, RecordError,
    RecordId, RecordKind, Row, SoftDelete,
};
use serde::{Deserialize, Serialize};

use crate::{DOCUMENT, USER_UPLOAD};

static DOCUMENT_ASSOCIATIONS: [AssociationRef; 1] = [AssociationRef::has_many(
    "user_uploads",
    USER_UPLOAD,
    Link::Foreign("document_id"),
)];

/// A container of uploaded files owned by a service member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: RecordId,
    pub service_member_id: RecordId,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,

    #[serde(skip)]
    pub user_uploads: Vec<UserUpload>,
}

impl Document {
    pub fn new(service_member_id: RecordId) -> Self {
        Self {
            service_member_id,
            ..Default::default()
        }
    }

    /// Uploads that have not been soft-deleted.
    pub fn active_uploads(&self) -> impl Iterator<Item = &UserUpload> {
        self.user_uploads
            .iter()
            .filter(|upload| upload.deleted_at.is_none())
    }
}

impl Record for Document {
    fn kind(&self) -> RecordKind {
        DOCUMENT
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn soft_delete_field(&mut self) -> SoftDelete<'_> {
        SoftDelete::Field(&mut self.deleted_at)
    }

    fn stamp(&mut self, now: DateTime<Utc>, created: bool) {
        if created {
            self.created_at = now;
        }
        self.updated_at = now;
    }

    fn associations(&self) -> &'static [AssociationRef] {
        &DOCUMENT_ASSOCIATIONS
    }

    fn associated_mut(&mut self) -> Vec<&mut dyn Record> {
        self.user_uploads
            .iter_mut()
            .map(|upload| upload as &mut dyn Record)
            .collect()
    }

    fn attach(&mut self, name: &str, rows: Vec<Row>) -> Result<(), RecordError> {
        match name {
            "user_uploads" => {
                self.user_uploads = rows.into_iter().map(from_row).collect::<Result<_, _>>()?;
                Ok(())
            }
            _ => Err(RecordError::unknown_association(DOCUMENT, name)),
        }
    }

    fn to_row(&self) -> Result<Row, RecordError> {
        to_row(DOCUMENT, self)
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.service_member_id.is_nil() {
            errors.add("service_member_id", messages::ERR_REQUIRED);
        }
        errors
    }
}

impl Model for Document {
    const KIND: RecordKind = DOCUMENT;
}

/// A file attached to a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpload {
    pub id: RecordId,
    pub document_id: RecordId,
    pub uploader_id: RecordId,
    pub filename: String,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl UserUpload {
    pub fn new(uploader_id: RecordId, filename: impl Into<String>) -> Self {
        Self {
            uploader_id,
            filename: filename.into(),
            ..Default::default()
        }
    }
}

impl Record for UserUpload {
    fn kind(&self) -> RecordKind {
        USER_UPLOAD
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn soft_delete_field(&mut self) -> SoftDelete<'_> {
        SoftDelete::Field(&mut self.deleted_at)
    }

    fn stamp(&mut self, now: DateTime<Utc>, created: bool) {
        if created {
            self.created_at = now;
        }
        self.updated_at = now;
    }

    fn to_row(&self) -> Result<Row, RecordError> {
        to_row(USER_UPLOAD, self)
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.document_id.is_nil() {
            errors.add("document_id", messages::ERR_REQUIRED);
        }
        if self.filename.trim().is_empty() {
            errors.add("filename", messages::ERR_BLANK);
        }
        errors
    }
}

impl Model for UserUpload {
    const KIND: RecordKind = USER_UPLOAD;
}
