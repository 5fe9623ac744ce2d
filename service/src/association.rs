//! Association sets accepted by `fetch`.

use haul_core::{AppError, AppResult};
use std::str::FromStr;

/// Associations loaded together with the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EagerAssociation {
    /// The parent shipment.
    Shipment,
    /// The owning document, without uploads.
    Document,
    /// The document and every stored upload, soft-deleted ones included.
    DocumentUserUploads,
}

/// Adjustments applied after loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostloadAssociation {
    /// Keep only uploads that have not been soft-deleted.
    ActiveUserUploads,
}

impl FromStr for EagerAssociation {
    type Err = AppError;

    fn from_str(name: &str) -> AppResult<Self> {
        match name {
            "Shipment" => Ok(Self::Shipment),
            "Document" => Ok(Self::Document),
            "Document.UserUploads" => Ok(Self::DocumentUserUploads),
            _ => Err(AppError::not_implemented(format!(
                "Eager association {name} is not implemented"
            ))),
        }
    }
}

impl FromStr for PostloadAssociation {
    type Err = AppError;

    fn from_str(name: &str) -> AppResult<Self> {
        match name {
            "ActiveUserUploads" => Ok(Self::ActiveUserUploads),
            _ => Err(AppError::not_implemented(format!(
                "Post load association {name} is not implemented"
            ))),
        }
    }
}

pub fn parse_eager(names: &[&str]) -> AppResult<Vec<EagerAssociation>> {
    names.iter().map(|name| name.parse()).collect()
}

pub fn parse_postload(names: &[&str]) -> AppResult<Vec<PostloadAssociation>> {
    names.iter().map(|name| name.parse()).collect()
}
