//! Common validation messages used across Haul components.
//!
//! These constants keep rule output identical between the three dependent
//! entity services.

pub const ERR_REQUIRED: &str = "is required";

pub const ERR_BLANK: &str = "must not be blank";

pub const ERR_NOT_POSITIVE: &str = "must be greater than 0";

pub const ERR_ID_SET_ON_CREATE: &str = "cannot manually set a new ID";

/// Review outcome and submitted values are written by later updates.
pub const ERR_SET_ON_CREATE: &str = "cannot be set on create";

pub const ERR_ID_CHANGED: &str = "new ID must match the original ID";

pub const ERR_PARENT_CHANGED: &str = "cannot be modified once set";

pub const ERR_PARENT_TYPE: &str = "parent shipment has an incompatible shipment type";

pub const ERR_BOAT_TYPE_MISMATCH: &str = "must match the parent shipment type";

pub const ERR_DOCUMENT_OWNER: &str = "must belong to the shipment's service member";

pub const ERR_INVALID_YEAR: &str = "invalid year";

/// Boat has a trailer but roadworthiness was not answered.
pub const ERR_ROADWORTHY_REQUIRED: &str = "is required when the boat has a trailer";

/// None of the boat dimensions exceeds its threshold.
pub const ERR_BOAT_TOO_SMALL: &str =
    "boat must exceed at least one of the minimum length, width or height";

pub const ERR_UPLOAD_REQUIRED: &str = "at least one supporting upload is required";

pub const ERR_STATUS_CHANGED: &str = "status cannot be modified";

pub const ERR_REASON_CHANGED: &str = "reason cannot be modified";

pub const ERR_REASON_WITHOUT_STATUS: &str = "reason should not be set if the status is not set";

pub const ERR_REASON_WITH_APPROVAL: &str = "reason must not be set if the status is Approved";

pub const ERR_REASON_MANDATORY: &str = "reason is mandatory if the status is Excluded or Rejected";
