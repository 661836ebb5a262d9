// Translation between DocumentId and the store-native ObjectId

use mongodb::bson::oid::ObjectId;

use crate::domain::{DocumentId, DomainError, DomainResult};

pub(crate) fn to_object_id(id: &DocumentId) -> DomainResult<ObjectId> {
    ObjectId::parse_str(id.as_str()).map_err(|e| DomainError::invalid_identifier(e.to_string()))
}

pub(crate) fn from_object_id(oid: ObjectId) -> DomainResult<DocumentId> {
    DocumentId::parse(&oid.to_hex())
}
