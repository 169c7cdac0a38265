//! Error conversion glue between payload types and the service layer.

use crate::dto::categories::CategoryPayloadError;
use crate::dto::topics::TopicPayloadError;
use crate::services::ServiceError;

impl From<CategoryPayloadError> for ServiceError {
    fn from(val: CategoryPayloadError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<TopicPayloadError> for ServiceError {
    fn from(val: TopicPayloadError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}
