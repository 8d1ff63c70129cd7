use thiserror::Error;

use crate::model::EndpointError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
}
