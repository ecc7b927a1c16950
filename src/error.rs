use thiserror::Error;

use crate::proj::sphere::LatLng;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjError {
    #[error("Indistinguishable poles: {pos} and {neg}")]
    IndistinguishablePoles { pos: LatLng, neg: LatLng },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
