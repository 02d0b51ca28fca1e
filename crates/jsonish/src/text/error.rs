//! Text codec error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("no value could be parsed from the input")]
    Unparsable,
}
