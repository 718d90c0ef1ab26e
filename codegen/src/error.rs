use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("members {first:?} and {second:?} of enumeration {enumeration:?} both map to identifier `{identifier}`")]
    IdentifierCollision {
        enumeration: String,
        identifier: String,
        first: String,
        second: String,
    },
}
