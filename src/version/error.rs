use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid version string {input:?}: segment {segment:?} is not a non-negative integer")]
pub struct ParseError {
    pub input: String,
    pub segment: String,
}
