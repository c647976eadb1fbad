use thiserror::Error;

/// Errors produced while decoding a PES optional header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PesError {
    /// The buffer ends before a field that the header declares.
    #[error("malformed PES header: {field} needs {need} bytes, have {have}")]
    Truncated {
        field: &'static str,
        need: usize,
        have: usize,
    },
}

impl PesError {
    pub(crate) fn truncated(field: &'static str, need: usize, have: usize) -> Self {
        PesError::Truncated { field, need, have }
    }
}
