use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("end of stream at byte {position}: needed {needed}, {remaining} remaining")]
    EndOfStream {
        position: usize,
        needed: usize,
        remaining: usize,
    },
}
