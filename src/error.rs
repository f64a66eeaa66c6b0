use thiserror::Error;

#[derive(Debug, Error)]
pub enum DnsError {
    #[error("invalid DNS header length: {0} bytes")]
    MalformedHeader(usize),

    #[error("unknown query type: {0}")]
    UnknownRecordType(String),

    #[error("message truncated at offset {0}")]
    Truncated(usize),

    #[error("compression pointer loop at offset {0}")]
    PointerLoop(usize),

    #[error("bad label at offset {0}")]
    BadLabel(usize),

    #[error("rdata of {len} bytes does not fit record type {type_}")]
    BadRdata { type_: u16, len: u16 },

    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),
}
