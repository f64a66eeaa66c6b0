use bytes::Bytes;

mod error;
pub use error::DnsError;

mod cursor;
pub use cursor::Cursor;

mod header;
pub use header::{Flags, Header};

mod name;
pub use name::Name;

mod message;
pub use message::{Message, Query};

mod question;
pub use question::Question;

mod resource_record;
pub use resource_record::{RecordData, ResourceRecord};

mod record_type;
pub use record_type::RecordType;

pub mod transport;

mod config;
pub use config::{Config, DEFAULT_OUTPUT};

mod input;
pub use input::{is_valid_domain, parse_query, QuerySource};

mod lookup;
pub use lookup::{lookup, Outcome};

mod output;
pub use output::Output;

mod transactions;
pub use transactions::TransactionTable;

pub trait Networkable: Sized {
    fn to_bytes(&self) -> Bytes;

    /// Decode a value starting at `cursor`, returning it along with the cursor
    /// the next field starts at.
    fn from_bytes(bytes: &[u8], cursor: Cursor) -> Result<(Self, Cursor), DnsError>;
}
