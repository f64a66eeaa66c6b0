use bytes::{Bytes, BytesMut};
use tracing::{debug, instrument};

use super::{Cursor, Header, Name, Networkable, Question, RecordType, ResourceRecord};
use crate::DnsError;

/// An encoded single-question query and the transaction id it carries.
#[derive(Debug, Clone)]
pub struct Query {
    pub id: u16,
    pub buffer: Bytes,
}

impl Query {
    /// Build a query with a random transaction id. The record type is checked
    /// before anything is encoded.
    pub fn new(domain: &str, record_type: &str) -> Result<Self, DnsError> {
        let record_type: RecordType = record_type.parse()?;
        Ok(Self::with_id(rand::random::<u16>(), domain, record_type))
    }

    #[instrument(level = "debug")]
    pub fn with_id(id: u16, domain: &str, record_type: RecordType) -> Self {
        let header = Header::query(id);
        let question = Question::new(Name::new(domain), record_type);

        let mut buffer = BytesMut::new();
        buffer.extend_from_slice(&header.to_bytes());
        buffer.extend_from_slice(&question.to_bytes());

        debug!(len = buffer.len(), "encoded query");

        Self {
            id,
            buffer: buffer.into(),
        }
    }
}

/// A decoded reply: the header, the echoed question and the first answer,
/// if the server sent one.
#[derive(Debug, Clone)]
pub struct Message {
    pub header: Header,
    pub question: Question,
    pub answer: Option<ResourceRecord>,
    /// Where decoding stopped
    pub offset: Cursor,
}

impl Message {
    #[instrument(level = "debug", skip_all)]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DnsError> {
        let cursor = Cursor::default();

        let (header, cursor) = Header::from_bytes(bytes, cursor)?;
        let (question, cursor) = Question::from_bytes(bytes, cursor)?;

        // NODATA and NXDOMAIN replies stop after the question
        let (answer, offset) = if header.num_answers == 0 {
            (None, cursor)
        } else {
            let (answer, offset) = ResourceRecord::from_bytes(bytes, cursor)?;
            (Some(answer), offset)
        };

        Ok(Self {
            header,
            question,
            answer,
            offset,
        })
    }
}
