use bytes::{BufMut, Bytes, BytesMut};
use tracing::instrument;

use super::{Cursor, Name, Networkable};
use crate::{DnsError, RecordType};

pub const CLASS_IN: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Name,
    pub type_: u16,
    pub class: u16,
}

impl Question {
    pub fn new(name: Name, type_: RecordType) -> Self {
        Self {
            name,
            type_: type_.to_int(),
            class: CLASS_IN,
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_int(self.type_)
    }
}

impl Networkable for Question {
    #[instrument(level = "trace", skip_all)]
    fn to_bytes(&self) -> Bytes {
        let mut ret = BytesMut::new();

        ret.extend_from_slice(&self.name.to_bytes());
        ret.put_u16(self.type_);
        ret.put_u16(self.class);

        ret.into()
    }

    #[instrument(level = "trace", skip(bytes))]
    fn from_bytes(bytes: &[u8], cursor: Cursor) -> Result<(Self, Cursor), DnsError> {
        let (name, cursor) = Name::from_bytes(bytes, cursor)?;

        let type_ = cursor.read_u16(bytes)?;
        let class = cursor.advance(2).read_u16(bytes)?;

        // type + class
        Ok((Self { name, type_, class }, cursor.advance(4)))
    }
}
