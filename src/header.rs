use bitfield::bitfield;
use bytes::{BufMut, Bytes, BytesMut};
use tracing::{instrument, warn};

use super::{Cursor, Networkable};
use crate::DnsError;

pub const HEADER_LEN: usize = 12;

bitfield! {
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct Flags(u16);
    impl Debug;
    u8;
    // query or response
    pub qr, set_qr: 15;
    // query type
    pub opcode, set_opcode: 14, 11;
    // authoritative answerer
    pub aa, set_aa: 10;
    // truncation
    pub tc, set_tc: 9;
    // recursion desired
    pub rd, set_rd: 8;
    // recursion available
    pub ra, set_ra: 7;
    // reserved
    pub z, set_z: 6;
    pub ad, set_ad: 5;
    pub cd, set_cd: 4;
    // response code
    pub rcode, set_rcode: 3, 0;
}

impl Flags {
    pub fn bits(&self) -> u16 {
        self.0
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: Flags,
    pub num_questions: u16,
    pub num_answers: u16,
    pub num_authorities: u16,
    pub num_additionals: u16,
}

impl Header {
    /// Header of a single-question recursive query.
    pub fn query(id: u16) -> Self {
        let mut flags = Flags::default();
        flags.set_rd(true);

        Self {
            id,
            flags,
            num_questions: 1,
            ..Default::default()
        }
    }
}

impl Networkable for Header {
    #[instrument(level = "trace", skip_all)]
    fn to_bytes(&self) -> Bytes {
        let mut ret = BytesMut::with_capacity(HEADER_LEN);
        ret.put_u16(self.id);
        ret.put_u16(self.flags.bits());
        ret.put_u16(self.num_questions);
        ret.put_u16(self.num_answers);
        ret.put_u16(self.num_authorities);
        ret.put_u16(self.num_additionals);

        ret.into()
    }

    /// Fields sit at fixed offsets from the start of the message.
    #[instrument(level = "trace", skip(bytes))]
    fn from_bytes(bytes: &[u8], cursor: Cursor) -> Result<(Self, Cursor), DnsError> {
        if bytes.len() < cursor.position() + HEADER_LEN {
            warn!(len = bytes.len(), "insufficient bytes for header");
            return Err(DnsError::MalformedHeader(bytes.len()));
        }

        let header = Self {
            id: cursor.read_u16(bytes)?,
            flags: Flags(cursor.advance(2).read_u16(bytes)?),
            num_questions: cursor.advance(4).read_u16(bytes)?,
            num_answers: cursor.advance(6).read_u16(bytes)?,
            num_authorities: cursor.advance(8).read_u16(bytes)?,
            num_additionals: cursor.advance(10).read_u16(bytes)?,
        };

        Ok((header, cursor.advance(HEADER_LEN)))
    }
}
