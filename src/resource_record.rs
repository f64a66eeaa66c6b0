use tracing::instrument;

use super::{Cursor, Name, Networkable};
use crate::DnsError;

mod record_data;
pub use record_data::RecordData;

/// A decoded answer. Class and TTL are skipped on the way in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Name,
    pub type_: u16,
    pub rd_length: u16,
    pub data: RecordData,
}

impl ResourceRecord {
    /// The rdata as text; empty for record types we don't interpret.
    pub fn rdata(&self) -> String {
        self.data.to_string()
    }

    #[instrument(level = "trace", skip(bytes))]
    pub fn from_bytes(bytes: &[u8], cursor: Cursor) -> Result<(Self, Cursor), DnsError> {
        let (name, cursor) = Name::from_bytes(bytes, cursor)?;

        let type_ = cursor.read_u16(bytes)?;
        // class, then ttl
        let cursor = cursor.advance(2).advance(2).advance(4);

        let rd_length = cursor.read_u16(bytes)?;
        let cursor = cursor.advance(2);

        let (data, cursor) = RecordData::from_bytes(type_, rd_length, bytes, cursor)?;

        Ok((
            Self {
                name,
                type_,
                rd_length,
                data,
            },
            cursor,
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cursor, Name, RecordData, ResourceRecord};

    fn record(name: &[u8], type_: u16, rdata: &[u8]) -> Vec<u8> {
        let mut bytes = name.to_vec();
        bytes.extend_from_slice(&type_.to_be_bytes());
        bytes.extend_from_slice(&[0x00, 0x01]);
        bytes.extend_from_slice(&300u32.to_be_bytes());
        bytes.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        bytes.extend_from_slice(rdata);
        bytes
    }

    #[test]
    fn decodes_a_record() {
        let bytes = record(b"\x07example\x03com\x00", 1, &[93, 184, 216, 34]);
        let (rr, cursor) = ResourceRecord::from_bytes(&bytes, Cursor::new(0)).unwrap();

        assert_eq!(rr.name.as_str(), "example.com.");
        assert_eq!(rr.type_, 1);
        assert_eq!(rr.rd_length, 4);
        assert_eq!(rr.rdata(), "93.184.216.34");
        assert_eq!(cursor.position(), bytes.len());
    }

    #[test]
    fn decodes_aaaa_record_without_zero_compression() {
        let mut addr = [0u8; 16];
        addr[15] = 1;
        let bytes = record(b"\x00", 28, &addr);
        let (rr, _) = ResourceRecord::from_bytes(&bytes, Cursor::new(0)).unwrap();

        assert_eq!(rr.rdata(), "0:0:0:0:0:0:0:1");
    }

    #[test]
    fn decodes_cname_pointing_back() {
        // "example.com" at 0, answer at 13 with a cname of "www" + ptr(0)
        let mut bytes = b"\x07example\x03com\x00".to_vec();
        let start = bytes.len();
        bytes.extend(record(&[0xc0, 0x00], 5, b"\x03www\xc0\x00"));

        let (rr, cursor) = ResourceRecord::from_bytes(&bytes, Cursor::new(start)).unwrap();

        assert_eq!(rr.name.as_str(), "example.com.");
        assert_eq!(rr.data, RecordData::Cname(Name::new("www.example.com.")));
        assert_eq!(rr.rdata(), "www.example.com.");
        assert_eq!(cursor.position(), bytes.len());
    }

    #[test]
    fn decodes_mx_exchange() {
        let mut rdata = vec![0x00, 0x0a];
        rdata.extend_from_slice(b"\x04mail\x07example\x03com\x00");
        let bytes = record(b"\x00", 15, &rdata);

        let (rr, cursor) = ResourceRecord::from_bytes(&bytes, Cursor::new(0)).unwrap();

        assert_eq!(rr.rdata(), "mail.example.com.");
        assert!(matches!(rr.data, RecordData::Mx { preference: 10, .. }));
        assert_eq!(cursor.position(), bytes.len());
    }

    #[test]
    fn other_types_render_empty() {
        let bytes = record(b"\x00", 16, b"\x05hello");
        let (rr, cursor) = ResourceRecord::from_bytes(&bytes, Cursor::new(0)).unwrap();

        assert_eq!(rr.data, RecordData::Other);
        assert_eq!(rr.rdata(), "");
        assert_eq!(cursor.position(), bytes.len());
    }
}
