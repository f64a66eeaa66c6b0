use std::fmt::Display;

use bytes::{BufMut, Bytes, BytesMut};
use tracing::instrument;

use super::{Cursor, Networkable};
use crate::DnsError;

const POINTER_MASK: u8 = 0b1100_0000;

/// A domain name as text.
///
/// Names built for queries carry no trailing dot, names read off the wire
/// always end with one (the root label).
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq)]
pub struct Name(pub String);

impl Name {
    pub fn new(name: &str) -> Self {
        Self(name.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Networkable for Name {
    fn to_bytes(&self) -> Bytes {
        let mut ret = BytesMut::new();

        // Label lengths over 63 are caught by domain validation before we get here
        for section in self.0.split('.').filter(|s| !s.is_empty()) {
            ret.put_u8(section.len() as u8);
            ret.extend_from_slice(section.as_bytes());
        }

        ret.put_u8(0);

        ret.into()
    }

    /// The returned cursor sits right after the first compression pointer if
    /// one was followed, otherwise right after the terminating zero label.
    #[instrument(level = "trace", skip(bytes))]
    fn from_bytes(bytes: &[u8], cursor: Cursor) -> Result<(Self, Cursor), DnsError> {
        let mut name = String::new();
        let mut head = cursor;
        let mut resume: Option<Cursor> = None;
        let mut jumps = 0;

        loop {
            let len = head.read_u8(bytes)?;
            if len == 0 {
                head = head.advance(1);
                break;
            }

            match len & POINTER_MASK {
                POINTER_MASK => {
                    let pointer = (head.read_u16(bytes)? & 0x3fff) as usize;
                    if resume.is_none() {
                        resume = Some(head.advance(2));
                    }

                    // Every legal chain visits distinct offsets
                    jumps += 1;
                    if jumps > bytes.len() {
                        return Err(DnsError::PointerLoop(head.position()));
                    }

                    head = Cursor::new(pointer);
                }
                0 => {
                    let label = head.advance(1).slice(bytes, len as usize)?;
                    if !label.is_ascii() {
                        return Err(DnsError::BadLabel(head.position()));
                    }

                    let label =
                        std::str::from_utf8(label).or(Err(DnsError::BadLabel(head.position())))?;
                    name.push_str(label);
                    name.push('.');

                    head = head.advance(len as usize + 1);
                }
                // 0b01 and 0b10 prefixes are reserved
                _ => return Err(DnsError::BadLabel(head.position())),
            }
        }

        Ok((Self(name), resume.unwrap_or(head)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cursor, DnsError, Name, Networkable};

    #[test]
    fn encodes_labels() {
        let bytes = Name::new("www.example.com").to_bytes();
        assert_eq!(
            &bytes[..],
            b"\x03www\x07example\x03com\x00".as_slice()
        );
    }

    #[test]
    fn skips_empty_labels() {
        let bytes = Name::new("example.com.").to_bytes();
        assert_eq!(&bytes[..], b"\x07example\x03com\x00".as_slice());
    }

    #[test]
    fn round_trips_with_trailing_dot() {
        let longest = "a".repeat(63);
        for domain in [
            "example.com",
            "a.b.c.d.e",
            "my-host-01.sub-domain.example.org",
            longest.as_str(),
        ] {
            let bytes = Name::new(domain).to_bytes();
            let (name, cursor) = Name::from_bytes(&bytes, Cursor::new(0)).unwrap();

            assert_eq!(name.as_str(), format!("{domain}."));
            assert_eq!(cursor.position(), bytes.len());
        }
    }

    #[test]
    fn follows_compression_pointer() {
        let mut bytes = vec![0xff; 12];
        bytes.extend_from_slice(b"\x07example\x03com\x00");
        let k = bytes.len();
        bytes.extend_from_slice(&[0xc0, 0x0c]);
        bytes.extend_from_slice(&[0xde, 0xad]);

        let (name, cursor) = Name::from_bytes(&bytes, Cursor::new(k)).unwrap();

        assert_eq!(name.as_str(), "example.com.");
        assert_eq!(cursor.position(), k + 2);
    }

    #[test]
    fn resumes_after_first_pointer_only() {
        // 0: "com", 5: "example" -> ptr(0), 15: "www" -> ptr(5)
        let mut bytes = b"\x03com\x00".to_vec();
        bytes.extend_from_slice(b"\x07example\xc0\x00");
        bytes.extend_from_slice(b"\x03www\xc0\x05");

        let (name, cursor) = Name::from_bytes(&bytes, Cursor::new(15)).unwrap();

        assert_eq!(name.as_str(), "www.example.com.");
        assert_eq!(cursor.position(), 21);
    }

    #[test]
    fn rejects_pointer_loops() {
        let bytes = [0xc0, 0x02, 0xc0, 0x00];
        assert!(matches!(
            Name::from_bytes(&bytes, Cursor::new(0)),
            Err(DnsError::PointerLoop(_))
        ));
    }

    #[test]
    fn rejects_truncated_labels() {
        let bytes = b"\x07exa";
        assert!(matches!(
            Name::from_bytes(bytes, Cursor::new(0)),
            Err(DnsError::Truncated(_))
        ));
    }

    #[test]
    fn rejects_reserved_label_types() {
        let bytes = [0x40, 0x00];
        assert!(matches!(
            Name::from_bytes(&bytes, Cursor::new(0)),
            Err(DnsError::BadLabel(0))
        ));
    }
}
