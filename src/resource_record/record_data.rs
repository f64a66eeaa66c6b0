use std::fmt::Display;
use std::net::{Ipv4Addr, Ipv6Addr};

use itertools::Itertools;
use tracing::debug;

use crate::{Cursor, DnsError, Name, Networkable, RecordType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(Name),
    Mx { preference: u16, exchange: Name },
    Other,
}

impl RecordData {
    /// Decode rdata at `cursor`. Name-bearing types advance by what the name
    /// decoder reports rather than by `rd_length`.
    pub fn from_bytes(
        type_: u16,
        rd_length: u16,
        bytes: &[u8],
        cursor: Cursor,
    ) -> Result<(Self, Cursor), DnsError> {
        match RecordType::from_int(type_) {
            Some(RecordType::A) => {
                let data: [u8; 4] = cursor
                    .slice(bytes, rd_length as usize)?
                    .try_into()
                    .or(Err(DnsError::BadRdata {
                        type_,
                        len: rd_length,
                    }))?;
                Ok((Self::A(data.into()), cursor.advance(rd_length as usize)))
            }

            Some(RecordType::Aaaa) => {
                let data: [u8; 16] = cursor
                    .slice(bytes, rd_length as usize)?
                    .try_into()
                    .or(Err(DnsError::BadRdata {
                        type_,
                        len: rd_length,
                    }))?;
                Ok((Self::Aaaa(data.into()), cursor.advance(rd_length as usize)))
            }

            Some(RecordType::Cname) => {
                let (name, cursor) = Name::from_bytes(bytes, cursor)?;
                Ok((Self::Cname(name), cursor))
            }

            Some(RecordType::Mx) => {
                let preference = cursor.read_u16(bytes)?;
                let (exchange, cursor) = Name::from_bytes(bytes, cursor.advance(2))?;
                Ok((
                    Self::Mx {
                        preference,
                        exchange,
                    },
                    cursor,
                ))
            }

            None => {
                debug!(type_, "received record data of unknown type");
                cursor.slice(bytes, rd_length as usize)?;
                Ok((Self::Other, cursor.advance(rd_length as usize)))
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Other)
    }
}

impl Display for RecordData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A(addr) => write!(f, "{addr}"),
            // Every group spelled out, no `::`
            Self::Aaaa(addr) => write!(
                f,
                "{}",
                addr.segments().iter().map(|s| format!("{s:x}")).join(":")
            ),
            Self::Cname(name) => write!(f, "{name}"),
            Self::Mx { exchange, .. } => write!(f, "{exchange}"),
            Self::Other => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cursor, DnsError, RecordData};

    #[test]
    fn renders_ipv4() {
        let bytes = [93, 184, 216, 34];
        let (data, cursor) = RecordData::from_bytes(1, 4, &bytes, Cursor::new(0)).unwrap();

        assert_eq!(data.to_string(), "93.184.216.34");
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn renders_ipv6_groups_lowercase() {
        let bytes = [
            0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0xab, 0xcd, 0x00, 0x01,
        ];
        let (data, _) = RecordData::from_bytes(28, 16, &bytes, Cursor::new(0)).unwrap();

        assert_eq!(data.to_string(), "2001:db8:0:0:0:0:abcd:1");
    }

    #[test]
    fn rejects_wrong_address_length() {
        let bytes = [127, 0, 0];
        assert!(matches!(
            RecordData::from_bytes(1, 3, &bytes, Cursor::new(0)),
            Err(DnsError::BadRdata { type_: 1, len: 3 })
        ));
    }

    #[test]
    fn rejects_rdata_past_the_end() {
        let bytes = [127, 0, 0];
        assert!(matches!(
            RecordData::from_bytes(1, 4, &bytes, Cursor::new(0)),
            Err(DnsError::Truncated(0))
        ));
    }
}
