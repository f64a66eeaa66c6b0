use std::fmt::Display;
use std::str::FromStr;

use crate::DnsError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    Cname,
    Mx,
    Aaaa,
}

impl RecordType {
    pub const fn to_int(self) -> u16 {
        match self {
            Self::A => 1,
            Self::Cname => 5,
            Self::Mx => 15,
            Self::Aaaa => 28,
        }
    }

    pub const fn from_int(value: u16) -> Option<Self> {
        match value {
            1 => Some(Self::A),
            5 => Some(Self::Cname),
            15 => Some(Self::Mx),
            28 => Some(Self::Aaaa),
            _ => None,
        }
    }
}

impl FromStr for RecordType {
    type Err = DnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::Aaaa),
            "CNAME" => Ok(Self::Cname),
            "MX" => Ok(Self::Mx),
            _ => Err(DnsError::UnknownRecordType(s.to_owned())),
        }
    }
}

impl Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::A => "A",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Aaaa => "AAAA",
        })
    }
}
