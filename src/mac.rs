use std::fmt;
use std::str::FromStr;

use crate::utils::hex::HexSlice;
use crate::{Error, Result};

/// Hardware address of a network interface, copied out of a link-layer
/// record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MacAddress {
    /// 48-bit (Ethernet, Wi-Fi) address
    Eui48([u8; 6]),
    /// 64-bit (FireWire, some IEEE 802.15.4) address
    Eui64([u8; 8]),
}

impl MacAddress {
    pub fn new_eui48(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8) -> Self {
        MacAddress::Eui48([a, b, c, d, e, f])
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new_eui64(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8) -> Self {
        MacAddress::Eui64([a, b, c, d, e, f, g, h])
    }

    /// Copies `bytes` into a `MacAddress`. Only 6 and 8 byte addresses are
    /// representable.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if let Ok(addr) = <[u8; 6]>::try_from(bytes) {
            return Some(MacAddress::Eui48(addr));
        }

        <[u8; 8]>::try_from(bytes).ok().map(MacAddress::Eui64)
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            MacAddress::Eui48(addr) => &addr[..],
            MacAddress::Eui64(addr) => &addr[..],
        }
    }

    /// Whether every byte is zero, as reported for loopback interfaces.
    pub fn is_zero(&self) -> bool {
        self.as_bytes().iter().all(|byte| *byte == 0)
    }
}

impl AsRef<[u8]> for MacAddress {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", HexSlice::new(self))
    }
}

/// Parses `84:62:7a:03:bd:01` or `84-62-7A-03-BD-01` notation.
impl FromStr for MacAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidMacAddress(s.to_string());
        let separator = if s.contains('-') { '-' } else { ':' };
        let mut bytes = Vec::with_capacity(8);

        for pair in s.split(separator) {
            if pair.len() != 2 || !pair.bytes().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }

            bytes.push(u8::from_str_radix(pair, 16).map_err(|_| invalid())?);
        }

        MacAddress::from_bytes(&bytes).ok_or_else(invalid)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MacAddress {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MacAddress {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;

        text.parse().map_err(serde::de::Error::custom)
    }
}
