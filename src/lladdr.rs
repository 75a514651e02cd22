//! Access to the hardware address carried by link-layer `ifaddrs` records.
//!
//! `getifaddrs(3)` reports one record per interface whose `ifa_addr` belongs
//! to the platform's link-layer family (`AF_PACKET` on Linux, `AF_LINK` on
//! BSD and Darwin). The hardware address lives inside that socket address,
//! after a platform specific header. [`lladdr`] returns a view over those
//! bytes without copying them.
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::slice::from_raw_parts;

use libc::{c_int, ifaddrs, sockaddr};

use crate::target::Platform;
use crate::utils::hex::HexSlice;
use crate::utils::{make_netifa_name, netifa_index};
use crate::{Error, MacAddress, Result};

/// Layout of link-layer socket addresses on one OS family.
pub trait LinkLayerFamily {
    /// `sa_family` of link-layer records
    const FAMILY: c_int;

    /// Locates the hardware address inside a link-layer socket address.
    ///
    /// Returns its first byte, the length the platform recorded for it and
    /// how many of those bytes the socket address layout is known to hold.
    ///
    /// # Safety
    ///
    /// `sockaddr` must point to a live socket address of family
    /// [`Self::FAMILY`](LinkLayerFamily::FAMILY).
    unsafe fn locate(sockaddr: NonNull<sockaddr>) -> (*const u8, usize, usize);
}

/// An `ifaddrs` record whose address is known to be of the link-layer
/// family.
#[derive(Clone, Copy)]
pub struct DatalinkIfAddr<'a> {
    netifa: &'a ifaddrs,
    sockaddr: NonNull<sockaddr>,
}

// SAFETY: only read access is given to the record and its socket address,
// both borrowed for `'a` and left untouched by `getifaddrs` after it returns.
unsafe impl Send for DatalinkIfAddr<'_> {}
unsafe impl Sync for DatalinkIfAddr<'_> {}

impl<'a> DatalinkIfAddr<'a> {
    /// Checks `netifa` is a link-layer record.
    ///
    /// # Safety
    ///
    /// `netifa.ifa_addr` must be null or point to a socket address, and
    /// `netifa.ifa_name` to a NUL terminated string, both living for `'a`.
    /// Records yielded by [`IfAddrs`](crate::IfAddrs) satisfy this.
    pub unsafe fn from_ifaddrs(netifa: &'a ifaddrs) -> Result<Self> {
        let sockaddr = NonNull::new(netifa.ifa_addr).ok_or(Error::MissingAddress)?;
        let found = unsafe { sockaddr.as_ref().sa_family } as c_int;

        if found != Platform::FAMILY {
            return Err(Error::UnexpectedFamily {
                expected: Platform::FAMILY,
                found,
            });
        }

        Ok(DatalinkIfAddr { netifa, sockaddr })
    }

    /// The underlying record
    pub fn ifaddrs(&self) -> &'a ifaddrs {
        self.netifa
    }

    pub fn name(&self) -> Result<String> {
        make_netifa_name(self.netifa)
    }

    pub fn index(&self) -> u32 {
        netifa_index(self.netifa)
    }

    /// View over the hardware address embedded in this record.
    pub fn lladdr(&self) -> LinkLayerAddress<'a> {
        let (ptr, len, available) = unsafe { Platform::locate(self.sockaddr) };

        LinkLayerAddress {
            ptr,
            len,
            available: available.min(len),
            _record: PhantomData,
        }
    }
}

impl fmt::Debug for DatalinkIfAddr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatalinkIfAddr")
            .field("name", &self.name().ok())
            .field("lladdr", &self.lladdr())
            .finish()
    }
}

/// Returns the hardware address embedded in a link-layer record.
pub fn lladdr(record: DatalinkIfAddr<'_>) -> LinkLayerAddress<'_> {
    record.lladdr()
}

/// Non-owning view over the hardware address bytes of a link-layer record.
///
/// Reads go through to the record, so changes made to it are visible through
/// an existing view.
#[derive(Clone, Copy)]
pub struct LinkLayerAddress<'a> {
    ptr: *const u8,
    len: usize,
    available: usize,
    _record: PhantomData<&'a ifaddrs>,
}

// SAFETY: the view only reads the record, which nothing mutates while it is
// borrowed for `'a`.
unsafe impl Send for LinkLayerAddress<'_> {}
unsafe impl Sync for LinkLayerAddress<'_> {}

impl<'a> LinkLayerAddress<'a> {
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr
    }

    /// Length recorded by the platform (`sdl_alen` or `sll_halen`)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the recorded length runs past what the socket address layout
    /// holds, in which case [`as_bytes`](Self::as_bytes) only returns the
    /// leading bytes. Linux `sockaddr_ll` declares 8 address bytes while
    /// InfiniBand addresses are 20.
    pub fn is_truncated(&self) -> bool {
        self.available < self.len
    }

    /// Address bytes, cut short when [`is_truncated`](Self::is_truncated).
    pub fn as_bytes(&self) -> &'a [u8] {
        unsafe { from_raw_parts(self.ptr, self.available) }
    }

    /// Reads `len` bytes from the start of the address, ignoring the
    /// recorded length.
    ///
    /// # Safety
    ///
    /// The record must hold at least `len` bytes past the start of the
    /// address, as it does when `len` is the hardware address length of the
    /// interface type.
    pub unsafe fn bytes_with_len(&self, len: usize) -> &'a [u8] {
        unsafe { from_raw_parts(self.ptr, len) }
    }

    /// Copies the address out when it is 6 or 8 bytes long.
    pub fn to_mac_address(&self) -> Option<MacAddress> {
        if self.is_truncated() {
            return None;
        }

        MacAddress::from_bytes(self.as_bytes())
    }
}

impl fmt::Debug for LinkLayerAddress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkLayerAddress({}", HexSlice::new(self.as_bytes()))?;

        if self.is_truncated() {
            write!(f, ", {} of {} bytes", self.available, self.len)?;
        }

        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;
    use std::thread;

    use libc::AF_INET;

    use super::{lladdr, DatalinkIfAddr, LinkLayerFamily};
    use crate::target::fixture::FakeIfAddr;
    use crate::target::Platform;
    use crate::{Error, MacAddress};

    const ETHERNET: [u8; 6] = [0x84, 0x62, 0x7a, 0x03, 0xbd, 0x01];

    #[test]
    fn view_points_at_address_bytes() {
        let fake = FakeIfAddr::link("en0", &ETHERNET);
        let record = unsafe { DatalinkIfAddr::from_ifaddrs(fake.ifaddrs()) }.unwrap();
        let view = lladdr(record);

        assert_eq!(view.as_ptr(), fake.lladdr_ptr() as *const u8);
        assert_eq!(view.len(), ETHERNET.len());
        assert_eq!(view.as_bytes(), &ETHERNET);
        assert_eq!(view.to_mac_address(), Some(MacAddress::Eui48(ETHERNET)));
    }

    #[test]
    fn eight_byte_addresses() {
        let eui64 = [0x00, 0x11, 0x22, 0xff, 0xfe, 0x33, 0x44, 0x55];
        let fake = FakeIfAddr::link("fw0", &eui64);
        let record = unsafe { DatalinkIfAddr::from_ifaddrs(fake.ifaddrs()) }.unwrap();

        assert_eq!(record.lladdr().as_bytes(), &eui64);
        assert_eq!(record.lladdr().to_mac_address(), Some(MacAddress::Eui64(eui64)));
    }

    #[test]
    fn repeated_calls_are_equivalent() {
        let fake = FakeIfAddr::link("eth1", &ETHERNET);
        let record = unsafe { DatalinkIfAddr::from_ifaddrs(fake.ifaddrs()) }.unwrap();

        let first = record.lladdr();
        let second = lladdr(record);

        assert_eq!(first.as_ptr(), second.as_ptr());
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn view_does_not_copy() {
        let fake = FakeIfAddr::link("eth0", &ETHERNET);
        let record = unsafe { DatalinkIfAddr::from_ifaddrs(fake.ifaddrs()) }.unwrap();
        let view = record.lladdr();

        unsafe { *fake.lladdr_ptr() = 0xde };

        assert_eq!(view.as_bytes()[0], 0xde);
        assert_eq!(&view.as_bytes()[1..], &ETHERNET[1..]);
    }

    #[test]
    fn caller_supplied_length() {
        let fake = FakeIfAddr::link("eth0", &ETHERNET);
        let record = unsafe { DatalinkIfAddr::from_ifaddrs(fake.ifaddrs()) }.unwrap();

        let bytes = unsafe { record.lladdr().bytes_with_len(4) };

        assert_eq!(bytes, &ETHERNET[..4]);
    }

    #[test]
    fn loopback_without_hardware_address() {
        let fake = FakeIfAddr::link("lo0", &[]);
        let record = unsafe { DatalinkIfAddr::from_ifaddrs(fake.ifaddrs()) }.unwrap();
        let view = record.lladdr();

        assert!(view.is_empty());
        assert!(view.as_bytes().is_empty());
        assert_eq!(view.to_mac_address(), None);
    }

    #[test]
    fn loopback_with_zero_address() {
        let fake = FakeIfAddr::link("lo", &[0; 6]);
        let record = unsafe { DatalinkIfAddr::from_ifaddrs(fake.ifaddrs()) }.unwrap();
        let view = record.lladdr();

        assert_eq!(view.as_bytes(), &[0; 6]);
        assert!(view.to_mac_address().is_some_and(|mac| mac.is_zero()));
    }

    #[test]
    fn long_addresses_are_not_mac_addresses() {
        let infiniband: Vec<u8> = (1..=20).collect();
        let fake = FakeIfAddr::link("ib0", &infiniband);
        let record = unsafe { DatalinkIfAddr::from_ifaddrs(fake.ifaddrs()) }.unwrap();
        let view = record.lladdr();

        assert_eq!(view.len(), 20);
        assert!(infiniband.starts_with(view.as_bytes()));
        assert_eq!(view.is_truncated(), view.as_bytes().len() < 20);
        assert_eq!(view.to_mac_address(), None);

        #[cfg(packet_family)]
        {
            assert!(view.is_truncated());
            assert_eq!(view.as_bytes(), &infiniband[..8]);
        }

        let bytes = unsafe { view.bytes_with_len(view.len()) };
        assert_eq!(bytes, &infiniband[..]);
    }

    #[test]
    fn views_are_shared_across_threads() {
        let fake = FakeIfAddr::link("eth0", &ETHERNET);
        let record = unsafe { DatalinkIfAddr::from_ifaddrs(fake.ifaddrs()) }.unwrap();
        let view = record.lladdr();

        thread::scope(|scope| {
            let readers: Vec<_> = (0..2)
                .map(|_| {
                    scope.spawn(move || (record.lladdr().to_mac_address(), view.as_bytes()))
                })
                .collect();

            for reader in readers {
                let (mac_addr, bytes) = reader.join().unwrap();

                assert_eq!(mac_addr, Some(MacAddress::Eui48(ETHERNET)));
                assert_eq!(bytes, &ETHERNET);
            }
        });
    }

    #[test]
    fn record_metadata() {
        let fake = FakeIfAddr::link("en7", &ETHERNET);
        let record = unsafe { DatalinkIfAddr::from_ifaddrs(fake.ifaddrs()) }.unwrap();

        assert_eq!(record.name().unwrap(), "en7");
        assert!(ptr::eq(record.ifaddrs(), fake.ifaddrs()));
        assert!(format!("{record:?}").contains("84:62:7a:03:bd:01"));
    }

    #[test]
    fn rejects_missing_address() {
        let fake = FakeIfAddr::without_address("eth0");

        assert!(matches!(
            unsafe { DatalinkIfAddr::from_ifaddrs(fake.ifaddrs()) },
            Err(Error::MissingAddress)
        ));
    }

    #[test]
    fn rejects_other_families() {
        let fake = FakeIfAddr::inet("eth0");

        match unsafe { DatalinkIfAddr::from_ifaddrs(fake.ifaddrs()) } {
            Err(Error::UnexpectedFamily { expected, found }) => {
                assert_eq!(expected, Platform::FAMILY);
                assert_eq!(found, AF_INET);
            }
            other => panic!("expected a family mismatch, got {other:?}"),
        }
    }
}
