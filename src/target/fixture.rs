//! Hand built `ifaddrs` records for exercising the accessor without the
//! host's interfaces.
use std::ffi::CString;
use std::mem;

use libc::{ifaddrs, sockaddr, sockaddr_in, AF_INET};

use super::write_link_sockaddr;

/// 8-byte aligned backing store, large enough for any socket address.
type Storage = [u64; 32];

pub(crate) struct FakeIfAddr {
    netifa: Box<ifaddrs>,
    _name: CString,
    storage: *mut Storage,
    lladdr: *mut u8,
}

impl FakeIfAddr {
    fn new(name: &str, build: impl FnOnce(*mut sockaddr) -> *mut u8) -> Self {
        let name = CString::new(name).unwrap();
        let storage = Box::into_raw(Box::new([0u64; 32]));
        let lladdr = build(storage.cast());

        let mut netifa: Box<ifaddrs> = Box::new(unsafe { mem::zeroed() });
        netifa.ifa_name = name.as_ptr() as *mut _;
        netifa.ifa_addr = storage.cast();

        FakeIfAddr {
            netifa,
            _name: name,
            storage,
            lladdr,
        }
    }

    /// Link-layer record of interface `name` with hardware address `addr`.
    pub(crate) fn link(name: &str, addr: &[u8]) -> Self {
        Self::new(name, |sockaddr| unsafe { write_link_sockaddr(sockaddr, name, addr) })
    }

    /// `AF_INET` record of interface `name`.
    pub(crate) fn inet(name: &str) -> Self {
        Self::new(name, |sockaddr| {
            let socket_addr = sockaddr.cast::<sockaddr_in>();
            unsafe { (*socket_addr).sin_family = AF_INET as _ };
            std::ptr::null_mut()
        })
    }

    /// Record whose `ifa_addr` is null.
    pub(crate) fn without_address(name: &str) -> Self {
        let mut fake = Self::new(name, |_| std::ptr::null_mut());
        fake.netifa.ifa_addr = std::ptr::null_mut();
        fake
    }

    pub(crate) fn ifaddrs(&self) -> &ifaddrs {
        &self.netifa
    }

    /// First byte of the hardware address written into the record.
    pub(crate) fn lladdr_ptr(&self) -> *mut u8 {
        self.lladdr
    }
}

impl Drop for FakeIfAddr {
    fn drop(&mut self) {
        drop(unsafe { Box::from_raw(self.storage) })
    }
}
