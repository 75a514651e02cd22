use std::io;
use std::marker::PhantomData;
use std::mem;

use libc::ifaddrs;

use crate::{DatalinkIfAddr, Error, Result};

/// The linked list of interface address records returned by `getifaddrs`,
/// freed with `freeifaddrs` when dropped.
pub struct IfAddrs {
    base: *mut ifaddrs,
}

// SAFETY: the list is owned by this value and never written after
// `getifaddrs` returns; `freeifaddrs` may run on any thread.
unsafe impl Send for IfAddrs {}
unsafe impl Sync for IfAddrs {}

impl IfAddrs {
    pub fn new() -> Result<Self> {
        let mut addr = mem::MaybeUninit::<*mut ifaddrs>::uninit();

        match unsafe { libc::getifaddrs(addr.as_mut_ptr()) } {
            0 => Ok(IfAddrs {
                base: unsafe { addr.assume_init() },
            }),
            getifaddrs_result => Err(Error::GetIfAddrsError(
                String::from("getifaddrs"),
                io::Error::last_os_error()
                    .raw_os_error()
                    .unwrap_or(getifaddrs_result),
            )),
        }
    }

    pub fn iter(&self) -> IfAddrIter<'_> {
        IfAddrIter {
            next: self.base,
            _list: PhantomData,
        }
    }

    /// Records of the link-layer family, one per interface exposing one.
    pub fn datalinks(&self) -> impl Iterator<Item = DatalinkIfAddr<'_>> + '_ {
        self.iter()
            .filter_map(|netifa| unsafe { DatalinkIfAddr::from_ifaddrs(netifa) }.ok())
    }
}

impl Drop for IfAddrs {
    fn drop(&mut self) {
        if !self.base.is_null() {
            unsafe { libc::freeifaddrs(self.base) }
        }
    }
}

impl<'a> IntoIterator for &'a IfAddrs {
    type Item = &'a ifaddrs;
    type IntoIter = IfAddrIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the records of an [`IfAddrs`] list, in kernel order.
pub struct IfAddrIter<'a> {
    next: *const ifaddrs,
    _list: PhantomData<&'a IfAddrs>,
}

impl<'a> Iterator for IfAddrIter<'a> {
    type Item = &'a ifaddrs;

    fn next(&mut self) -> Option<Self::Item> {
        let ifaddrs = unsafe { self.next.as_ref() }?;
        self.next = ifaddrs.ifa_next;

        Some(ifaddrs)
    }
}

/// Lists the system's interface address records.
///
/// ## References
///
/// https://man7.org/linux/man-pages/man3/getifaddrs.3.html
pub fn getifaddrs() -> Result<IfAddrs> {
    IfAddrs::new()
}
