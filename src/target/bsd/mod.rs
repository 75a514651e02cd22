mod ffi;

use std::ptr::NonNull;

use libc::{c_int, ifaddrs, sockaddr, sockaddr_dl, AF_LINK};

use crate::LinkLayerFamily;
use ffi::lladdr_datalink;

/// `AF_LINK` records, whose address is a `sockaddr_dl`.
///
/// ## References
///
/// https://man.freebsd.org/cgi/man.cgi?query=link_addr&sektion=3
#[derive(Debug, Clone, Copy)]
pub struct DatalinkFamily;

impl LinkLayerFamily for DatalinkFamily {
    const FAMILY: c_int = AF_LINK;

    unsafe fn locate(sockaddr: NonNull<sockaddr>) -> (*const u8, usize, usize) {
        let socket_addr = sockaddr.cast::<sockaddr_dl>().as_ptr() as *const sockaddr_dl;
        let addr_len = unsafe { (*socket_addr).sdl_alen } as usize;

        // `sdl_len` covers the whole address, however long
        (unsafe { lladdr_datalink(socket_addr) }, addr_len, addr_len)
    }
}

/// Link-layer family of the target platform
pub type Platform = DatalinkFamily;

/// Broadcast address (or point-to-point peer) of the record.
///
/// ## References
///
/// https://developer.apple.com/library/archive/documentation/System/Conceptual/ManPages_iPhoneOS/man3/getifaddrs.3.html
pub(crate) fn ifa_dstaddr(netifa: &ifaddrs) -> *const sockaddr {
    netifa.ifa_dstaddr
}

#[cfg(test)]
pub(crate) unsafe fn write_link_sockaddr(
    storage: *mut sockaddr,
    name: &str,
    addr: &[u8],
) -> *mut u8 {
    use std::{mem, ptr};

    let socket_addr = storage.cast::<sockaddr_dl>();

    unsafe {
        (*socket_addr).sdl_len = mem::size_of::<sockaddr_dl>() as u8;
        (*socket_addr).sdl_family = AF_LINK as u8;
        (*socket_addr).sdl_nlen = name.len() as u8;
        (*socket_addr).sdl_alen = addr.len() as u8;

        // name first, hardware address right after it; may run past
        // `sdl_data` into the rest of the storage
        let data = ptr::addr_of_mut!((*socket_addr).sdl_data).cast::<u8>();
        ptr::copy_nonoverlapping(name.as_ptr(), data, name.len());

        let lladdr = data.add(name.len());
        ptr::copy_nonoverlapping(addr.as_ptr(), lladdr, addr.len());

        lladdr
    }
}
