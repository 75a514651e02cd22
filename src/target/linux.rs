use std::ptr::{self, NonNull};

use libc::{c_int, ifaddrs, sockaddr, sockaddr_ll, AF_PACKET};

use crate::LinkLayerFamily;

/// `AF_PACKET` records, whose address is a `sockaddr_ll`.
///
/// ## References
///
/// https://man7.org/linux/man-pages/man7/packet.7.html
#[derive(Debug, Clone, Copy)]
pub struct PacketFamily;

impl LinkLayerFamily for PacketFamily {
    const FAMILY: c_int = AF_PACKET;

    unsafe fn locate(sockaddr: NonNull<sockaddr>) -> (*const u8, usize, usize) {
        let socket_addr = sockaddr.cast::<sockaddr_ll>().as_ptr();
        let sll_addr = unsafe { ptr::addr_of!((*socket_addr).sll_addr) };
        let addr_len = unsafe { (*socket_addr).sll_halen } as usize;

        // glibc allocates room for longer addresses than `sll_addr` declares,
        // other libcs do not
        let declared_len = unsafe { (*sll_addr).len() };

        (sll_addr.cast::<u8>(), addr_len, declared_len)
    }
}

/// Link-layer family of the target platform
pub type Platform = PacketFamily;

/// Broadcast address (or point-to-point peer) of the record.
///
/// ## References
///
/// https://man7.org/linux/man-pages/man3/getifaddrs.3.html
pub(crate) fn ifa_dstaddr(netifa: &ifaddrs) -> *const sockaddr {
    netifa.ifa_ifu
}

#[cfg(test)]
pub(crate) unsafe fn write_link_sockaddr(
    storage: *mut sockaddr,
    _name: &str,
    addr: &[u8],
) -> *mut u8 {
    let socket_addr = storage.cast::<sockaddr_ll>();

    // addresses longer than `sll_addr` spill into the rest of the storage,
    // as in glibc's `sockaddr_ll_max`
    unsafe {
        (*socket_addr).sll_family = AF_PACKET as u16;
        (*socket_addr).sll_halen = addr.len() as u8;

        let data = ptr::addr_of_mut!((*socket_addr).sll_addr).cast::<u8>();
        ptr::copy_nonoverlapping(addr.as_ptr(), data, addr.len());

        data
    }
}
