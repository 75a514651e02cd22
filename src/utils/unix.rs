use std::ffi::CStr;
use std::net::{Ipv4Addr, Ipv6Addr};

use libc::{
    c_int, if_nametoindex, ifaddrs, in6_addr, in_addr, sockaddr, sockaddr_in, sockaddr_in6,
    AF_INET, AF_INET6,
};

use crate::interface::Netmask;
use crate::{Error, Result};

/// Creates a `Ipv4Addr` from a (Unix) `in_addr`. `s_addr` is stored in
/// network byte order regardless of the CPU endianess.
///
/// refer: https://github.com/rust-lang/rust/issues/48819
pub fn ipv4_from_in_addr(internet_address: &in_addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from_be(internet_address.s_addr))
}

/// Creates a `Ipv6Addr` from a (Unix) `in6_addr`
pub fn ipv6_from_in6_addr(internet_address: &in6_addr) -> Ipv6Addr {
    Ipv6Addr::from(internet_address.s6_addr)
}

/// Reads the `in_addr` behind `sockaddr` when it holds an `AF_INET` address.
///
/// `sockaddr` must be null or point to a valid socket address.
pub fn ipv4_from_sockaddr(sockaddr: *const sockaddr) -> Option<Ipv4Addr> {
    if sockaddr_family(sockaddr)? != AF_INET {
        return None;
    }

    let socket_addr = sockaddr as *const sockaddr_in;
    let internet_address = unsafe { (*socket_addr).sin_addr };

    Some(ipv4_from_in_addr(&internet_address))
}

/// Reads the `in6_addr` behind `sockaddr` when it holds an `AF_INET6`
/// address.
///
/// `sockaddr` must be null or point to a valid socket address.
pub fn ipv6_from_sockaddr(sockaddr: *const sockaddr) -> Option<Ipv6Addr> {
    if sockaddr_family(sockaddr)? != AF_INET6 {
        return None;
    }

    let socket_addr = sockaddr as *const sockaddr_in6;
    let internet_address = unsafe { (*socket_addr).sin6_addr };

    Some(ipv6_from_in6_addr(&internet_address))
}

fn sockaddr_family(sockaddr: *const sockaddr) -> Option<c_int> {
    if sockaddr.is_null() {
        return None;
    }

    Some(unsafe { (*sockaddr).sa_family } as c_int)
}

/// Retrieves the Netmask from a `ifaddrs` instance for a network interface
/// from the AF_INET (IPv4) family.
pub fn make_ipv4_netmask(netifa: &ifaddrs) -> Netmask<Ipv4Addr> {
    let sockaddr = netifa.ifa_netmask;

    if sockaddr.is_null() {
        return None;
    }

    // BSD kernels leave `sa_family` unset on netmasks
    let socket_addr = sockaddr as *const sockaddr_in;
    let internet_address = unsafe { (*socket_addr).sin_addr };

    Some(ipv4_from_in_addr(&internet_address))
}

/// Retrieves the Netmask from a `ifaddrs` instance for a network interface
/// from the AF_INET6 (IPv6) family.
pub fn make_ipv6_netmask(netifa: &ifaddrs) -> Netmask<Ipv6Addr> {
    let sockaddr = netifa.ifa_netmask;

    if sockaddr.is_null() {
        return None;
    }

    let socket_addr = sockaddr as *const sockaddr_in6;
    let internet_address = unsafe { (*socket_addr).sin6_addr };

    //  Ignore local addresses
    if internet_address.s6_addr[0] == 0xfe && internet_address.s6_addr[1] == 0x80 {
        return None;
    }

    Some(ipv6_from_in6_addr(&internet_address))
}

/// Retrieves the network interface name
pub fn make_netifa_name(netifa: &ifaddrs) -> Result<String> {
    let bytes = unsafe { CStr::from_ptr(netifa.ifa_name) }.to_bytes();

    String::from_utf8(bytes.to_vec()).map_err(Error::from)
}

/// Retrieves the index for the network interface provided, `0` when the
/// interface is gone.
///
/// ## References
///
/// https://man7.org/linux/man-pages/man3/if_nametoindex.3.html
pub fn netifa_index(netifa: &ifaddrs) -> u32 {
    unsafe { if_nametoindex(netifa.ifa_name) }
}
