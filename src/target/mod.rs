#[cfg(packet_family)]
mod linux;

#[cfg(packet_family)]
pub use linux::*;

#[cfg(datalink_family)]
mod bsd;

#[cfg(datalink_family)]
pub use bsd::*;

mod getifaddrs;
mod unix;

pub use getifaddrs::*;

#[cfg(test)]
pub(crate) mod fixture;
