//! Link-layer (hardware) addresses of network interfaces on Unix-like
//! systems.
//!
//! Records of the link-layer family reported by `getifaddrs(3)` embed the
//! interface's hardware address. [`lladdr`] exposes those bytes as a
//! [`LinkLayerAddress`] view borrowed from the record, and
//! [`NetworkInterfaceConfig::show`] builds on it to list interfaces with
//! their MAC and IP addresses.
//!
//! ```no_run
//! use lladdr::{getifaddrs, NetworkInterface, NetworkInterfaceConfig};
//!
//! # fn main() -> lladdr::Result<()> {
//! let ifaddrs = getifaddrs()?;
//!
//! for datalink in ifaddrs.datalinks() {
//!     println!("{}: {:?}", datalink.name()?, datalink.lladdr());
//! }
//!
//! for network_interface in NetworkInterface::show()? {
//!     println!("{network_interface:?}");
//! }
//! # Ok(())
//! # }
//! ```
mod error;
mod interface;
mod mac;
mod utils;

#[cfg(link_layer)]
mod lladdr;
#[cfg(link_layer)]
mod target;

pub use error::*;
pub use interface::*;
pub use mac::*;

#[cfg(link_layer)]
pub use lladdr::*;
#[cfg(link_layer)]
pub use target::{getifaddrs, IfAddrIter, IfAddrs, Platform};

#[cfg(packet_family)]
pub use target::PacketFamily;

#[cfg(datalink_family)]
pub use target::DatalinkFamily;

pub type Result<T> = std::result::Result<T, error::Error>;

pub trait NetworkInterfaceConfig {
    /// List system's network interfaces configuration
    fn show() -> Result<Vec<interface::NetworkInterface>>;
}
