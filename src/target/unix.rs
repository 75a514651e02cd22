use std::collections::HashMap;

use libc::{c_int, AF_INET, AF_INET6};
use log::{debug, trace};

use super::{getifaddrs, ifa_dstaddr, Platform};
use crate::utils::{
    ipv4_from_sockaddr, ipv6_from_sockaddr, make_ipv4_netmask, make_ipv6_netmask,
    make_netifa_name, netifa_index,
};
use crate::{DatalinkIfAddr, LinkLayerFamily, NetworkInterface, NetworkInterfaceConfig, Result};

impl NetworkInterfaceConfig for NetworkInterface {
    fn show() -> Result<Vec<NetworkInterface>> {
        let ifaddrs = getifaddrs()?;
        let mut network_interfaces: HashMap<String, NetworkInterface> = HashMap::new();

        for netifa in &ifaddrs {
            let netifa_addr = netifa.ifa_addr;
            let netifa_family = if netifa_addr.is_null() {
                trace!("skipping record without address");
                continue;
            } else {
                unsafe { (*netifa_addr).sa_family as c_int }
            };

            let network_interface = match netifa_family {
                family if family == Platform::FAMILY => {
                    let datalink = unsafe { DatalinkIfAddr::from_ifaddrs(netifa) }?;
                    let name = datalink.name()?;
                    let lladdr = datalink.lladdr();
                    let mac_addr = lladdr.to_mac_address();

                    if mac_addr.is_none() && !lladdr.is_empty() {
                        debug!(
                            "`{name}` has a {} byte hardware address, not reported",
                            lladdr.len()
                        );
                    }

                    NetworkInterface::new_datalink(&name, mac_addr, datalink.index())
                }
                AF_INET => {
                    let Some(addr) = ipv4_from_sockaddr(netifa_addr) else {
                        continue;
                    };
                    let name = make_netifa_name(netifa)?;
                    let netmask = make_ipv4_netmask(netifa);
                    let broadcast = ipv4_from_sockaddr(ifa_dstaddr(netifa));

                    let index = netifa_index(netifa);

                    NetworkInterface::new_afinet(&name, addr, netmask, broadcast, index)
                }
                AF_INET6 => {
                    let Some(addr) = ipv6_from_sockaddr(netifa_addr) else {
                        continue;
                    };
                    let name = make_netifa_name(netifa)?;
                    let netmask = make_ipv6_netmask(netifa);
                    let broadcast = ipv6_from_sockaddr(ifa_dstaddr(netifa));

                    let index = netifa_index(netifa);

                    NetworkInterface::new_afinet6(&name, addr, netmask, broadcast, index)
                }
                family => {
                    trace!("skipping record of family `{family}`");
                    continue;
                }
            };

            match network_interfaces.get_mut(&network_interface.name) {
                Some(known) => known.merge(network_interface),
                None => {
                    network_interfaces.insert(network_interface.name.clone(), network_interface);
                }
            }
        }

        let mut network_interfaces: Vec<NetworkInterface> =
            network_interfaces.into_values().collect();
        network_interfaces.sort_by(|a, b| (a.index, &a.name).cmp(&(b.index, &b.name)));

        debug!("found {} network interfaces", network_interfaces.len());

        Ok(network_interfaces)
    }
}
