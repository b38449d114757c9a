//! Local network lookup for the `host-ip` placeholder

use std::net::{IpAddr, Ipv4Addr};

/// Source of this machine's LAN address
pub trait HostAddressSource {
    fn host_ip(&self) -> Option<Ipv4Addr>;
}

/// Reads the addresses of the local network interfaces
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceAddressSource;

impl HostAddressSource for InterfaceAddressSource {
    fn host_ip(&self) -> Option<Ipv4Addr> {
        let interfaces = if_addrs::get_if_addrs().ok()?;
        first_non_loopback_ipv4(interfaces.iter().map(if_addrs::Interface::ip))
    }
}

/// First IPv4 address that is not a loopback address
pub fn first_non_loopback_ipv4(addrs: impl IntoIterator<Item = IpAddr>) -> Option<Ipv4Addr> {
    addrs.into_iter().find_map(|addr| match addr {
        IpAddr::V4(v4) if !v4.is_loopback() => Some(v4),
        _ => None,
    })
}
