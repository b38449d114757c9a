//! Placeholder value sources and their precedence
//!
//! Values come from three places:
//! - user values passed on the command line or in the project config
//! - [`network`]: the machine's LAN address for `host-ip`
//! - [`status`]: the external status command for the `supabase-*` names
//!
//! User and network values always win over status values. Source failures
//! are reported as warnings and never abort a run.

pub mod network;
pub mod status;

use std::collections::BTreeSet;

pub use network::{HostAddressSource, InterfaceAddressSource};
pub use status::{CommandStatusSource, StatusError, StatusSource};

use crate::placeholder::{HOST_IP, PlaceholderTable};
use crate::ui::Reporter;

/// Builds the placeholder table for one run
pub struct ValueResolver<'a> {
    status: &'a dyn StatusSource,
    network: &'a dyn HostAddressSource,
    reporter: Reporter,
}

impl<'a> ValueResolver<'a> {
    pub fn new(
        status: &'a dyn StatusSource,
        network: &'a dyn HostAddressSource,
        reporter: Reporter,
    ) -> Self {
        Self {
            status,
            network,
            reporter,
        }
    }

    /// Combine all sources for the placeholders in `used`.
    ///
    /// `user` holds validated, normalized names. Names no source knows are
    /// simply absent from the result.
    pub fn resolve(&self, used: &BTreeSet<String>, user: &PlaceholderTable) -> PlaceholderTable {
        let mut user = user.clone();

        if used.contains(HOST_IP) && !user.contains_key(HOST_IP) {
            match self.network.host_ip() {
                Some(ip) => {
                    self.reporter.verbose(format!("Using {ip} for <{HOST_IP}>"));
                    user.insert(HOST_IP.to_string(), ip.to_string());
                }
                None => self.reporter.warn(format!(
                    "No non-loopback IPv4 interface found, <{HOST_IP}> left unresolved"
                )),
            }
        }

        let missing: BTreeSet<String> = used
            .iter()
            .filter(|name| !user.contains_key(*name))
            .cloned()
            .collect();

        let mut table = if missing.is_empty() {
            PlaceholderTable::new()
        } else {
            self.fetch_status(&missing)
        };
        table.extend(user);
        table
    }

    fn fetch_status(&self, missing: &BTreeSet<String>) -> PlaceholderTable {
        match self.status.fetch(missing) {
            Ok(table) => {
                for name in table.keys() {
                    self.reporter
                        .verbose(format!("Resolved <{name}> from status command"));
                }
                table
            }
            Err(err) => {
                self.reporter
                    .warn(format!("Status command unavailable: {err}"));
                PlaceholderTable::new()
            }
        }
    }
}
