//! # PSOR Prevention Clients
//!
//! Control-plane clients used by the remediation plugins. Each concern is a
//! trait so a real integration can replace the simulated implementation; the
//! simulated ones only record the action and print a notice.

pub mod endpoint;
pub mod firewall;
pub mod iam;
pub mod ticketing;

pub use endpoint::{EdrClient, EdrError, SimulatedEdr};
pub use firewall::{FirewallClient, FirewallError, SimulatedFirewall};
pub use iam::{IamClient, IamError, SimulatedIam};
pub use ticketing::{SimulatedTicketing, Ticket, TicketError, TicketingClient};
