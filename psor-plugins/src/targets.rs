//! Typed parameters of the remediation actions.

use std::net::IpAddr;

use psor_sdk::{FromParameters, ParameterMap, PluginError};

pub const IP_ADDRESS: &str = "ip_address";
pub const ENDPOINT_ID: &str = "endpoint_id";
pub const KEY_ID: &str = "key_id";
pub const MESSAGE: &str = "message";

/// Target of a firewall action. `text` is the value as given and is what the
/// rule is submitted for; `address` is set only when it is an IP literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpTarget {
    pub text: String,
    pub address: Option<IpAddr>,
}

impl IpTarget {
    /// The parsed address, or `InvalidParameter` for any other value.
    pub fn literal(&self) -> Result<IpAddr, PluginError> {
        self.address
            .ok_or_else(|| PluginError::invalid(IP_ADDRESS, &self.text, "is not an IP address"))
    }
}

impl FromParameters for IpTarget {
    fn from_parameters(params: &ParameterMap) -> Result<Self, PluginError> {
        let text = params.require(IP_ADDRESS)?;
        Ok(Self {
            text: text.to_owned(),
            address: text.parse().ok(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTarget {
    pub endpoint_id: String,
}

impl FromParameters for EndpointTarget {
    fn from_parameters(params: &ParameterMap) -> Result<Self, PluginError> {
        Ok(Self {
            endpoint_id: params.require(ENDPOINT_ID)?.to_owned(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTarget {
    pub key_id: String,
}

impl FromParameters for KeyTarget {
    fn from_parameters(params: &ParameterMap) -> Result<Self, PluginError> {
        Ok(Self {
            key_id: params.require(KEY_ID)?.to_owned(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub message: String,
}

impl FromParameters for LogLine {
    fn from_parameters(params: &ParameterMap) -> Result<Self, PluginError> {
        Ok(Self {
            message: params.require(MESSAGE)?.to_owned(),
        })
    }
}
