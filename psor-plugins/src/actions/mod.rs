//! Remediation actions, one per plugin binary.

mod block_ip;
mod isolate_endpoint;
mod log_message;
mod revoke_iam_key;
mod unblock_ip;
mod unisolate_endpoint;

pub use block_ip::BlockIp;
pub use isolate_endpoint::IsolateEndpoint;
pub use log_message::LogMessage;
pub use revoke_iam_key::RevokeIamKey;
pub use unblock_ip::UnblockIp;
pub use unisolate_endpoint::UnisolateEndpoint;
