//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services and the UI to talk to the fights back-end
//! without depending on concrete implementations.

pub mod api_port;
pub mod fight_source_port;
pub mod raw_api_port;

pub use api_port::{ApiError, ApiPort};
pub use fight_source_port::FightSourcePort;
pub use raw_api_port::RawApiPort;

#[cfg(any(test, feature = "testing"))]
pub use fight_source_port::MockFightSourcePort;
#[cfg(any(test, feature = "testing"))]
pub use raw_api_port::MockRawApiPort;
