//! Data-shaping services for the SkyView Weather Proxy

pub mod synthesis;
pub mod units;
