pub mod proxy;

pub use proxy::{GrpcOptions, Network, RealityOptions, VlessProxy, WsOptions};
