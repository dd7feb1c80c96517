pub mod forwarder;
pub mod transport;
pub mod types;

pub use forwarder::forward;
pub use transport::{ReqwestTransport, Transport};
pub use types::{
    ForwardMeta, ForwardResult, OutboundRequest, RequestEcho, ResponseEcho, TransportError,
    TransportResponse,
};
