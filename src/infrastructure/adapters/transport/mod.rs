//! Transport Adapter - HttpTransport 实现

mod recording_transport;
mod reqwest_transport;

pub use recording_transport::RecordingTransport;
pub use reqwest_transport::*;
