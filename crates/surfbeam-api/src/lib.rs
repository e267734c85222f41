// surfbeam-api: Async client and status-page decoder for SurfBeam satellite modems

pub mod client;
pub mod error;
pub mod status;
pub mod transport;

pub use client::{DEFAULT_MODEM_URI, ModemClient};
pub use error::{DecodeError, Error};
pub use status::{FIELD_COUNT, FIELDS, FieldKind, MacAddress, ModemStatus, decode};
pub use transport::{TlsMode, TransportConfig};
