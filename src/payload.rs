mod error;
mod probe;
mod source;


pub use error::{PayloadError, Result};
pub use probe::{StdinProbe, StreamInfo, StreamProbe};
pub use source::{
    EnvPayloadSource, PayloadSource, SourceKind, StreamPayloadSource, parse_payload, select_source,
    source_for,
};
