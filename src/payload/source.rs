use std::io::Read;

use tracing::debug;

use crate::config::Config;
use crate::model::BuildRunResults;

use super::{PayloadError, Result, StreamInfo};

/// Something that yields the host's build report, or fails trying.
pub trait PayloadSource {
    fn payload(&mut self) -> Result<BuildRunResults>;
}

/// Which channel carries the build report for this invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Stream,
    Env,
}

/// Picks exactly one channel. Standard input wins whenever it carries content.
pub fn select_source(stream: &StreamInfo, env_payload: &str) -> Result<SourceKind> {
    if stream.has_content() {
        Ok(SourceKind::Stream)
    } else if !env_payload.is_empty() {
        Ok(SourceKind::Env)
    } else {
        Err(PayloadError::NoInput)
    }
}

pub fn source_for(kind: SourceKind, config: &Config) -> Box<dyn PayloadSource> {
    debug!(?kind, "reading plugin input");
    match kind {
        SourceKind::Stream => Box::new(StreamPayloadSource::new(std::io::stdin())),
        SourceKind::Env => Box::new(EnvPayloadSource::new(config.payload.clone())),
    }
}

pub fn parse_payload(raw: &str) -> Result<BuildRunResults> {
    if raw.is_empty() {
        return Err(PayloadError::NoInput);
    }
    serde_json::from_str(raw).map_err(|source| PayloadError::Parse {
        input: raw.to_string(),
        source,
    })
}

#[derive(Debug, Clone)]
pub struct EnvPayloadSource {
    value: String,
}

impl EnvPayloadSource {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl PayloadSource for EnvPayloadSource {
    fn payload(&mut self) -> Result<BuildRunResults> {
        parse_payload(&self.value)
    }
}

/// Reads the whole stream until the writer closes it.
#[derive(Debug)]
pub struct StreamPayloadSource<R> {
    reader: R,
}

impl<R: Read> StreamPayloadSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> PayloadSource for StreamPayloadSource<R> {
    fn payload(&mut self) -> Result<BuildRunResults> {
        let mut raw = Vec::new();
        self.reader.read_to_end(&mut raw)?;
        parse_payload(&String::from_utf8_lossy(&raw))
    }
}
