//! JSON document processing.
//!
//! An input document declares the network and lists the queries; the output
//! document is a JSON array with one object per query, in query order.

mod dto;
mod input;

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use tracing::debug;

pub use dto::{ItemDto, NOT_FOUND, ResponseDto};
pub use input::{BaseRequest, BusInput, InputDocument, SettingsInput, StatRequest, StopInput};

use crate::domain::IntegrityError;
use crate::planner::SettingsError;
use crate::query::{EngineError, QueryEngine};

/// Fatal errors while processing a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("cannot read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl From<IntegrityError> for DocumentError {
    fn from(err: IntegrityError) -> Self {
        DocumentError::Engine(err.into())
    }
}

impl From<SettingsError> for DocumentError {
    fn from(err: SettingsError) -> Self {
        DocumentError::Engine(err.into())
    }
}

/// Parse an input document.
pub fn load(reader: impl Read) -> Result<InputDocument, DocumentError> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

/// Parse the input document stored at `path`.
pub fn read_path(path: impl AsRef<Path>) -> Result<InputDocument, DocumentError> {
    load(File::open(path)?)
}

/// Build the engine for `document` and answer all of its queries.
pub fn answer_document(document: &InputDocument) -> Result<Vec<ResponseDto>, DocumentError> {
    let settings = document.routing_settings.to_settings()?;
    let catalog = document.catalog()?;
    let engine = QueryEngine::new(catalog, settings)?;

    let requests = document.requests();
    debug!(requests = requests.len(), "answering document");

    Ok(engine
        .answer_all(&requests)
        .iter()
        .map(ResponseDto::from)
        .collect())
}

/// Write the output document for `responses`.
pub fn write(mut writer: impl Write, responses: &[ResponseDto]) -> Result<(), DocumentError> {
    serde_json::to_writer_pretty(&mut writer, responses)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Read an input document from `reader` and write the answers to `writer`.
pub fn process(reader: impl Read, writer: impl Write) -> Result<(), DocumentError> {
    let document = load(reader)?;
    let responses = answer_document(&document)?;
    write(writer, &responses)
}
