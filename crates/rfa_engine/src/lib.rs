//! RFantibody engine: settings, multipart encoding and the HTTP submission client.
mod client;
mod encode;
mod files;
mod settings;
mod transport;

pub use client::{system_clock, Clock, SubmissionClient};
pub use encode::{encode, FilePart, MultipartBody, TextPart};
pub use files::{has_structure_extension, read_structure_file, FileError};
pub use settings::{
    ClientSettings, SettingsError, API_BASE_ENV, API_ORIGIN_ENV, DEFAULT_API_BASE,
    DEFAULT_API_ORIGIN, PIPELINE_PATH, REQUEST_TIMEOUT_ENV,
};
pub use transport::{PipelineTransport, ReqwestTransport};
