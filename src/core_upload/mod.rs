pub mod error;
pub mod paperless;
pub mod sink;

pub use paperless::PaperlessSink;
pub use sink::UploadSink;
