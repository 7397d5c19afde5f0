// src/constants.rs

// Some scanner firmwares match on the reply text, keep these verbatim.
pub const GREETING: &str = "220 Simple FTP Server Ready";
pub const USER_OKAY: &str = "331 User name okay, need password";
pub const LOGGED_IN: &str = "230 User logged in, proceed";
pub const SYSTEM_TYPE: &str = "215 UNIX Type: L8";
pub const TYPE_SET: &str = "200 Type set";
pub const DIRECTORY_CHANGED: &str = "250 Directory changed";
pub const OPENING_DATA_CONNECTION: &str = "150 Opening data connection";
pub const TRANSFER_COMPLETE: &str = "226 Transfer complete";
pub const CANT_OPEN_DATA_CONNECTION: &str = "425 Can't open data connection";
pub const TRANSFER_ABORTED: &str = "426 Connection closed; transfer aborted";
pub const UPLOAD_FAILED: &str = "550 Upload failed";
pub const STORAGE_EXCEEDED: &str = "552 Requested file action aborted. Exceeded storage allocation";
pub const RETRIEVAL_NOT_SUPPORTED: &str = "550 File retrieval not supported";
pub const DELETION_NOT_SUPPORTED: &str = "550 File deletion not supported";
pub const GOODBYE: &str = "221 Goodbye";
pub const OK: &str = "200 OK";
pub const UTF8_ENABLED: &str = "200 UTF8 mode enabled";
pub const PORT_SUCCESSFUL: &str = "200 PORT command successful";
pub const EPRT_SUCCESSFUL: &str = "200 EPRT command successful";
pub const SYNTAX_ERROR: &str = "501 Syntax error";
pub const NOT_IMPLEMENTED: &str = "502 Command not implemented";
pub const PROTOCOL_NOT_SUPPORTED: &str = "522 Network protocol not supported";

pub const FEATURES: &[&str] = &["UTF8"];

pub const DEFAULT_LISTEN_PORT: u16 = 2121;
pub const DEFAULT_PAPERLESS_URL: &str = "http://localhost:8000";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_DATA_TIMEOUT_SECS: u64 = 300;
pub const POST_DOCUMENT_PATH: &str = "/api/documents/post_document/";
pub const DOCUMENT_FIELD: &str = "document";

pub const MAX_COMMAND_LINE_LENGTH: u64 = 8 * 1024;
pub const UPLOAD_BUFFER_SIZE: usize = 64 * 1024;
pub const ACCEPT_BACKOFF_MILLIS: u64 = 100;
