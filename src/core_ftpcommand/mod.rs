// Here's the list of the FTP commands implemented
pub mod cwd;
pub mod dele;
pub mod feat;
pub mod handlers;
pub mod list;
pub mod noop;
pub mod opts;
pub mod pass;
pub mod pwd;
pub mod quit;
pub mod retr;
pub mod stor;
pub mod syst;
pub mod type_;
pub mod user;

// Parsing and the errors it can raise
pub mod error;
pub mod ftpcommand;
