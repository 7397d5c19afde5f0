use crate::core_ftpcommand::error::CommandError;
use std::fmt;

/// Where the server dials out to in active mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataEndpoint {
    host: String,
    port: u16,
}

impl DataEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Port 0 or an empty host can be negotiated but never dialed.
    pub fn is_dialable(&self) -> bool {
        !self.host.is_empty() && self.port > 0
    }
}

impl fmt::Display for DataEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Parses a PORT argument, `h1,h2,h3,h4,p1,p2`.
///
/// Every field must be a decimal byte. The host is the first four fields joined
/// with dots and the port is `p1 * 256 + p2`.
pub fn parse_port_argument(arg: &str) -> Result<DataEndpoint, CommandError> {
    let malformed = || CommandError::MalformedAddress(arg.to_string());

    let fields: Vec<&str> = arg.split(',').collect();
    if fields.len() != 6 {
        return Err(malformed());
    }

    let bytes = fields
        .iter()
        .map(|field| field.trim().parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| malformed())?;

    let host = format!("{}.{}.{}.{}", bytes[0], bytes[1], bytes[2], bytes[3]);
    let port = u16::from(bytes[4]) << 8 | u16::from(bytes[5]);

    Ok(DataEndpoint::new(host, port))
}

/// Parses an EPRT argument, `|proto|address|port|`.
///
/// Only protocol tags `1` (IPv4) and `2` (IPv6) are accepted. The address is
/// kept verbatim.
pub fn parse_eprt_argument(arg: &str) -> Result<DataEndpoint, CommandError> {
    let malformed = || CommandError::MalformedAddress(arg.to_string());

    let fields: Vec<&str> = arg.split('|').collect();
    if fields.len() < 4 {
        return Err(malformed());
    }

    let protocol = fields[1];
    if protocol != "1" && protocol != "2" {
        return Err(CommandError::UnsupportedProtocol(protocol.to_string()));
    }

    let port = fields[3].parse::<u16>().map_err(|_| malformed())?;

    Ok(DataEndpoint::new(fields[2], port))
}
