use crate::core_ftpcommand::error::CommandError;
use std::str::FromStr;

#[derive(Eq, Hash, PartialEq, Debug, Clone, Copy)]
pub enum FtpCommand {
    USER,
    PASS,
    SYST,
    TYPE,
    PWD,
    CWD,
    PASV,
    LIST,
    STOR,
    RETR,
    DELE,
    QUIT,
    NOOP,
    FEAT,
    OPTS,
    PORT,
    EPRT,
}

impl FromStr for FtpCommand {
    type Err = CommandError;

    fn from_str(cmd: &str) -> Result<Self, Self::Err> {
        match cmd.to_ascii_uppercase().as_str() {
            "USER" => Ok(FtpCommand::USER),
            "PASS" => Ok(FtpCommand::PASS),
            "SYST" => Ok(FtpCommand::SYST),
            "TYPE" => Ok(FtpCommand::TYPE),
            "PWD" => Ok(FtpCommand::PWD),
            "CWD" => Ok(FtpCommand::CWD),
            "PASV" => Ok(FtpCommand::PASV),
            "LIST" => Ok(FtpCommand::LIST),
            "STOR" => Ok(FtpCommand::STOR),
            "RETR" => Ok(FtpCommand::RETR),
            "DELE" => Ok(FtpCommand::DELE),
            "QUIT" => Ok(FtpCommand::QUIT),
            "NOOP" => Ok(FtpCommand::NOOP),
            "FEAT" => Ok(FtpCommand::FEAT),
            "OPTS" => Ok(FtpCommand::OPTS),
            "PORT" => Ok(FtpCommand::PORT),
            "EPRT" => Ok(FtpCommand::EPRT),
            other => Err(CommandError::Unrecognized(other.to_string())),
        }
    }
}

/// One parsed control line: the uppercased verb and its arguments, case preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    verb: String,
    args: Vec<String>,
    argument: Option<String>,
}

impl Command {
    /// Splits a line on whitespace. Returns `None` for a blank line, which the
    /// caller skips without replying.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        let mut parts = line.split_whitespace();
        let verb = parts.next()?.to_ascii_uppercase();
        let args = parts.map(str::to_string).collect();
        let argument = line
            .split_once(char::is_whitespace)
            .map(|(_, rest)| rest.trim_start().to_string())
            .filter(|rest| !rest.is_empty());
        Some(Command {
            verb,
            args,
            argument,
        })
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Everything after the verb, inner whitespace kept as sent.
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    pub fn kind(&self) -> Result<FtpCommand, CommandError> {
        self.verb.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verb_and_args() {
        let command = Command::parse("stor Scan 001.PDF").unwrap();
        assert_eq!(command.verb(), "STOR");
        assert_eq!(command.args(), ["Scan", "001.PDF"]);
        assert_eq!(command.argument(), Some("Scan 001.PDF"));
        assert_eq!(command.kind(), Ok(FtpCommand::STOR));
    }

    #[test]
    fn test_parse_blank_lines() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   \t "), None);
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let command = Command::parse("  PORT   127,0,0,1,7,209  ").unwrap();
        assert_eq!(command.verb(), "PORT");
        assert_eq!(command.args(), ["127,0,0,1,7,209"]);
    }

    #[test]
    fn test_argument_keeps_inner_whitespace() {
        let command = Command::parse("  STOR   Invoice  2024\t03.pdf  ").unwrap();
        assert_eq!(command.args(), ["Invoice", "2024", "03.pdf"]);
        assert_eq!(command.argument(), Some("Invoice  2024\t03.pdf"));

        let command = Command::parse("CWD \t ").unwrap();
        assert_eq!(command.argument(), None);
    }

    #[test]
    fn test_parse_without_args() {
        let command = Command::parse("Noop").unwrap();
        assert_eq!(command.kind(), Ok(FtpCommand::NOOP));
        assert!(command.args().is_empty());
        assert_eq!(command.argument(), None);
    }

    #[test]
    fn test_unknown_verb() {
        let command = Command::parse("XMKD dir").unwrap();
        assert_eq!(
            command.kind(),
            Err(CommandError::Unrecognized("XMKD".to_string()))
        );
    }
}
