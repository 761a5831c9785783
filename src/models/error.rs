use std::fmt;

#[derive(Debug)]
pub enum Error {
    ParserError(String),
    IoError(std::io::Error),
    CsvError(csv::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::CsvError(err) => write!(f, "CSV Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ParserError(_) => None,
            Error::IoError(err) => Some(err),
            Error::CsvError(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::CsvError(err)
    }
}
