use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    EmptyStore(String),
    MissingField(String),
    InvalidField(String),
    ParseCommand(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while reading input or writing output: {}", e)
            }
            AppError::EmptyStore(accessor) => {
                write!(f, "Cannot take {} of an empty contact list", accessor)
            }
            AppError::MissingField(field) => {
                write!(f, "Missing contact {}: field must not be blank", field)
            }
            AppError::InvalidField(field) => {
                write!(f, "Unrecognized sort field: '{}'", field)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
        }
    }
}
