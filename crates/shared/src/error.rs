#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("invalid value for `{name}`: {value:?}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("forbidden")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("already exists")]
    Conflict,

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl Error {
    /// Maps a unique constraint rejection from the store to [`Error::Conflict`],
    /// every other store error passes through untouched.
    pub fn from_insert(value: sqlx::Error) -> Self {
        let is_unique_violation = value
            .as_database_error()
            .is_some_and(|e| e.is_unique_violation());

        if is_unique_violation {
            Self::Conflict
        } else {
            value.into()
        }
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}
