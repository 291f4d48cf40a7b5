use services::AuthError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    EmptyName,
    UsernameTaken,
    InvalidCredentials,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::EmptyName => "Please type a player name.",
            ViewError::UsernameTaken => "This player name already exists.",
            ViewError::InvalidCredentials => "Invalid player name or password.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&AuthError> for ViewError {
    fn from(err: &AuthError) -> Self {
        match err {
            AuthError::EmptyUsername => ViewError::EmptyName,
            AuthError::UsernameTaken => ViewError::UsernameTaken,
            AuthError::InvalidCredentials => ViewError::InvalidCredentials,
            _ => ViewError::Unknown,
        }
    }
}
