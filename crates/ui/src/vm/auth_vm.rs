use math_core::narration;

/// Which form the auth screen shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in",
            AuthMode::Register => "Create account",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Play!",
            AuthMode::Register => "Create and play!",
        }
    }

    #[must_use]
    pub fn switch_label(self) -> &'static str {
        match self {
            AuthMode::Login => "No account yet? Create one now!",
            AuthMode::Register => "Already have an account? Sign in here!",
        }
    }

    /// Greeting spoken after a successful submit.
    #[must_use]
    pub fn greeting(self, username: &str) -> String {
        match self {
            AuthMode::Login => narration::welcome_back(username),
            AuthMode::Register => narration::welcome_new(username),
        }
    }
}
