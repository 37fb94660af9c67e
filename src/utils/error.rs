use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("System error: {0}")]
    System(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

pub fn report_error(err: &AppError) {
    match err {
        AppError::Config(msg) => {
            eprintln!("⚙️  {}", OutputStyle::error(&format!("Config: {}", msg)));
        }
        AppError::Server(msg) => {
            eprintln!("🌐 {}", OutputStyle::error(&format!("Server: {}", msg)));
        }
        AppError::Render(msg) | AppError::System(msg) | AppError::Io(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}
