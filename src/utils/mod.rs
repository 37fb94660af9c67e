pub mod browser;
pub mod error;
pub mod format;
pub mod interactive;
pub mod output;

pub use browser::open_browser;
pub use error::{AppError, AppResult, report_error};
pub use interactive::prompt_yes_no;
pub use output::{OutputStyle, print_info, print_success, print_warning};
