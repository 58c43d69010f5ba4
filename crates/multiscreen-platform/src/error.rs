use multiscreen_core::Role;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("no {role} labelled `{label}` on screen")]
    NoSuchTarget { role: Role, label: String },
    #[error("unknown command `{line}` (try `help`)")]
    UnknownCommand { line: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
