mod challenge;
mod operation;
mod progress;
mod user;

pub use challenge::{Challenge, Illustration, OPTION_COUNT, Operands};
pub use operation::{OperationKind, ParseOperationError};
pub use progress::{Progress, ProgressError, Stars};
pub use user::{User, UserError, normalize_username};
