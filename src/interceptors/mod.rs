pub mod error;
pub mod formatter;
pub mod response;
pub mod sink;
pub mod status;

pub use error::{AppError, ErrorCode};
pub use formatter::{EnvelopeFormatter, ResponseFormatter};
pub use response::{ApiError, ApiSuccess, ErrorDetail, Page};
pub use sink::{ResponseSink, ResponseSlot};
pub use status::{OutcomeKind, StatusPolicy};
