pub mod escape_time;
pub mod precision;

pub use escape_time::{EscapeTimeKernel, EscapeTimeKernelConstructorError, EscapeTimeKernelError};
pub use precision::Precision;
