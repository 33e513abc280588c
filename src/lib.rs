pub mod error;
pub mod io;
pub mod logging;
pub mod printer;
pub mod run;
pub mod sequence;
pub mod total;

pub use error::{Error, Result};
pub use io::ExitCode;
pub use sequence::{MAX_LENGTH, MAX_VALUE, Sequence};
