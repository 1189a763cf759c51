pub mod error;
pub mod protocol;
pub mod util;

pub use error::UtilError;
pub use util::{double, format_message};
