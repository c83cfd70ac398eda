mod error;
mod resolve_addresses;

#[cfg(test)]
pub mod tests;

pub use self::{error::Error, resolve_addresses::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::entities::*;
}
