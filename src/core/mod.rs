pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{AddressBook, PrintResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Sink, Storage};
pub use crate::utils::error::Result;
