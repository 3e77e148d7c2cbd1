pub mod configuration;
pub mod error;
pub mod identifiers;
pub mod layout;
pub mod pairing;
pub mod paths;

pub use configuration::{ConverterConfig, LayoutKind, PageConfig, PageSize};
pub use error::{AppError, PairError};
pub use identifiers::QuestionId;
pub use layout::{ImageSlot, PageElement, PagePlan, PairDimensions};
pub use pairing::{Discovery, FilePair, NamingRules};
