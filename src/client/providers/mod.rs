pub mod helpers;
pub mod indeed;
pub mod traits;

pub use helpers::{parse_attribute_defaults, parse_location};
pub use indeed::IndeedProvider;
pub use traits::{JobProvider, ProviderError, RawRecord};
