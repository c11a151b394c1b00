pub mod fields;
pub mod price;
pub mod relic;
pub mod reward;

pub use fields::*;
pub use price::*;
pub use relic::*;
pub use reward::*;
