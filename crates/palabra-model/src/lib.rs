pub mod profile;
pub mod result;
pub mod selectors;

pub use profile::*;
pub use result::*;
pub use selectors::*;
