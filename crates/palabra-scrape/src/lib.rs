pub mod fetch;
pub mod lookup;
pub mod normalize;
pub mod page;

pub use fetch::{FetchedPage, Fetcher};
pub use lookup::{Dictionary, BASE_URL};
