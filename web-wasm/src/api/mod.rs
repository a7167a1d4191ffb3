mod cases;

pub use cases::{FetchSource, CASES_URL};
