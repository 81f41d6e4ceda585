pub mod massey;

pub use massey::MasseyScraper;
