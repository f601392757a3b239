pub mod limit;
pub mod notices;
pub mod pages;
pub mod parse;
