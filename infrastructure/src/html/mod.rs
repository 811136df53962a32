//! HTML adapter: turns page markup into quiz nodes and section links

mod parser;

pub use parser::ScraperPageParser;
