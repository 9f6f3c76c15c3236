// Profile → markdown. `date` formats partial dates, `markdown` lays out sections.

pub mod date;
pub mod markdown;

pub use markdown::render;
