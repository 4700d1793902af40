pub mod charset;
pub mod html;

#[cfg(test)]
mod tests;

pub use html::parse_page;
