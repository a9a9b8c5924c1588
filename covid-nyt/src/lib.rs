pub mod case;
pub mod county;
pub mod mask_use;
mod parse;
pub mod source;
pub mod state;

pub use parse::parse_fips;
