pub mod hex;

#[cfg(link_layer)]
mod unix;

#[cfg(link_layer)]
pub use unix::*;
