pub mod fs;

pub use fs::{expand_home, normalize, tilde_home};

#[cfg(test)]
mod tests;
