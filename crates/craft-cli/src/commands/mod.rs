pub mod ast;
pub mod check;
pub mod grammar;
pub mod info;
pub mod input;
pub mod node_types;
pub mod tokens;

#[cfg(test)]
mod input_tests;
