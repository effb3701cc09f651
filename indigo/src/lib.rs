pub use cards::*;
pub use deck::*;
pub use errors::*;
pub use player::*;
pub use strategy::*;
pub use table::*;

#[cfg(test)]
mod arbitrary;
mod cards;
mod deck;
mod errors;
mod player;
mod strategy;
mod table;
mod utils;
