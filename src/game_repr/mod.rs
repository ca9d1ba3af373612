mod attacks;
mod board;
mod castling;
mod fen;
mod history;
mod moves;
mod piece;
mod position;
mod san;
mod setup;
mod square;
pub mod bitboards;
pub mod debug;

#[cfg(test)]
mod tests;

pub use attacks::*;
pub use bitboards::SquareSet;
pub use board::*;
pub use castling::*;
pub use fen::*;
pub use history::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use san::*;
pub use setup::*;
pub use square::*;
