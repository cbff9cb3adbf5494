mod cable_length;

pub use cable_length::CableLength;
