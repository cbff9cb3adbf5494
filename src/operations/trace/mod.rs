mod cable_trace;

pub use cable_trace::TraceCable;
