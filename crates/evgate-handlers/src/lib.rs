// NOTE: evgate handler architecture
//
// Why envelopes instead of Result?
// - Every outcome of handling an event, including malformed input, is a
//   well-formed response the caller can serialize. A Rust-level error here
//   would force the runner to invent an envelope of its own; instead the
//   dispatcher is total over arbitrary JSON values and never panics.
//
// Why fail-accumulate (not fail-fast)?
// - A rejected event reports every violated rule at once, so a caller can
//   fix a payload in one round trip. Each field check appends to the error
//   list and validation keeps going.

// Field extraction with error accumulation
mod fields;

// Per-kind validators/normalizers
pub mod payment;
pub mod signup;
pub mod upload;

// Event type dispatch
pub mod dispatch;

pub use dispatch::handle;
