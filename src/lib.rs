//! # quadcode
//!
//! *Two entropy coders, one tiny alphabet, byte-exact streams.*
//!
//! ## Intuition First
//!
//! An entropy coder turns a sequence of symbols into close to
//! `H` bits per symbol, where `H` is the Shannon entropy of the source.
//! This crate implements two very different routes to that limit over the
//! fixed alphabet `{0, 1, 2, 3}` and makes them easy to compare:
//!
//! - **rANS** ([`rans`]): the whole sequence lives inside one 32-bit integer
//!   state that grows as symbols are pushed in; renormalization sheds bytes
//!   to keep the state bounded. One multiply/divide per symbol, stack-like
//!   stream, fractional bits for free.
//! - **Binarize + binary range coder** ([`binarize`], [`range`]): first map
//!   every symbol to a short codeword of binary decisions ("bins"), then
//!   let an arithmetic coder narrow an interval once per bin. This is the
//!   skeleton of CABAC from H.264/HEVC, with the adaptive context modeling
//!   deliberately removed — the model is a single pair of bin counts fitted
//!   to the whole sequence up front.
//!
//! The second route makes the cost of binarization visible: the
//! [`binarize::Scheme::Bad`] table assigns long codewords to frequent
//! symbols, and the reported rates show exactly how much that wastes even
//! under an optimal bin coder.
//!
//! ## The Components
//!
//! | Module | Role |
//! |---|---|
//! | [`rans`] | static-model rANS codec, frequencies normalized to 4096 |
//! | [`range`] | toy binary range coder with a static two-count model |
//! | [`binarize`] | Good/Bad prefix-code tables, symbol → bin expansion |
//! | [`bitio`] | LSB-first bit packing substrate |
//! | [`cabac`] | H.264 64-state probability ladder, for comparison only |
//! | [`source`], [`stats`] | seeded synthetic input and entropy reporting |
//!
//! Both codecs produce self-contained byte streams: the model parameters
//! travel in a fixed header, so decoding needs nothing but the stream.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon    Entropy as the fundamental limit
//! 1976  Rissanen   Arithmetic coding: optimal rate, bit-serial
//! 2003  H.264      CABAC: binarization + adaptive binary arithmetic coding
//! 2009  Duda       ANS: arithmetic-coding rates at Huffman-like speed
//! 2014  zstd/LZFSE ANS variants ship in production codecs
//! ```
//!
//! ## Failure Modes
//!
//! All errors are synchronous contract violations ([`Error`]): symbols
//! outside the alphabet, truncated streams, and headers whose model breaks
//! its invariants. There is no recovery path; a bad stream is undecodable.
//!
//! ## References
//!
//! - Duda, J. (2009). "Asymmetric numeral systems."
//! - Marpe, D., Schwarz, H., Wiegand, T. (2003). "Context-Based Adaptive
//!   Binary Arithmetic Coding in the H.264/AVC Video Compression Standard."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binarize;
pub mod bitio;
pub mod cabac;
pub mod error;
pub mod range;
pub mod rans;
pub mod source;
pub mod stats;

pub use binarize::{binarize_sequence, binarize_symbol, pack_bits, Scheme};
pub use bitio::{BitReader, BitWriter};
pub use error::{Error, Result};
