//! Token generation for Genid.
//!
//! A token is a fixed-length string sampled uniformly, with replacement, from
//! a 62-symbol alphanumeric alphabet. The generator owns its random source so
//! tests can swap in a deterministic one.

use std::fmt;

use rand::distributions::Uniform;
use rand::rngs::ThreadRng;
use rand::{Rng, thread_rng};

/// Symbols a token may contain.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Number of characters in every token.
pub const TOKEN_LEN: usize = 16;

/// A generated id. Only [`TokenGenerator`] can build one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Produces [`Token`]s from an owned random source.
#[derive(Debug)]
pub struct TokenGenerator<R> {
    rng: R,
    pool: Vec<char>,
    dist: Uniform<usize>,
}

impl TokenGenerator<ThreadRng> {
    /// Generator backed by the thread-local RNG.
    pub fn new() -> Self {
        Self::with_rng(thread_rng())
    }
}

impl Default for TokenGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TokenGenerator<R> {
    /// Generator drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        let pool: Vec<char> = ALPHABET.chars().collect();
        let dist = Uniform::from(0..pool.len());
        Self { rng, pool, dist }
    }

    /// Sample a fresh token of [`TOKEN_LEN`] characters.
    pub fn generate(&mut self) -> Token {
        let token = (0..TOKEN_LEN)
            .map(|_| self.pool[self.rng.sample(self.dist)])
            .collect();
        Token(token)
    }
}
