//! Error types for LME control operations.

use lme_chip::dma::DmaChannel;
use thiserror::Error;

/// Result type alias for LME operations.
pub type Result<T> = std::result::Result<T, LmeError>;

/// Errors that can occur while driving the block.
#[derive(Debug, Error)]
pub enum LmeError {
    /// A bounded register poll ran out of retries.
    #[error("timeout waiting for {what} after {retries} polls")]
    Timeout {
        /// What was being polled.
        what: &'static str,
        /// Retry bound that was exhausted.
        retries: u32,
    },

    /// A raw DMA channel ID did not decode.
    #[error("invalid DMA channel id {id}")]
    InvalidDmaChannel {
        /// Offending raw value.
        id: u32,
    },

    /// A raw COREX set selector did not decode.
    #[error("invalid COREX set id {id}")]
    InvalidCorexSet {
        /// Offending raw value.
        id: u32,
    },

    /// A channel was passed to an operation that does not serve it.
    #[error("channel {channel:?} is not valid for {op}")]
    UnsupportedChannel {
        /// Channel that was rejected.
        channel: DmaChannel,
        /// Operation that rejected it.
        op: &'static str,
    },

    /// The mapped register window is smaller than the register map.
    #[error("register window too small: {size:#x} bytes, need {required:#x}")]
    WindowTooSmall {
        /// Size of the file that was mapped.
        size: usize,
        /// Minimum size the map requires.
        required: usize,
    },

    /// I/O error while opening or mapping the register window.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying error.
        #[from]
        source: std::io::Error,
    },
}

impl LmeError {
    /// Create a timeout error.
    pub const fn timeout(what: &'static str, retries: u32) -> Self {
        Self::Timeout { what, retries }
    }

    /// Create an unsupported-channel error.
    pub const fn unsupported(channel: DmaChannel, op: &'static str) -> Self {
        Self::UnsupportedChannel { channel, op }
    }
}
