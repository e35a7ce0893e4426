//! Caller-owned per-frame parameters.
//!
//! The pipeline layer owns one of these per frame and re-submits it on
//! every geometry or address change; the driver only reads it.

use crate::error::{LmeError, Result};
use lme_chip::bank::CorexSet;
use lme_chip::dma::DmaChannel;

/// Decode a raw DMA channel ID from the pipeline's parameter interface.
///
/// # Errors
///
/// [`LmeError::InvalidDmaChannel`] for IDs outside the channel table.
pub fn dma_channel_from_raw(id: u32) -> Result<DmaChannel> {
    DmaChannel::from_raw(id).ok_or(LmeError::InvalidDmaChannel { id })
}

/// Decode a raw COREX set selector.
///
/// # Errors
///
/// [`LmeError::InvalidCorexSet`] for selectors outside the bank table.
pub fn corex_set_from_raw(id: u32) -> Result<CorexSet> {
    CorexSet::from_raw(id).ok_or(LmeError::InvalidCorexSet { id })
}

/// Operating mode of the motion estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LmeMode {
    /// Frame fusion.
    Fusion,
    /// Temporal noise reduction.
    Tnr,
}

/// Frame geometry and DMA target addresses for one frame.
///
/// Addresses are 32-bit device addresses as programmed into the DMA client
/// base-address registers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameParams {
    /// Current input frame width in pixels.
    pub cur_input_width: u32,
    /// Current input frame height in pixels.
    pub cur_input_height: u32,
    /// Output plane width in pixels.
    pub output_width: u32,
    /// Output plane height in pixels.
    pub output_height: u32,

    /// Motion vector output plane base.
    pub mv_out_addr: u32,
    /// SAD output plane base.
    pub sad_out_addr: u32,
    /// MBMV buffer 0 base (double-buffer pair with `mbmv1_addr`).
    pub mbmv0_addr: u32,
    /// MBMV buffer 1 base.
    pub mbmv1_addr: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_channel_ids_decode_or_fail() {
        assert_eq!(dma_channel_from_raw(3).unwrap(), DmaChannel::MvOut);
        assert!(matches!(
            dma_channel_from_raw(9),
            Err(LmeError::InvalidDmaChannel { id: 9 })
        ));
    }

    #[test]
    fn raw_set_ids_decode_or_fail() {
        assert_eq!(corex_set_from_raw(1).unwrap(), CorexSet::SetB);
        assert!(matches!(
            corex_set_from_raw(7),
            Err(LmeError::InvalidCorexSet { id: 7 })
        ));
    }
}
