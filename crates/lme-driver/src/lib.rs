//! Userspace control API for the LME (local motion estimation) block of the
//! Exynos camera ISP.
//!
//! The pipeline-control layer drives one [`LmeHw`] instance per hardware
//! block in a fixed order: reset, clock on, core config, DMA client config,
//! address programming, COREX commit, start; then it queries interrupt
//! state after every frame. All operations are synchronous; the only waits
//! are bounded register polls.
//!
//! Register access goes through the [`mmio::RegisterIo`] seam. Production
//! code maps the block's register window with [`mmio::MappedRegion`];
//! tests and CI use the simulated register file in [`sim`].
//!
//! # Quick start
//!
//! ```
//! use lme_driver::prelude::*;
//! use lme_driver::sim::SimRegisters;
//!
//! # fn main() -> lme_driver::Result<()> {
//! let mut hw = LmeHw::new(SimRegisters::new());
//!
//! hw.reset()?;
//! hw.set_clock(true);
//! hw.configure_core(CorexSet::SetA);
//! hw.configure_cache(CorexSet::SetA);
//! hw.configure_mvct(CorexSet::SetA);
//! hw.set_mvct_size(CorexSet::SetA, 1920, 1080);
//!
//! let params = FrameParams {
//!     cur_input_width: 1920,
//!     cur_input_height: 1080,
//!     output_width: 1920,
//!     output_height: 1080,
//!     ..FrameParams::default()
//! };
//! hw.configure_wdma(CorexSet::SetA, &params, DmaChannel::MvOut, true)?;
//! hw.set_wdma_addr(CorexSet::SetA, &params, DmaChannel::MvOut, LmeMode::Tnr)?;
//!
//! hw.init_corex(true)?;
//! hw.start_corex(true)?;
//! # Ok(())
//! # }
//! ```
//!
//! Concurrent calls against one instance are not supported; the caller
//! serializes access exactly as it would around the raw register file.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod blocks;
mod control;
mod core;
mod corex;
mod device;
mod dma;
mod error;
mod irq;
pub mod mmio;
mod params;
pub mod sim;

/// Silicon model re-export: register tables, bank windows, DMA constants.
pub use lme_chip as chip;

pub use device::{LmeHw, TRY_COUNT};
pub use error::{LmeError, Result};
pub use irq::InterruptState;
pub use lme_chip::bank::{CorexSet, TriggerMode, UpdateType};
pub use lme_chip::dma::DmaChannel;
pub use lme_chip::int::LmeEvent;
pub use mmio::{MappedRegion, RegisterIo};
pub use params::{corex_set_from_raw, dma_channel_from_raw, FrameParams, LmeMode};

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        CorexSet, DmaChannel, FrameParams, InterruptState, LmeError, LmeEvent, LmeHw, LmeMode,
        Result, TriggerMode, UpdateType,
    };
}
