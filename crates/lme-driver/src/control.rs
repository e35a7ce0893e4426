//! Reset, clock gating and idle waiting.

use crate::device::{LmeHw, TRY_COUNT};
use crate::error::{LmeError, Result};
use crate::mmio::RegisterIo;
use lme_chip::bank::CorexSet;
use lme_chip::regs;
use std::thread;
use std::time::Duration;

/// Delay between idleness polls.
const IDLE_POLL_DELAY: Duration = Duration::from_micros(3);

impl<R: RegisterIo> LmeHw<R> {
    /// Software-reset the block and wait for the reset bit to clear.
    ///
    /// Returns the number of polls consumed. The wait is bounded by
    /// [`TRY_COUNT`] like every other poll here; a block that never comes
    /// back is reported instead of spun on.
    ///
    /// # Errors
    ///
    /// [`LmeError::Timeout`] if the bit is still set after the bound.
    pub fn reset(&mut self) -> Result<u32> {
        self.write_reg(CorexSet::Direct, regs::SW_RESET, 0x1);

        for polls in 0..TRY_COUNT {
            if self.read_reg(CorexSet::Direct, regs::SW_RESET) == 0 {
                tracing::info!("reset done ({polls} polls)");
                return Ok(polls);
            }
        }

        Err(LmeError::timeout("software reset", TRY_COUNT))
    }

    /// Gate or ungate the block clock.
    pub fn set_clock(&mut self, on: bool) {
        tracing::debug!("clock {}", if on { "on" } else { "off" });
        self.write_field(CorexSet::Direct, regs::F_IP_PROCESSING, u32::from(on));
    }

    /// Wait for the block to go idle before disabling it.
    ///
    /// Polls the idleness flag with a short delay, bounded by [`TRY_COUNT`].
    /// On timeout the whole register map is dumped for diagnostics.
    ///
    /// # Errors
    ///
    /// [`LmeError::Timeout`] if the block never reports idle.
    pub fn wait_idle(&mut self, set: CorexSet) -> Result<()> {
        let idle = self.read_field(CorexSet::Direct, regs::F_IDLENESS_STATUS);
        let int1 = self.read_reg(set, regs::CONTINT_INT1_STATUS);
        tracing::info!("idle status before disable (idle: {idle}, int1: {int1:#x})");

        let mut polls = 0;
        while self.read_field(CorexSet::Direct, regs::F_IDLENESS_STATUS) == 0 {
            polls += 1;
            if polls >= TRY_COUNT {
                tracing::error!("timeout waiting for idle");
                self.dump(CorexSet::Direct);
                return Err(LmeError::timeout("idleness", TRY_COUNT));
            }
            thread::sleep(IDLE_POLL_DELAY);
        }

        let int1 = self.read_reg(set, regs::CONTINT_INT1_STATUS);
        tracing::info!("idle status after disable (int1: {int1:#x})");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimRegisters;

    #[test]
    fn reset_counts_polls() {
        let mut hw = LmeHw::new(SimRegisters::new());
        // sim clears the bit after two reads
        assert_eq!(hw.reset().unwrap(), 2);
    }

    #[test]
    fn reset_times_out_when_bit_sticks() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.io().stick_reset();
        assert!(matches!(
            hw.reset(),
            Err(LmeError::Timeout { what: "software reset", retries: TRY_COUNT })
        ));
    }

    #[test]
    fn wait_idle_returns_once_idle_observed() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.io().hold_busy_for(3);
        hw.wait_idle(CorexSet::SetA).unwrap();
    }

    #[test]
    fn wait_idle_times_out_after_exactly_the_bound() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.io().stick_busy();
        let before = hw.io().idle_polls();
        let err = hw.wait_idle(CorexSet::SetA).unwrap_err();
        assert!(matches!(err, LmeError::Timeout { what: "idleness", .. }));
        // one pre-loop status read plus TRY_COUNT failed loop reads
        assert_eq!(hw.io().idle_polls() - before, TRY_COUNT + 1);
    }

    #[test]
    fn clock_toggles_single_bit() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.set_clock(true);
        assert_eq!(hw.read_reg(CorexSet::Direct, regs::IP_PROCESSING), 1);
        hw.set_clock(false);
        assert_eq!(hw.read_reg(CorexSet::Direct, regs::IP_PROCESSING), 0);
    }
}
