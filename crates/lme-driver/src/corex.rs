//! COREX shadow-bank commit protocol.
//!
//! Shadow sets are filled through their bank windows, then committed to the
//! live register file on a trigger edge. All protocol state lives in the
//! direct window.

use crate::device::{LmeHw, TRY_COUNT};
use crate::error::{LmeError, Result};
use crate::mmio::RegisterIo;
use lme_chip::bank::{CorexSet, TriggerMode, UpdateType};
use lme_chip::regs;
use std::thread;
use std::time::Duration;

const COREX_POLL_DELAY: Duration = Duration::from_micros(1);

impl<R: RegisterIo> LmeHw<R> {
    /// Select what the next trigger does with the given set.
    ///
    /// The direct window is not shadowed, so its update type is forced to
    /// [`UpdateType::Ignore`] regardless of the argument.
    pub fn set_corex_update_type(&mut self, set: CorexSet, update: UpdateType) {
        let effective = if set.is_direct() { UpdateType::Ignore } else { update };
        self.write_field(CorexSet::Direct, regs::F_COREX_UPDATE_TYPE_0, effective as u32);
    }

    /// Bring the shadow-bank machinery up or down.
    ///
    /// Enabling arms set 0 as copy-on-trigger, hardware-triggered, multiset,
    /// then primes the shadow SRAM from the live registers and waits for the
    /// copy to finish. Disabling reverts to software triggering, drains any
    /// in-flight commit and clears the global enable.
    ///
    /// # Errors
    ///
    /// [`LmeError::Timeout`] if the copy engine never goes idle.
    pub fn init_corex(&mut self, enable: bool) -> Result<()> {
        if !enable {
            self.write_field(
                CorexSet::Direct,
                regs::F_COREX_UPDATE_MODE_0,
                TriggerMode::Software as u32,
            );
            self.wait_corex_idle()?;
            self.write_field(CorexSet::Direct, regs::F_COREX_ENABLE, 0x0);
            tracing::info!("corex disabled");
            return Ok(());
        }

        self.write_field(CorexSet::Direct, regs::F_COREX_UPDATE_TYPE_0, UpdateType::Copy as u32);
        self.write_field(CorexSet::Direct, regs::F_COREX_UPDATE_TYPE_1, UpdateType::Ignore as u32);
        self.write_field(
            CorexSet::Direct,
            regs::F_COREX_UPDATE_MODE_0,
            TriggerMode::Hardware as u32,
        );
        self.write_field(
            CorexSet::Direct,
            regs::F_COREX_UPDATE_MODE_1,
            TriggerMode::Hardware as u32,
        );
        self.write_field(CorexSet::Direct, regs::F_COREX_START_0, 0x0);
        self.write_field(CorexSet::Direct, regs::F_COREX_START_1, 0x0);
        self.write_field(CorexSet::Direct, regs::F_COREX_MULTISET_ENABLE, 0x1);
        self.write_field(CorexSet::Direct, regs::F_COREX_ENABLE, 0x1);

        // prime set 0 from the live register file
        self.write_field(CorexSet::Direct, regs::F_COREX_COPY_FROM_IP_0, 0x1);
        self.wait_corex_idle()?;

        tracing::info!("corex enabled");
        Ok(())
    }

    /// Issue the one software-triggered swap needed at stream start.
    ///
    /// No hardware trigger edge exists before streaming, so the first
    /// commit is pulsed by software; afterwards the trigger is handed back
    /// to hardware for per-frame swaps.
    ///
    /// # Errors
    ///
    /// [`LmeError::Timeout`] if the swap never completes.
    pub fn start_corex(&mut self, enable: bool) -> Result<()> {
        if !enable {
            return Ok(());
        }

        self.write_field(
            CorexSet::Direct,
            regs::F_COREX_UPDATE_MODE_0,
            TriggerMode::Software as u32,
        );
        self.write_field(CorexSet::Direct, regs::F_COREX_START_0, 0x1);
        self.wait_corex_idle()?;
        self.write_field(
            CorexSet::Direct,
            regs::F_COREX_UPDATE_MODE_0,
            TriggerMode::Hardware as u32,
        );

        tracing::info!("corex start done");
        Ok(())
    }

    /// Queue a set for the next multiset trigger.
    pub fn queue_corex_set(&mut self, set: CorexSet) {
        self.write_field(CorexSet::Direct, regs::F_CTRL_MS_ADD_TO_QUEUE, set as u32);
    }

    fn wait_corex_idle(&self) -> Result<()> {
        for _ in 0..TRY_COUNT {
            thread::sleep(COREX_POLL_DELAY);
            if self.read_field(CorexSet::Direct, regs::F_COREX_BUSY_0) == 0 {
                return Ok(());
            }
        }
        tracing::error!("corex never went idle");
        Err(LmeError::timeout("corex busy", TRY_COUNT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimRegisters;

    #[test]
    fn direct_set_forces_ignore_update() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.set_corex_update_type(CorexSet::Direct, UpdateType::Copy);
        assert_eq!(hw.read_reg(CorexSet::Direct, regs::COREX_UPDATE_TYPE_0), UpdateType::Ignore as u32);

        hw.set_corex_update_type(CorexSet::SetB, UpdateType::Copy);
        assert_eq!(hw.read_reg(CorexSet::Direct, regs::COREX_UPDATE_TYPE_0), UpdateType::Copy as u32);
    }

    #[test]
    fn init_enables_and_primes_set_zero() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.init_corex(true).unwrap();
        assert_eq!(hw.read_reg(CorexSet::Direct, regs::COREX_ENABLE), 1);
        assert_eq!(hw.read_reg(CorexSet::Direct, regs::COREX_MULTISET_ENABLE), 1);
        assert_eq!(hw.read_reg(CorexSet::Direct, regs::COREX_COPY_FROM_IP_0), 1);
    }

    #[test]
    fn disable_reverts_to_software_trigger() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.init_corex(true).unwrap();
        hw.init_corex(false).unwrap();
        assert_eq!(hw.read_reg(CorexSet::Direct, regs::COREX_ENABLE), 0);
        assert_eq!(
            hw.read_reg(CorexSet::Direct, regs::COREX_UPDATE_MODE_0),
            TriggerMode::Software as u32
        );
    }

    #[test]
    fn start_hands_trigger_back_to_hardware() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.init_corex(true).unwrap();
        hw.start_corex(true).unwrap();
        assert_eq!(
            hw.read_reg(CorexSet::Direct, regs::COREX_UPDATE_MODE_0),
            TriggerMode::Hardware as u32
        );
    }

    #[test]
    fn stuck_copy_engine_times_out() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.io().stick_corex_busy();
        assert!(matches!(
            hw.init_corex(true),
            Err(LmeError::Timeout { what: "corex busy", .. })
        ));
    }
}
