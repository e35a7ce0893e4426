//! Simulated register file.
//!
//! Stands in for the hardware behind [`RegisterIo`] so the whole operation
//! surface, including the timeout paths, runs in CI without silicon. Only
//! the behaviors the driver polls or latches are modelled:
//!
//! - the software reset bit self-clears after a configurable number of reads
//! - the idleness flag can be held busy for N polls, or forever
//! - the COREX busy flag rises on a copy/start trigger and self-clears
//! - the INT1 latch is shared across bank windows and write-1-to-clear
//!
//! Everything else is plain storage, so shadow-bank windows hold independent
//! values exactly like the real register file.

use crate::mmio::RegisterIo;
use lme_chip::bank::BANK_STRIDE;
use lme_chip::regs;
use std::cell::{Cell, RefCell};

const DEFAULT_LATENCY: u32 = 2;

/// In-memory register window with the block's poll/latch behaviors.
#[derive(Debug)]
pub struct SimRegisters {
    words: RefCell<Vec<u32>>,

    reset_polls_left: Cell<u32>,
    reset_stuck: Cell<bool>,

    busy_polls_left: Cell<u32>,
    idle_stuck: Cell<bool>,
    idle_polls: Cell<u32>,

    corex_polls_left: Cell<u32>,
    corex_stuck: Cell<bool>,

    irq: Cell<u32>,
}

impl Default for SimRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl SimRegisters {
    /// Create a zeroed register window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: RefCell::new(vec![0; <Self as RegisterIo>::span() / 4]),
            reset_polls_left: Cell::new(0),
            reset_stuck: Cell::new(false),
            busy_polls_left: Cell::new(0),
            idle_stuck: Cell::new(false),
            idle_polls: Cell::new(0),
            corex_polls_left: Cell::new(0),
            corex_stuck: Cell::new(false),
            irq: Cell::new(0),
        }
    }

    /// Hold the reset bit set forever.
    pub fn stick_reset(&self) {
        self.reset_stuck.set(true);
    }

    /// Report busy for the next `polls` idleness reads.
    pub fn hold_busy_for(&self, polls: u32) {
        self.busy_polls_left.set(polls);
    }

    /// Report busy on every idleness read.
    pub fn stick_busy(&self) {
        self.idle_stuck.set(true);
    }

    /// Hold the COREX busy flag set forever.
    pub fn stick_corex_busy(&self) {
        self.corex_stuck.set(true);
    }

    /// Latch interrupt sources, as the hardware would on an event.
    pub fn raise_irq(&self, mask: u32) {
        self.irq.set(self.irq.get() | mask);
    }

    /// Current INT1 latch.
    #[must_use]
    pub fn irq(&self) -> u32 {
        self.irq.get()
    }

    /// Number of idleness reads performed so far.
    #[must_use]
    pub fn idle_polls(&self) -> u32 {
        self.idle_polls.get()
    }
}

impl RegisterIo for SimRegisters {
    fn read(&self, offset: u32) -> u32 {
        match offset % BANK_STRIDE {
            rel if rel == regs::SW_RESET.offset => {
                if self.reset_stuck.get() {
                    return 1;
                }
                let left = self.reset_polls_left.get();
                if left > 0 {
                    self.reset_polls_left.set(left - 1);
                    return 1;
                }
                0
            }
            rel if rel == regs::IDLENESS_STATUS.offset => {
                self.idle_polls.set(self.idle_polls.get() + 1);
                if self.idle_stuck.get() {
                    return 0;
                }
                let left = self.busy_polls_left.get();
                if left > 0 {
                    self.busy_polls_left.set(left - 1);
                    return 0;
                }
                1
            }
            rel if rel == regs::COREX_STATUS_0.offset => {
                if self.corex_stuck.get() {
                    return 1;
                }
                let left = self.corex_polls_left.get();
                if left > 0 {
                    self.corex_polls_left.set(left - 1);
                    return 1;
                }
                0
            }
            rel if rel == regs::CONTINT_INT1.offset
                || rel == regs::CONTINT_INT1_STATUS.offset =>
            {
                self.irq.get()
            }
            _ => self.words.borrow()[offset as usize / 4],
        }
    }

    fn write(&mut self, offset: u32, value: u32) {
        match offset % BANK_STRIDE {
            rel if rel == regs::SW_RESET.offset => {
                if value & 1 == 1 {
                    self.reset_polls_left.set(DEFAULT_LATENCY);
                }
            }
            rel if rel == regs::COREX_COPY_FROM_IP_0.offset
                || rel == regs::COREX_START_0.offset =>
            {
                if value & 1 == 1 {
                    self.corex_polls_left.set(DEFAULT_LATENCY);
                }
                self.words.borrow_mut()[offset as usize / 4] = value;
            }
            rel if rel == regs::CONTINT_INT1_CLEAR.offset => {
                self.irq.set(self.irq.get() & !value);
            }
            _ => self.words.borrow_mut()[offset as usize / 4] = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lme_chip::bank::CorexSet;

    fn direct(reg: lme_chip::regs::Reg) -> u32 {
        CorexSet::Direct.window() + reg.offset
    }

    #[test]
    fn reset_self_clears_after_latency() {
        let mut sim = SimRegisters::new();
        sim.write(direct(regs::SW_RESET), 1);
        assert_eq!(sim.read(direct(regs::SW_RESET)), 1);
        assert_eq!(sim.read(direct(regs::SW_RESET)), 1);
        assert_eq!(sim.read(direct(regs::SW_RESET)), 0);
    }

    #[test]
    fn bank_windows_store_independently() {
        let mut sim = SimRegisters::new();
        let reg = regs::MVCT_MV_SR;
        sim.write(CorexSet::SetA.window() + reg.offset, 0x11);
        sim.write(CorexSet::SetB.window() + reg.offset, 0x22);
        assert_eq!(sim.read(CorexSet::SetA.window() + reg.offset), 0x11);
        assert_eq!(sim.read(CorexSet::SetB.window() + reg.offset), 0x22);
        assert_eq!(sim.read(direct(reg)), 0);
    }

    #[test]
    fn irq_latch_is_write_one_to_clear() {
        let mut sim = SimRegisters::new();
        sim.raise_irq(0b1011);
        assert_eq!(sim.read(direct(regs::CONTINT_INT1)), 0b1011);
        sim.write(direct(regs::CONTINT_INT1_CLEAR), 0b0011);
        assert_eq!(sim.read(direct(regs::CONTINT_INT1)), 0b1000);
    }

    #[test]
    fn corex_busy_rises_on_trigger() {
        let mut sim = SimRegisters::new();
        assert_eq!(sim.read(direct(regs::COREX_STATUS_0)), 0);
        sim.write(direct(regs::COREX_COPY_FROM_IP_0), 1);
        assert_eq!(sim.read(direct(regs::COREX_STATUS_0)), 1);
        assert_eq!(sim.read(direct(regs::COREX_STATUS_0)), 1);
        assert_eq!(sim.read(direct(regs::COREX_STATUS_0)), 0);
    }
}
