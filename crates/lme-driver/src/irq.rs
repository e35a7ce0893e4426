//! Interrupt state query and decoding.

use crate::device::LmeHw;
use crate::mmio::RegisterIo;
use lme_chip::bank::CorexSet;
use lme_chip::int::{LmeEvent, ERR_MASK};
use lme_chip::regs;

/// Snapshot of the INT1 latch taken by [`LmeHw::interrupt_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptState {
    /// Raw latch value at the time of the read.
    pub raw: u32,
    /// Error subset of `raw`.
    pub errors: u32,
}

impl InterruptState {
    /// Raw and error bits combined, what the frame handler dispatches on.
    #[must_use]
    pub const fn pending(self) -> u32 {
        self.raw | self.errors
    }

    /// Bits of `raw` belonging to one event category.
    #[must_use]
    pub const fn occurred(self, event: LmeEvent) -> u32 {
        self.raw & event.mask()
    }

    /// True if any source of the category is latched.
    #[must_use]
    pub const fn has(self, event: LmeEvent) -> bool {
        self.occurred(event) != 0
    }
}

impl<R: RegisterIo> LmeHw<R> {
    /// Read the per-frame interrupt latch, optionally acknowledging it.
    ///
    /// With `clear`, the raw value is written back to the write-1-to-clear
    /// register so a following query sees only new events.
    pub fn interrupt_state(&mut self, set: CorexSet, clear: bool) -> InterruptState {
        let raw = self.read_reg(set, regs::CONTINT_INT1);
        tracing::debug!("int1 {raw:#x}");

        if clear {
            self.write_reg(set, regs::CONTINT_INT1_CLEAR, raw);
        }

        InterruptState { raw, errors: raw & ERR_MASK }
    }

    /// Currently enabled INT1 sources.
    pub fn interrupt_mask(&self) -> u32 {
        self.read_reg(CorexSet::Direct, regs::CONTINT_INT1_ENABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimRegisters;
    use lme_chip::int;

    #[test]
    fn query_splits_errors_from_frame_events() {
        let mut hw = LmeHw::new(SimRegisters::new());
        let mask = LmeEvent::FrameEnd.mask() | (1 << int::BIT_ERR_AXI);
        hw.io().raise_irq(mask);

        let state = hw.interrupt_state(CorexSet::SetA, false);
        assert_eq!(state.raw, mask);
        assert_eq!(state.errors, 1 << int::BIT_ERR_AXI);
        assert!(state.has(LmeEvent::FrameEnd));
        assert!(state.has(LmeEvent::Error));
        assert!(!state.has(LmeEvent::FrameStart));
    }

    #[test]
    fn clearing_query_acknowledges_the_latch() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.io().raise_irq(LmeEvent::FrameStart.mask() | LmeEvent::FrameEnd.mask());

        let first = hw.interrupt_state(CorexSet::SetA, true);
        assert!(first.has(LmeEvent::FrameStart));

        let second = hw.interrupt_state(CorexSet::SetA, true);
        assert_eq!(second.raw, 0);
        assert_eq!(second.pending(), 0);
    }

    #[test]
    fn non_clearing_query_leaves_the_latch() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.io().raise_irq(LmeEvent::FrameEnd.mask());

        let _ = hw.interrupt_state(CorexSet::SetA, false);
        let again = hw.interrupt_state(CorexSet::SetA, false);
        assert!(again.has(LmeEvent::FrameEnd));
    }
}
