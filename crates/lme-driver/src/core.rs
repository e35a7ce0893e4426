//! Core block configuration.
//!
//! Everything written here is a fixed constant; geometry lives with the
//! DMA client setup. The writes are idempotent, re-running the sequence
//! reproduces the same register state.

use crate::device::LmeHw;
use crate::mmio::RegisterIo;
use lme_chip::bank::CorexSet;
use lme_chip::{dma, int, regs};

/// AXI CRC seed used at init.
const CRC_SEED: u32 = 0x37;

impl<R: RegisterIo> LmeHw<R> {
    /// Program the constant core state for one bank window: frame gap,
    /// corrupted-input interrupts, DMA arbitration slots, interrupt mode
    /// and mask, security ID and CRC seeds.
    pub fn configure_core(&mut self, set: CorexSet) {
        self.configure_common(set);
        self.configure_int_mask(set);
        self.configure_secure_id();
        self.seed_block_crc(set);
    }

    fn configure_common(&mut self, set: CorexSet) {
        self.write_field(set, regs::F_IP_POST_FRAME_GAP, 0x0);
        self.write_field(set, regs::F_IP_CORRUPTED_INTERRUPT_ENABLE, 0x7);

        self.write_reg(set, regs::DMA_RD_SLOT_LEN, dma::RD_SLOT_LEN);
        self.write_reg(set, regs::DMA_WR_SLOT_LEN, dma::WR_SLOT_LEN);
        self.write_reg(set, regs::DMA_SLOT_REG_RD_0, dma::pack_slots(dma::RD_SLOTS));
        self.write_reg(set, regs::DMA_SLOT_REG_WR_0, dma::pack_slots(dma::WR_SLOTS_0));
        self.write_reg(set, regs::DMA_SLOT_REG_WR_1, dma::pack_slots(dma::WR_SLOTS_1));
        self.write_reg(set, regs::DMA_SLOT_REG_WR_2, dma::pack_slots(dma::WR_SLOTS_2));

        self.write_field(set, regs::F_DMA_WR_ADDR_FIFO_DEPTH, dma::WR_FIFO_DEPTH);
        self.write_field(set, regs::F_DMA_WR_DATA_FIFO_DEPTH, dma::WR_FIFO_DEPTH);
        self.write_field(set, regs::F_DMA_WR_ADDR_MO_LIMIT, dma::WR_MO_LIMIT);
    }

    fn configure_int_mask(&mut self, set: CorexSet) {
        self.write_field(set, regs::F_CONTINT_LEVEL_PULSE_N_SEL, int::LEVEL_BOTH);
        self.write_field(set, regs::F_CONTINT_INT1_ENABLE, int::EN_MASK);
    }

    // 0: non-secure, 1: secure. This block always runs non-secure.
    fn configure_secure_id(&mut self) {
        self.write_field(CorexSet::Direct, regs::F_SECU_CTRL_SEQID, 0x0);
    }

    fn seed_block_crc(&mut self, set: CorexSet) {
        self.write_field(set, regs::F_AXICRC_SEED_0, CRC_SEED);
        self.write_field(set, regs::F_AXICRC_SEED_1, CRC_SEED);
    }

    /// Reseed both AXI CRC checkers, for CRC-based capture debugging.
    pub fn set_crc_seed(&mut self, seed: u8) {
        self.write_field(CorexSet::Direct, regs::F_AXICRC_SEED_0, u32::from(seed));
        self.write_field(CorexSet::Direct, regs::F_AXICRC_SEED_1, u32::from(seed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimRegisters;

    #[test]
    fn core_config_programs_enable_mask() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.configure_core(CorexSet::SetA);
        assert_eq!(hw.read_reg(CorexSet::SetA, regs::CONTINT_INT1_ENABLE), int::EN_MASK);
        // security ID always lands in the direct window
        assert_eq!(hw.read_reg(CorexSet::Direct, regs::SECU_CTRL_SEQID), 0);
    }

    #[test]
    fn slot_tables_match_integration_guide() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.configure_core(CorexSet::SetA);
        assert_eq!(hw.read_reg(CorexSet::SetA, regs::DMA_RD_SLOT_LEN), 0xb);
        assert_eq!(hw.read_reg(CorexSet::SetA, regs::DMA_WR_SLOT_LEN), 0x10);
        assert_eq!(hw.read_reg(CorexSet::SetA, regs::DMA_SLOT_REG_RD_0), 0x1);
    }

    #[test]
    fn crc_reseed_hits_both_checkers() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.set_crc_seed(0x5a);
        assert_eq!(hw.read_reg(CorexSet::Direct, regs::AXICRC_SEED_0), 0x5a);
        assert_eq!(hw.read_reg(CorexSet::Direct, regs::AXICRC_SEED_1), 0x5a);
    }
}
