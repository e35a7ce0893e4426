//! Prefetch cache and motion-vector compute (MVCT) block setup.
//!
//! Almost everything here is fixed by the hardware bring-up recipe; only
//! the image geometry and the derived prefetch gap vary.

use crate::device::LmeHw;
use crate::mmio::RegisterIo;
use lme_chip::bank::CorexSet;
use lme_chip::dma::{aligned_width_jump, prefetch_gap};
use lme_chip::regs;

/// Unity pixel gain in the cache's fixed-point format.
const PIX_GAIN_UNITY: u32 = 0x40;

/// Horizontal and vertical search range in pixels (hardware supports 16..128).
const SEARCH_RANGE: u32 = 128;

impl<R: RegisterIo> LmeHw<R> {
    /// Enable the prefetch cache and program its fixed pixel path.
    ///
    /// The cache is always on for this block revision; both frames get
    /// unity gain and zero offset.
    pub fn configure_cache(&mut self, set: CorexSet) {
        let mut word = 0;
        word = regs::F_CACHE_BYPASS.insert(word, 0);
        word = regs::F_CACHE_IGNORE_PREFETCH.insert(word, 0);
        word = regs::F_CACHE_DATA_REQ_CNT_EN.insert(word, 1);
        word = regs::F_CACHE_PRE_REQ_CNT_EN.insert(word, 1);
        word = regs::F_CACHE_UTILIZATION_EN.insert(word, 1);
        word = regs::F_CACHE_CADDR_OFFSET.insert(word, 0x8);
        self.write_reg(set, regs::CACHE_LME_BYPASS, word);

        let mut pix = 0;
        pix = regs::F_CACHE_PIX_GAIN_0.insert(pix, PIX_GAIN_UNITY);
        pix = regs::F_CACHE_PIX_OFFSET_0.insert(pix, 0);
        self.write_reg(set, regs::CACHE_PIX_CONFIG_0, pix);

        let mut pix = 0;
        pix = regs::F_CACHE_PIX_GAIN_1.insert(pix, PIX_GAIN_UNITY);
        pix = regs::F_CACHE_PIX_OFFSET_1.insert(pix, 0);
        self.write_reg(set, regs::CACHE_PIX_CONFIG_1, pix);
    }

    /// Program cache geometry for the previous and current frames.
    ///
    /// Cropping is unused, both crop origins stay zero. Line strides are
    /// the pixel width aligned up to the DMA byte alignment.
    pub fn set_cache_size(
        &mut self,
        set: CorexSet,
        prev: (u32, u32),
        cur: (u32, u32),
    ) {
        tracing::debug!("cache size prev {}x{}, cur {}x{}", prev.0, prev.1, cur.0, cur.1);

        let mut word = 0;
        word = regs::F_CACHE_IMG_WIDTH_0.insert(word, prev.0);
        word = regs::F_CACHE_IMG_HEIGHT_0.insert(word, prev.1);
        self.write_reg(set, regs::CACHE_IMAGE0_CONFIG, word);

        let mut crop = 0;
        crop = regs::F_CACHE_CROP_X_0.insert(crop, 0);
        crop = regs::F_CACHE_CROP_Y_0.insert(crop, 0);
        self.write_reg(set, regs::CACHE_CROP_START_0, crop);
        self.write_reg(set, regs::CACHE_BASE_ADDR_JUMP_0, aligned_width_jump(prev.0));

        let mut word = 0;
        word = regs::F_CACHE_IMG_WIDTH_1.insert(word, cur.0);
        word = regs::F_CACHE_IMG_HEIGHT_1.insert(word, cur.1);
        self.write_reg(set, regs::CACHE_IMAGE1_CONFIG, word);

        let mut crop = 0;
        crop = regs::F_CACHE_CROP_X_1.insert(crop, 0);
        crop = regs::F_CACHE_CROP_Y_1.insert(crop, 0);
        self.write_reg(set, regs::CACHE_CROP_START_1, crop);
        self.write_reg(set, regs::CACHE_BASE_ADDR_JUMP_1, aligned_width_jump(cur.0));
    }

    /// Program the estimator's fixed operating point: TNR mode, AD+ZSAD
    /// cost metrics with their bring-up weights, full search range.
    pub fn configure_mvct(&mut self, set: CorexSet) {
        let mut word = 0;
        word = regs::F_MVCT_LME_MODE.insert(word, 0x1);
        word = regs::F_MVCT_FIRST_FRAME.insert(word, 0x0);
        word = regs::F_MVCT_FW_FRAME_ONLY.insert(word, 0x0);
        self.write_reg(set, regs::MVCT_LME_CONFIG, word);

        let mut word = 0;
        word = regs::F_MVCT_USE_AD.insert(word, 0x1);
        word = regs::F_MVCT_USE_SAD.insert(word, 0x0);
        word = regs::F_MVCT_USE_CT.insert(word, 0x0);
        word = regs::F_MVCT_USE_ZSAD.insert(word, 0x1);
        self.write_reg(set, regs::MVCT_MVE_CONFIG, word);

        let mut word = 0;
        word = regs::F_MVCT_WEIGHT_CT.insert(word, 0);
        word = regs::F_MVCT_WEIGHT_AD.insert(word, 5);
        word = regs::F_MVCT_WEIGHT_SAD.insert(word, 1);
        word = regs::F_MVCT_WEIGHT_ZSAD.insert(word, 1);
        word = regs::F_MVCT_NOISE_LEVEL.insert(word, 3);
        self.write_reg(set, regs::MVCT_MVE_WEIGHT, word);

        let mut word = 0;
        word = regs::F_MVCT_SR_X.insert(word, SEARCH_RANGE);
        word = regs::F_MVCT_SR_Y.insert(word, SEARCH_RANGE);
        self.write_reg(set, regs::MVCT_MV_SR, word);
    }

    /// Program the estimator's image geometry and derived prefetch gap.
    pub fn set_mvct_size(&mut self, set: CorexSet, width: u32, height: u32) {
        let gap = prefetch_gap(width);
        tracing::debug!("mvct size {width}x{height}, prefetch gap {gap}");

        let mut word = 0;
        word = regs::F_MVCT_PREFETCH_GAP.insert(word, gap);
        word = regs::F_MVCT_PREFETCH_EN.insert(word, 1);
        self.write_reg(set, regs::MVCT_PREFETCH, word);

        let mut word = 0;
        word = regs::F_MVCT_IMAGE_WIDTH.insert(word, width);
        word = regs::F_MVCT_IMAGE_HEIGHT.insert(word, height);
        self.write_reg(set, regs::MVCT_IMAGE_DIMENSIONS, word);
    }

    /// Clear the cache bypass bit, putting the cache back in the pixel path.
    pub fn set_block_bypass(&mut self, set: CorexSet) {
        self.write_field(set, regs::F_CACHE_BYPASS, 0x0);
    }

    /// Reset the MBMV double-buffer rotation at the start of a sequence.
    pub fn set_first_frame(&mut self, first_frame: bool) {
        if first_frame {
            self.write_field(CorexSet::Direct, regs::F_MBMV_IN_ROTATION_RESET, 0);
        }
    }

    /// Force first-frame behavior mid-stream: raise the estimator's
    /// first-frame flag and reset the MBMV rotation.
    pub fn force_first_frame(&mut self, set: CorexSet) {
        self.write_field(set, regs::F_MVCT_FIRST_FRAME, 1);
        self.write_field(CorexSet::Direct, regs::F_MBMV_IN_ROTATION_RESET, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimRegisters;

    #[test]
    fn cache_setup_keeps_bypass_clear() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.configure_cache(CorexSet::SetA);
        let word = hw.read_reg(CorexSet::SetA, regs::CACHE_LME_BYPASS);
        assert_eq!(regs::F_CACHE_BYPASS.extract(word), 0);
        assert_eq!(regs::F_CACHE_CADDR_OFFSET.extract(word), 0x8);
    }

    #[test]
    fn cache_strides_are_aligned() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.set_cache_size(CorexSet::SetA, (1921, 1080), (1920, 1080));
        assert_eq!(hw.read_reg(CorexSet::SetA, regs::CACHE_BASE_ADDR_JUMP_0), 1936);
        assert_eq!(hw.read_reg(CorexSet::SetA, regs::CACHE_BASE_ADDR_JUMP_1), 1920);
    }

    #[test]
    fn mvct_search_range_is_full() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.configure_mvct(CorexSet::SetA);
        let sr = hw.read_reg(CorexSet::SetA, regs::MVCT_MV_SR);
        assert_eq!(regs::F_MVCT_SR_X.extract(sr), 128);
        assert_eq!(regs::F_MVCT_SR_Y.extract(sr), 128);
    }

    #[test]
    fn mvct_size_derives_prefetch_gap() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.set_mvct_size(CorexSet::SetA, 1920, 1080);
        let word = hw.read_reg(CorexSet::SetA, regs::MVCT_PREFETCH);
        assert_eq!(regs::F_MVCT_PREFETCH_GAP.extract(word), 18);
        assert_eq!(regs::F_MVCT_PREFETCH_EN.extract(word), 1);
    }

    #[test]
    fn forced_first_frame_sets_the_flag() {
        let mut hw = LmeHw::new(SimRegisters::new());
        hw.configure_mvct(CorexSet::SetA);
        hw.force_first_frame(CorexSet::SetA);
        let cfg = hw.read_reg(CorexSet::SetA, regs::MVCT_LME_CONFIG);
        assert_eq!(regs::F_MVCT_FIRST_FRAME.extract(cfg), 1);
        // mode untouched
        assert_eq!(regs::F_MVCT_LME_MODE.extract(cfg), 1);
    }
}
