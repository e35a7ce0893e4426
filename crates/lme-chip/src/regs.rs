//! Register map for the LME block.
//!
//! One 64 KiB register window per hardware instance. Shadow copies of the
//! map are exposed through the COREX bank windows described in [`crate::bank`];
//! every offset below is relative to the selected window base.
//!
//! Registers are described by [`Reg`] constants (name + offset) and bit
//! fields by [`Field`] constants (owning register + lsb + width). The
//! [`DUMP_LIST`] table enumerates the whole map for diagnostics.

/// A single 32-bit register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reg {
    /// Name used in diagnostic dumps.
    pub name: &'static str,
    /// Byte offset from the selected bank window base.
    pub offset: u32,
}

impl Reg {
    const fn new(name: &'static str, offset: u32) -> Self {
        Self { name, offset }
    }
}

/// A bit field within a [`Reg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Register holding the field.
    pub reg: Reg,
    /// Least significant bit position.
    pub lsb: u32,
    /// Field width in bits.
    pub width: u32,
}

impl Field {
    const fn new(reg: Reg, lsb: u32, width: u32) -> Self {
        Self { reg, lsb, width }
    }

    /// In-register mask covering this field.
    #[must_use]
    pub const fn mask(self) -> u32 {
        if self.width >= 32 {
            u32::MAX
        } else {
            ((1u32 << self.width) - 1) << self.lsb
        }
    }

    /// Place `value` into `word`, leaving other fields untouched.
    #[must_use]
    pub const fn insert(self, word: u32, value: u32) -> u32 {
        (word & !self.mask()) | ((value << self.lsb) & self.mask())
    }

    /// Read this field out of `word`.
    #[must_use]
    pub const fn extract(self, word: u32) -> u32 {
        (word & self.mask()) >> self.lsb
    }
}

/// Span of the register map within one bank window, in bytes.
///
/// The mapped file backing a hardware instance must cover at least
/// [`crate::bank::DIRECT_BASE`] + this span.
pub const MAP_SPAN: u32 = 0x1000;

// ── IP control ───────────────────────────────────────────────────────────────

/// Clock gating control for the whole block.
pub const IP_PROCESSING: Reg = Reg::new("IP_PROCESSING", 0x0000);
/// Software reset trigger; self-clears when the reset completes.
pub const SW_RESET: Reg = Reg::new("SW_RESET", 0x0004);
/// Minimum gap inserted after each frame, in cycles.
pub const IP_POST_FRAME_GAP: Reg = Reg::new("IP_POST_FRAME_GAP", 0x0008);
/// Enables the corrupted-input interrupt sources.
pub const IP_CORRUPTED_INTERRUPT_ENABLE: Reg =
    Reg::new("IP_CORRUPTED_INTERRUPT_ENABLE", 0x000c);
/// Reads 1 while the block has no frame in flight.
pub const IDLENESS_STATUS: Reg = Reg::new("IDLENESS_STATUS", 0x0010);
/// Security sequence ID (0 = non-secure).
pub const SECU_CTRL_SEQID: Reg = Reg::new("SECU_CTRL_SEQID", 0x0014);

/// Clock enable bit.
pub const F_IP_PROCESSING: Field = Field::new(IP_PROCESSING, 0, 1);
/// Reset trigger / busy bit.
pub const F_SW_RESET: Field = Field::new(SW_RESET, 0, 1);
/// Post-frame gap cycles.
pub const F_IP_POST_FRAME_GAP: Field = Field::new(IP_POST_FRAME_GAP, 0, 16);
/// Corrupted-input interrupt enables, one bit per source.
pub const F_IP_CORRUPTED_INTERRUPT_ENABLE: Field =
    Field::new(IP_CORRUPTED_INTERRUPT_ENABLE, 0, 3);
/// Idle flag.
pub const F_IDLENESS_STATUS: Field = Field::new(IDLENESS_STATUS, 0, 1);
/// Sequence ID value.
pub const F_SECU_CTRL_SEQID: Field = Field::new(SECU_CTRL_SEQID, 0, 2);

// ── COREX shadow-bank control ────────────────────────────────────────────────
// Always accessed through the direct window; the shadow mechanism cannot
// reconfigure itself.

/// Global COREX enable.
pub const COREX_ENABLE: Reg = Reg::new("COREX_ENABLE", 0x0080);
/// Allows queueing more than one shadow set.
pub const COREX_MULTISET_ENABLE: Reg = Reg::new("COREX_MULTISET_ENABLE", 0x0084);
/// Update type for shadow set 0 (ignore / copy / swap).
pub const COREX_UPDATE_TYPE_0: Reg = Reg::new("COREX_UPDATE_TYPE_0", 0x0088);
/// Update type for shadow set 1.
pub const COREX_UPDATE_TYPE_1: Reg = Reg::new("COREX_UPDATE_TYPE_1", 0x008c);
/// Trigger source for shadow set 0 (hardware / software).
pub const COREX_UPDATE_MODE_0: Reg = Reg::new("COREX_UPDATE_MODE_0", 0x0090);
/// Trigger source for shadow set 1.
pub const COREX_UPDATE_MODE_1: Reg = Reg::new("COREX_UPDATE_MODE_1", 0x0094);
/// Software trigger pulse for shadow set 0.
pub const COREX_START_0: Reg = Reg::new("COREX_START_0", 0x0098);
/// Software trigger pulse for shadow set 1.
pub const COREX_START_1: Reg = Reg::new("COREX_START_1", 0x009c);
/// Copies the live register file into shadow set 0.
pub const COREX_COPY_FROM_IP_0: Reg = Reg::new("COREX_COPY_FROM_IP_0", 0x00a0);
/// Busy flag for shadow set 0 copy/swap operations.
pub const COREX_STATUS_0: Reg = Reg::new("COREX_STATUS_0", 0x00a4);
/// Multiset queue: write a set ID to schedule it for the next trigger.
pub const CTRL_MS_ADD_TO_QUEUE: Reg = Reg::new("CTRL_MS_ADD_TO_QUEUE", 0x00a8);

/// COREX enable bit.
pub const F_COREX_ENABLE: Field = Field::new(COREX_ENABLE, 0, 1);
/// Multiset enable bit.
pub const F_COREX_MULTISET_ENABLE: Field = Field::new(COREX_MULTISET_ENABLE, 0, 1);
/// Set 0 update type.
pub const F_COREX_UPDATE_TYPE_0: Field = Field::new(COREX_UPDATE_TYPE_0, 0, 2);
/// Set 1 update type.
pub const F_COREX_UPDATE_TYPE_1: Field = Field::new(COREX_UPDATE_TYPE_1, 0, 2);
/// Set 0 trigger source.
pub const F_COREX_UPDATE_MODE_0: Field = Field::new(COREX_UPDATE_MODE_0, 0, 1);
/// Set 1 trigger source.
pub const F_COREX_UPDATE_MODE_1: Field = Field::new(COREX_UPDATE_MODE_1, 0, 1);
/// Set 0 software trigger.
pub const F_COREX_START_0: Field = Field::new(COREX_START_0, 0, 1);
/// Set 1 software trigger.
pub const F_COREX_START_1: Field = Field::new(COREX_START_1, 0, 1);
/// Copy-from-IP trigger.
pub const F_COREX_COPY_FROM_IP_0: Field = Field::new(COREX_COPY_FROM_IP_0, 0, 1);
/// Set 0 busy flag.
pub const F_COREX_BUSY_0: Field = Field::new(COREX_STATUS_0, 0, 1);
/// Queued set ID.
pub const F_CTRL_MS_ADD_TO_QUEUE: Field = Field::new(CTRL_MS_ADD_TO_QUEUE, 0, 2);

// ── Interrupt controller ─────────────────────────────────────────────────────

/// Level/pulse select for the INT1 and INT2 outputs.
pub const CONTINT_LEVEL_PULSE_N_SEL: Reg = Reg::new("CONTINT_LEVEL_PULSE_N_SEL", 0x0100);
/// INT1 source enable mask.
pub const CONTINT_INT1_ENABLE: Reg = Reg::new("CONTINT_INT1_ENABLE", 0x0104);
/// Raw INT1 source latch.
pub const CONTINT_INT1: Reg = Reg::new("CONTINT_INT1", 0x0108);
/// Write-1-to-clear register for [`CONTINT_INT1`].
pub const CONTINT_INT1_CLEAR: Reg = Reg::new("CONTINT_INT1_CLEAR", 0x010c);
/// Masked INT1 status.
pub const CONTINT_INT1_STATUS: Reg = Reg::new("CONTINT_INT1_STATUS", 0x0110);

/// Level/pulse select value.
pub const F_CONTINT_LEVEL_PULSE_N_SEL: Field = Field::new(CONTINT_LEVEL_PULSE_N_SEL, 0, 2);
/// INT1 enable mask.
pub const F_CONTINT_INT1_ENABLE: Field = Field::new(CONTINT_INT1_ENABLE, 0, 32);

// ── DMA arbitration ──────────────────────────────────────────────────────────
// Slot scheduling constants come from the bus integration guide and never
// depend on frame geometry.

/// Read arbitration slot period.
pub const DMA_RD_SLOT_LEN: Reg = Reg::new("DMA_RD_SLOT_LEN", 0x0200);
/// Write arbitration slot period.
pub const DMA_WR_SLOT_LEN: Reg = Reg::new("DMA_WR_SLOT_LEN", 0x0204);
/// Read slot assignments 0..5, five bits each.
pub const DMA_SLOT_REG_RD_0: Reg = Reg::new("DMA_SLOT_REG_RD_0", 0x0208);
/// Write slot assignments 0..5.
pub const DMA_SLOT_REG_WR_0: Reg = Reg::new("DMA_SLOT_REG_WR_0", 0x020c);
/// Write slot assignments 6..11.
pub const DMA_SLOT_REG_WR_1: Reg = Reg::new("DMA_SLOT_REG_WR_1", 0x0210);
/// Write slot assignments 12..17.
pub const DMA_SLOT_REG_WR_2: Reg = Reg::new("DMA_SLOT_REG_WR_2", 0x0214);
/// Write address FIFO depth.
pub const DMA_WR_ADDR_FIFO_DEPTH: Reg = Reg::new("DMA_WR_ADDR_FIFO_DEPTH", 0x0218);
/// Write data FIFO depth.
pub const DMA_WR_DATA_FIFO_DEPTH: Reg = Reg::new("DMA_WR_DATA_FIFO_DEPTH", 0x021c);
/// Outstanding write address limit.
pub const DMA_WR_ADDR_MO_LIMIT: Reg = Reg::new("DMA_WR_ADDR_MO_LIMIT", 0x0220);

/// Read slot period value.
pub const F_DMA_RD_SLOT_LEN: Field = Field::new(DMA_RD_SLOT_LEN, 0, 8);
/// Write slot period value.
pub const F_DMA_WR_SLOT_LEN: Field = Field::new(DMA_WR_SLOT_LEN, 0, 8);
/// Write address FIFO depth value.
pub const F_DMA_WR_ADDR_FIFO_DEPTH: Field = Field::new(DMA_WR_ADDR_FIFO_DEPTH, 0, 8);
/// Write data FIFO depth value.
pub const F_DMA_WR_DATA_FIFO_DEPTH: Field = Field::new(DMA_WR_DATA_FIFO_DEPTH, 0, 8);
/// Outstanding write limit value.
pub const F_DMA_WR_ADDR_MO_LIMIT: Field = Field::new(DMA_WR_ADDR_MO_LIMIT, 0, 8);

// ── AXI CRC ──────────────────────────────────────────────────────────────────

/// CRC seed for the read channel checker.
pub const AXICRC_SEED_0: Reg = Reg::new("AXICRC_SEED_0", 0x0280);
/// CRC seed for the write channel checker.
pub const AXICRC_SEED_1: Reg = Reg::new("AXICRC_SEED_1", 0x0284);

/// Read channel seed value.
pub const F_AXICRC_SEED_0: Field = Field::new(AXICRC_SEED_0, 0, 8);
/// Write channel seed value.
pub const F_AXICRC_SEED_1: Field = Field::new(AXICRC_SEED_1, 0, 8);

// ── Prefetch cache ───────────────────────────────────────────────────────────
// Pixel-domain cache in front of the motion estimator. Image 0 is the
// previous frame, image 1 the current frame.

/// Cache bypass and request-counter controls.
pub const CACHE_LME_BYPASS: Reg = Reg::new("CACHE_LME_BYPASS", 0x0400);
/// Previous-frame pixel gain/offset.
pub const CACHE_PIX_CONFIG_0: Reg = Reg::new("CACHE_PIX_CONFIG_0", 0x0404);
/// Current-frame pixel gain/offset.
pub const CACHE_PIX_CONFIG_1: Reg = Reg::new("CACHE_PIX_CONFIG_1", 0x0408);
/// Previous-frame image geometry.
pub const CACHE_IMAGE0_CONFIG: Reg = Reg::new("CACHE_IMAGE0_CONFIG", 0x040c);
/// Current-frame image geometry.
pub const CACHE_IMAGE1_CONFIG: Reg = Reg::new("CACHE_IMAGE1_CONFIG", 0x0410);
/// Previous-frame crop origin.
pub const CACHE_CROP_START_0: Reg = Reg::new("CACHE_CROP_START_0", 0x0414);
/// Current-frame crop origin.
pub const CACHE_CROP_START_1: Reg = Reg::new("CACHE_CROP_START_1", 0x0418);
/// Previous-frame pixel base address.
pub const CACHE_BASE_ADDR_1P_0: Reg = Reg::new("CACHE_BASE_ADDR_1P_0", 0x041c);
/// Current-frame pixel base address.
pub const CACHE_BASE_ADDR_1P_1: Reg = Reg::new("CACHE_BASE_ADDR_1P_1", 0x0420);
/// Previous-frame line-to-line byte stride.
pub const CACHE_BASE_ADDR_JUMP_0: Reg = Reg::new("CACHE_BASE_ADDR_JUMP_0", 0x0424);
/// Current-frame line-to-line byte stride.
pub const CACHE_BASE_ADDR_JUMP_1: Reg = Reg::new("CACHE_BASE_ADDR_JUMP_1", 0x0428);

/// Cache bypass bit (0 enables the cache).
pub const F_CACHE_BYPASS: Field = Field::new(CACHE_LME_BYPASS, 0, 1);
/// Disables prefetch when set.
pub const F_CACHE_IGNORE_PREFETCH: Field = Field::new(CACHE_LME_BYPASS, 1, 1);
/// Data request counter enable.
pub const F_CACHE_DATA_REQ_CNT_EN: Field = Field::new(CACHE_LME_BYPASS, 2, 1);
/// Prefetch request counter enable.
pub const F_CACHE_PRE_REQ_CNT_EN: Field = Field::new(CACHE_LME_BYPASS, 3, 1);
/// Utilization counter enable.
pub const F_CACHE_UTILIZATION_EN: Field = Field::new(CACHE_LME_BYPASS, 4, 1);
/// Cache address offset.
pub const F_CACHE_CADDR_OFFSET: Field = Field::new(CACHE_LME_BYPASS, 8, 8);
/// Previous-frame pixel gain.
pub const F_CACHE_PIX_GAIN_0: Field = Field::new(CACHE_PIX_CONFIG_0, 0, 10);
/// Previous-frame pixel offset.
pub const F_CACHE_PIX_OFFSET_0: Field = Field::new(CACHE_PIX_CONFIG_0, 16, 10);
/// Current-frame pixel gain.
pub const F_CACHE_PIX_GAIN_1: Field = Field::new(CACHE_PIX_CONFIG_1, 0, 10);
/// Current-frame pixel offset.
pub const F_CACHE_PIX_OFFSET_1: Field = Field::new(CACHE_PIX_CONFIG_1, 16, 10);
/// Previous-frame width.
pub const F_CACHE_IMG_WIDTH_0: Field = Field::new(CACHE_IMAGE0_CONFIG, 0, 16);
/// Previous-frame height.
pub const F_CACHE_IMG_HEIGHT_0: Field = Field::new(CACHE_IMAGE0_CONFIG, 16, 16);
/// Current-frame width.
pub const F_CACHE_IMG_WIDTH_1: Field = Field::new(CACHE_IMAGE1_CONFIG, 0, 16);
/// Current-frame height.
pub const F_CACHE_IMG_HEIGHT_1: Field = Field::new(CACHE_IMAGE1_CONFIG, 16, 16);
/// Previous-frame crop X.
pub const F_CACHE_CROP_X_0: Field = Field::new(CACHE_CROP_START_0, 0, 16);
/// Previous-frame crop Y.
pub const F_CACHE_CROP_Y_0: Field = Field::new(CACHE_CROP_START_0, 16, 16);
/// Current-frame crop X.
pub const F_CACHE_CROP_X_1: Field = Field::new(CACHE_CROP_START_1, 0, 16);
/// Current-frame crop Y.
pub const F_CACHE_CROP_Y_1: Field = Field::new(CACHE_CROP_START_1, 16, 16);

// ── Motion vector compute (MVCT) ─────────────────────────────────────────────

/// Prefetch gap and enable.
pub const MVCT_PREFETCH: Reg = Reg::new("MVCT_PREFETCH", 0x0500);
/// Image dimensions fed to the estimator.
pub const MVCT_IMAGE_DIMENSIONS: Reg = Reg::new("MVCT_IMAGE_DIMENSIONS", 0x0504);
/// Operating mode and first-frame flags.
pub const MVCT_LME_CONFIG: Reg = Reg::new("MVCT_LME_CONFIG", 0x0508);
/// Cost metric selection.
pub const MVCT_MVE_CONFIG: Reg = Reg::new("MVCT_MVE_CONFIG", 0x050c);
/// Cost metric weights and noise level.
pub const MVCT_MVE_WEIGHT: Reg = Reg::new("MVCT_MVE_WEIGHT", 0x0510);
/// Search range.
pub const MVCT_MV_SR: Reg = Reg::new("MVCT_MV_SR", 0x0514);

/// Prefetch gap in cells.
pub const F_MVCT_PREFETCH_GAP: Field = Field::new(MVCT_PREFETCH, 0, 10);
/// Prefetch enable.
pub const F_MVCT_PREFETCH_EN: Field = Field::new(MVCT_PREFETCH, 16, 1);
/// Image width.
pub const F_MVCT_IMAGE_WIDTH: Field = Field::new(MVCT_IMAGE_DIMENSIONS, 0, 16);
/// Image height.
pub const F_MVCT_IMAGE_HEIGHT: Field = Field::new(MVCT_IMAGE_DIMENSIONS, 16, 16);
/// Operating mode (0 fusion, 1 TNR).
pub const F_MVCT_LME_MODE: Field = Field::new(MVCT_LME_CONFIG, 0, 1);
/// First-frame flag.
pub const F_MVCT_FIRST_FRAME: Field = Field::new(MVCT_LME_CONFIG, 1, 1);
/// Forward-frame-only flag.
pub const F_MVCT_FW_FRAME_ONLY: Field = Field::new(MVCT_LME_CONFIG, 2, 1);
/// Absolute-difference metric enable.
pub const F_MVCT_USE_AD: Field = Field::new(MVCT_MVE_CONFIG, 0, 1);
/// SAD metric enable.
pub const F_MVCT_USE_SAD: Field = Field::new(MVCT_MVE_CONFIG, 1, 1);
/// Census-transform metric enable.
pub const F_MVCT_USE_CT: Field = Field::new(MVCT_MVE_CONFIG, 2, 1);
/// Zero-mean SAD metric enable.
pub const F_MVCT_USE_ZSAD: Field = Field::new(MVCT_MVE_CONFIG, 3, 1);
/// Census-transform weight.
pub const F_MVCT_WEIGHT_CT: Field = Field::new(MVCT_MVE_WEIGHT, 0, 4);
/// Absolute-difference weight.
pub const F_MVCT_WEIGHT_AD: Field = Field::new(MVCT_MVE_WEIGHT, 4, 4);
/// SAD weight.
pub const F_MVCT_WEIGHT_SAD: Field = Field::new(MVCT_MVE_WEIGHT, 8, 4);
/// Zero-mean SAD weight.
pub const F_MVCT_WEIGHT_ZSAD: Field = Field::new(MVCT_MVE_WEIGHT, 12, 4);
/// Noise level.
pub const F_MVCT_NOISE_LEVEL: Field = Field::new(MVCT_MVE_WEIGHT, 16, 4);
/// Horizontal search range.
pub const F_MVCT_SR_X: Field = Field::new(MVCT_MV_SR, 0, 8);
/// Vertical search range.
pub const F_MVCT_SR_Y: Field = Field::new(MVCT_MV_SR, 8, 8);

// ── DMA client: pixel cache input ────────────────────────────────────────────

/// Cache input client enable.
pub const CACHE_IN_CLIENT_ENABLE: Reg = Reg::new("CACHE_IN_CLIENT_ENABLE", 0x0600);
/// Cache input data FIFO depth.
pub const CACHE_IN_DATA_FIFO_DEPTH: Reg = Reg::new("CACHE_IN_DATA_FIFO_DEPTH", 0x0604);
/// Cache input burst alignment.
pub const CACHE_IN_BURST_ALIGNMENT: Reg = Reg::new("CACHE_IN_BURST_ALIGNMENT", 0x0608);
/// Cache input burst length.
pub const CACHE_IN_GEOM_BURST_LENGTH: Reg = Reg::new("CACHE_IN_GEOM_BURST_LENGTH", 0x060c);

// ── DMA client: MBMV input ───────────────────────────────────────────────────
// Macroblock motion-vector metadata read for temporal continuity. Uses a
// two-entry rotating base address pair.

/// MBMV input client enable.
pub const MBMV_IN_CLIENT_ENABLE: Reg = Reg::new("MBMV_IN_CLIENT_ENABLE", 0x0700);
/// MBMV input burst length.
pub const MBMV_IN_GEOM_BURST_LENGTH: Reg = Reg::new("MBMV_IN_GEOM_BURST_LENGTH", 0x0704);
/// MBMV input line width in bytes.
pub const MBMV_IN_GEOM_LWIDTH: Reg = Reg::new("MBMV_IN_GEOM_LWIDTH", 0x0708);
/// MBMV input line count.
pub const MBMV_IN_GEOM_LINE_COUNT: Reg = Reg::new("MBMV_IN_GEOM_LINE_COUNT", 0x070c);
/// MBMV input total width in bytes.
pub const MBMV_IN_GEOM_TOTAL_WIDTH: Reg = Reg::new("MBMV_IN_GEOM_TOTAL_WIDTH", 0x0710);
/// MBMV input line direction (1 = bottom-up).
pub const MBMV_IN_GEOM_LINE_DIRECTION: Reg = Reg::new("MBMV_IN_GEOM_LINE_DIRECTION", 0x0714);
/// MBMV input base address 0.
pub const MBMV_IN_GEOM_BASE_ADDR_0: Reg = Reg::new("MBMV_IN_GEOM_BASE_ADDR_0", 0x0718);
/// MBMV input base address 1.
pub const MBMV_IN_GEOM_BASE_ADDR_1: Reg = Reg::new("MBMV_IN_GEOM_BASE_ADDR_1", 0x071c);
/// MBMV input base address rotation config.
pub const MBMV_IN_GEOM_BASE_ADDR_CONF: Reg = Reg::new("MBMV_IN_GEOM_BASE_ADDR_CONF", 0x0720);
/// Resets the MBMV input rotation pointer.
pub const MBMV_IN_GEOM_BASE_ADDR_ROTATION_RESET: Reg =
    Reg::new("MBMV_IN_GEOM_BASE_ADDR_ROTATION_RESET", 0x0724);
/// MBMV input formatter line width.
pub const MBMV_IN_FRMT_LWIDTH: Reg = Reg::new("MBMV_IN_FRMT_LWIDTH", 0x0728);
/// MBMV input formatter line gap.
pub const MBMV_IN_FRMT_LINEGAP: Reg = Reg::new("MBMV_IN_FRMT_LINEGAP", 0x072c);
/// MBMV input formatter pre gap.
pub const MBMV_IN_FRMT_PREGAP: Reg = Reg::new("MBMV_IN_FRMT_PREGAP", 0x0730);
/// MBMV input formatter post gap.
pub const MBMV_IN_FRMT_POSTGAP: Reg = Reg::new("MBMV_IN_FRMT_POSTGAP", 0x0734);
/// MBMV input formatter pixel gap.
pub const MBMV_IN_FRMT_PIXELGAP: Reg = Reg::new("MBMV_IN_FRMT_PIXELGAP", 0x0738);
/// MBMV input formatter stall gap.
pub const MBMV_IN_FRMT_STALLGAP: Reg = Reg::new("MBMV_IN_FRMT_STALLGAP", 0x073c);
/// MBMV input byte packing.
pub const MBMV_IN_FRMT_PACKING: Reg = Reg::new("MBMV_IN_FRMT_PACKING", 0x0740);
/// MBMV input pad/shift config.
pub const MBMV_IN_FRMT_MNM: Reg = Reg::new("MBMV_IN_FRMT_MNM", 0x0744);
/// MBMV input channel mix 0.
pub const MBMV_IN_FRMT_CH_MIX_0: Reg = Reg::new("MBMV_IN_FRMT_CH_MIX_0", 0x0748);
/// MBMV input channel mix 1.
pub const MBMV_IN_FRMT_CH_MIX_1: Reg = Reg::new("MBMV_IN_FRMT_CH_MIX_1", 0x074c);
/// MBMV input outstanding request limit.
pub const MBMV_IN_OUTSTANDING_LIMIT: Reg = Reg::new("MBMV_IN_OUTSTANDING_LIMIT", 0x0750);
/// MBMV input burst alignment.
pub const MBMV_IN_BURST_ALIGNMENT: Reg = Reg::new("MBMV_IN_BURST_ALIGNMENT", 0x0754);
/// MBMV input client flush.
pub const MBMV_IN_CLIENT_FLUSH: Reg = Reg::new("MBMV_IN_CLIENT_FLUSH", 0x0758);

/// MBMV input rotation: address 0 enable.
pub const F_MBMV_IN_BASE_ADDR_EN_0: Field = Field::new(MBMV_IN_GEOM_BASE_ADDR_CONF, 0, 1);
/// MBMV input rotation: address 1 enable.
pub const F_MBMV_IN_BASE_ADDR_EN_1: Field = Field::new(MBMV_IN_GEOM_BASE_ADDR_CONF, 1, 1);
/// MBMV input rotation period.
pub const F_MBMV_IN_BASE_ADDR_ROTATION_SIZE: Field =
    Field::new(MBMV_IN_GEOM_BASE_ADDR_CONF, 8, 4);
/// MBMV input rotation reset pulse.
pub const F_MBMV_IN_ROTATION_RESET: Field =
    Field::new(MBMV_IN_GEOM_BASE_ADDR_ROTATION_RESET, 0, 1);

// ── DMA client: motion vector output ─────────────────────────────────────────

/// MV output client enable.
pub const MV_OUT_CLIENT_ENABLE: Reg = Reg::new("MV_OUT_CLIENT_ENABLE", 0x0800);
/// MV output burst length.
pub const MV_OUT_GEOM_BURST_LENGTH: Reg = Reg::new("MV_OUT_GEOM_BURST_LENGTH", 0x0804);
/// MV output line width in bytes.
pub const MV_OUT_GEOM_LWIDTH: Reg = Reg::new("MV_OUT_GEOM_LWIDTH", 0x0808);
/// MV output line count.
pub const MV_OUT_GEOM_LINE_COUNT: Reg = Reg::new("MV_OUT_GEOM_LINE_COUNT", 0x080c);
/// MV output total width in bytes.
pub const MV_OUT_GEOM_TOTAL_WIDTH: Reg = Reg::new("MV_OUT_GEOM_TOTAL_WIDTH", 0x0810);
/// MV output line direction (1 = bottom-up).
pub const MV_OUT_GEOM_LINE_DIRECTION: Reg = Reg::new("MV_OUT_GEOM_LINE_DIRECTION", 0x0814);
/// MV output base address.
pub const MV_OUT_GEOM_BASE_ADDR_0: Reg = Reg::new("MV_OUT_GEOM_BASE_ADDR_0", 0x0818);
/// MV output byte packing.
pub const MV_OUT_FRMT_PACKING: Reg = Reg::new("MV_OUT_FRMT_PACKING", 0x081c);
/// MV output pad/shift config.
pub const MV_OUT_FRMT_MNM: Reg = Reg::new("MV_OUT_FRMT_MNM", 0x0820);
/// MV output channel mix 0.
pub const MV_OUT_FRMT_CH_MIX_0: Reg = Reg::new("MV_OUT_FRMT_CH_MIX_0", 0x0824);
/// MV output channel mix 1.
pub const MV_OUT_FRMT_CH_MIX_1: Reg = Reg::new("MV_OUT_FRMT_CH_MIX_1", 0x0828);
/// MV output outstanding request limit.
pub const MV_OUT_OUTSTANDING_LIMIT: Reg = Reg::new("MV_OUT_OUTSTANDING_LIMIT", 0x082c);
/// MV output data FIFO depth.
pub const MV_OUT_DATA_FIFO_DEPTH: Reg = Reg::new("MV_OUT_DATA_FIFO_DEPTH", 0x0830);
/// MV output burst alignment.
pub const MV_OUT_BURST_ALIGNMENT: Reg = Reg::new("MV_OUT_BURST_ALIGNMENT", 0x0834);
/// MV output self flush enable.
pub const MV_OUT_SELF_HW_FLUSH_ENABLE: Reg = Reg::new("MV_OUT_SELF_HW_FLUSH_ENABLE", 0x0838);

// ── DMA client: SAD output ───────────────────────────────────────────────────

/// SAD output client enable.
pub const SAD_OUT_CLIENT_ENABLE: Reg = Reg::new("SAD_OUT_CLIENT_ENABLE", 0x0900);
/// SAD output burst length.
pub const SAD_OUT_GEOM_BURST_LENGTH: Reg = Reg::new("SAD_OUT_GEOM_BURST_LENGTH", 0x0904);
/// SAD output line width in bytes.
pub const SAD_OUT_GEOM_LWIDTH: Reg = Reg::new("SAD_OUT_GEOM_LWIDTH", 0x0908);
/// SAD output line count.
pub const SAD_OUT_GEOM_LINE_COUNT: Reg = Reg::new("SAD_OUT_GEOM_LINE_COUNT", 0x090c);
/// SAD output total width in bytes.
pub const SAD_OUT_GEOM_TOTAL_WIDTH: Reg = Reg::new("SAD_OUT_GEOM_TOTAL_WIDTH", 0x0910);
/// SAD output line direction (1 = bottom-up).
pub const SAD_OUT_GEOM_LINE_DIRECTION: Reg = Reg::new("SAD_OUT_GEOM_LINE_DIRECTION", 0x0914);
/// SAD output base address.
pub const SAD_OUT_GEOM_BASE_ADDR_0: Reg = Reg::new("SAD_OUT_GEOM_BASE_ADDR_0", 0x0918);
/// SAD output byte packing.
pub const SAD_OUT_FRMT_PACKING: Reg = Reg::new("SAD_OUT_FRMT_PACKING", 0x091c);
/// SAD output pad/shift config.
pub const SAD_OUT_FRMT_MNM: Reg = Reg::new("SAD_OUT_FRMT_MNM", 0x0920);
/// SAD output outstanding request limit.
pub const SAD_OUT_OUTSTANDING_LIMIT: Reg = Reg::new("SAD_OUT_OUTSTANDING_LIMIT", 0x0924);
/// SAD output data FIFO depth.
pub const SAD_OUT_DATA_FIFO_DEPTH: Reg = Reg::new("SAD_OUT_DATA_FIFO_DEPTH", 0x0928);
/// SAD output burst alignment.
pub const SAD_OUT_BURST_ALIGNMENT: Reg = Reg::new("SAD_OUT_BURST_ALIGNMENT", 0x092c);
/// SAD output self flush enable.
pub const SAD_OUT_SELF_HW_FLUSH_ENABLE: Reg = Reg::new("SAD_OUT_SELF_HW_FLUSH_ENABLE", 0x0930);

// ── DMA client: MBMV output ──────────────────────────────────────────────────

/// MBMV output client enable.
pub const MBMV_OUT_CLIENT_ENABLE: Reg = Reg::new("MBMV_OUT_CLIENT_ENABLE", 0x0a00);
/// MBMV output burst length.
pub const MBMV_OUT_GEOM_BURST_LENGTH: Reg = Reg::new("MBMV_OUT_GEOM_BURST_LENGTH", 0x0a04);
/// MBMV output line width in bytes.
pub const MBMV_OUT_GEOM_LWIDTH: Reg = Reg::new("MBMV_OUT_GEOM_LWIDTH", 0x0a08);
/// MBMV output line count.
pub const MBMV_OUT_GEOM_LINE_COUNT: Reg = Reg::new("MBMV_OUT_GEOM_LINE_COUNT", 0x0a0c);
/// MBMV output total width in bytes.
pub const MBMV_OUT_GEOM_TOTAL_WIDTH: Reg = Reg::new("MBMV_OUT_GEOM_TOTAL_WIDTH", 0x0a10);
/// MBMV output line direction (1 = bottom-up).
pub const MBMV_OUT_GEOM_LINE_DIRECTION: Reg = Reg::new("MBMV_OUT_GEOM_LINE_DIRECTION", 0x0a14);
/// MBMV output base address 0.
pub const MBMV_OUT_GEOM_BASE_ADDR_0: Reg = Reg::new("MBMV_OUT_GEOM_BASE_ADDR_0", 0x0a18);
/// MBMV output base address 1.
pub const MBMV_OUT_GEOM_BASE_ADDR_1: Reg = Reg::new("MBMV_OUT_GEOM_BASE_ADDR_1", 0x0a1c);
/// MBMV output base address rotation config.
pub const MBMV_OUT_GEOM_BASE_ADDR_CONF: Reg = Reg::new("MBMV_OUT_GEOM_BASE_ADDR_CONF", 0x0a20);
/// MBMV output byte packing.
pub const MBMV_OUT_FRMT_PACKING: Reg = Reg::new("MBMV_OUT_FRMT_PACKING", 0x0a24);
/// MBMV output pad/shift config.
pub const MBMV_OUT_FRMT_MNM: Reg = Reg::new("MBMV_OUT_FRMT_MNM", 0x0a28);
/// MBMV output channel mix 0.
pub const MBMV_OUT_FRMT_CH_MIX_0: Reg = Reg::new("MBMV_OUT_FRMT_CH_MIX_0", 0x0a2c);
/// MBMV output channel mix 1.
pub const MBMV_OUT_FRMT_CH_MIX_1: Reg = Reg::new("MBMV_OUT_FRMT_CH_MIX_1", 0x0a30);
/// MBMV output outstanding request limit.
pub const MBMV_OUT_OUTSTANDING_LIMIT: Reg = Reg::new("MBMV_OUT_OUTSTANDING_LIMIT", 0x0a34);
/// MBMV output data FIFO depth.
pub const MBMV_OUT_DATA_FIFO_DEPTH: Reg = Reg::new("MBMV_OUT_DATA_FIFO_DEPTH", 0x0a38);
/// MBMV output burst alignment.
pub const MBMV_OUT_BURST_ALIGNMENT: Reg = Reg::new("MBMV_OUT_BURST_ALIGNMENT", 0x0a3c);
/// MBMV output client flush.
pub const MBMV_OUT_CLIENT_FLUSH: Reg = Reg::new("MBMV_OUT_CLIENT_FLUSH", 0x0a40);

/// MBMV output rotation: address 0 enable.
pub const F_MBMV_OUT_BASE_ADDR_EN_0: Field = Field::new(MBMV_OUT_GEOM_BASE_ADDR_CONF, 0, 1);
/// MBMV output rotation: address 1 enable.
pub const F_MBMV_OUT_BASE_ADDR_EN_1: Field = Field::new(MBMV_OUT_GEOM_BASE_ADDR_CONF, 1, 1);
/// MBMV output rotation period.
pub const F_MBMV_OUT_BASE_ADDR_ROTATION_SIZE: Field =
    Field::new(MBMV_OUT_GEOM_BASE_ADDR_CONF, 8, 4);

/// Every register in the map, in address order. Used for diagnostic dumps.
pub static DUMP_LIST: &[Reg] = &[
    IP_PROCESSING,
    SW_RESET,
    IP_POST_FRAME_GAP,
    IP_CORRUPTED_INTERRUPT_ENABLE,
    IDLENESS_STATUS,
    SECU_CTRL_SEQID,
    COREX_ENABLE,
    COREX_MULTISET_ENABLE,
    COREX_UPDATE_TYPE_0,
    COREX_UPDATE_TYPE_1,
    COREX_UPDATE_MODE_0,
    COREX_UPDATE_MODE_1,
    COREX_START_0,
    COREX_START_1,
    COREX_COPY_FROM_IP_0,
    COREX_STATUS_0,
    CTRL_MS_ADD_TO_QUEUE,
    CONTINT_LEVEL_PULSE_N_SEL,
    CONTINT_INT1_ENABLE,
    CONTINT_INT1,
    CONTINT_INT1_CLEAR,
    CONTINT_INT1_STATUS,
    DMA_RD_SLOT_LEN,
    DMA_WR_SLOT_LEN,
    DMA_SLOT_REG_RD_0,
    DMA_SLOT_REG_WR_0,
    DMA_SLOT_REG_WR_1,
    DMA_SLOT_REG_WR_2,
    DMA_WR_ADDR_FIFO_DEPTH,
    DMA_WR_DATA_FIFO_DEPTH,
    DMA_WR_ADDR_MO_LIMIT,
    AXICRC_SEED_0,
    AXICRC_SEED_1,
    CACHE_LME_BYPASS,
    CACHE_PIX_CONFIG_0,
    CACHE_PIX_CONFIG_1,
    CACHE_IMAGE0_CONFIG,
    CACHE_IMAGE1_CONFIG,
    CACHE_CROP_START_0,
    CACHE_CROP_START_1,
    CACHE_BASE_ADDR_1P_0,
    CACHE_BASE_ADDR_1P_1,
    CACHE_BASE_ADDR_JUMP_0,
    CACHE_BASE_ADDR_JUMP_1,
    MVCT_PREFETCH,
    MVCT_IMAGE_DIMENSIONS,
    MVCT_LME_CONFIG,
    MVCT_MVE_CONFIG,
    MVCT_MVE_WEIGHT,
    MVCT_MV_SR,
    CACHE_IN_CLIENT_ENABLE,
    CACHE_IN_DATA_FIFO_DEPTH,
    CACHE_IN_BURST_ALIGNMENT,
    CACHE_IN_GEOM_BURST_LENGTH,
    MBMV_IN_CLIENT_ENABLE,
    MBMV_IN_GEOM_BURST_LENGTH,
    MBMV_IN_GEOM_LWIDTH,
    MBMV_IN_GEOM_LINE_COUNT,
    MBMV_IN_GEOM_TOTAL_WIDTH,
    MBMV_IN_GEOM_LINE_DIRECTION,
    MBMV_IN_GEOM_BASE_ADDR_0,
    MBMV_IN_GEOM_BASE_ADDR_1,
    MBMV_IN_GEOM_BASE_ADDR_CONF,
    MBMV_IN_GEOM_BASE_ADDR_ROTATION_RESET,
    MBMV_IN_FRMT_LWIDTH,
    MBMV_IN_FRMT_LINEGAP,
    MBMV_IN_FRMT_PREGAP,
    MBMV_IN_FRMT_POSTGAP,
    MBMV_IN_FRMT_PIXELGAP,
    MBMV_IN_FRMT_STALLGAP,
    MBMV_IN_FRMT_PACKING,
    MBMV_IN_FRMT_MNM,
    MBMV_IN_FRMT_CH_MIX_0,
    MBMV_IN_FRMT_CH_MIX_1,
    MBMV_IN_OUTSTANDING_LIMIT,
    MBMV_IN_BURST_ALIGNMENT,
    MBMV_IN_CLIENT_FLUSH,
    MV_OUT_CLIENT_ENABLE,
    MV_OUT_GEOM_BURST_LENGTH,
    MV_OUT_GEOM_LWIDTH,
    MV_OUT_GEOM_LINE_COUNT,
    MV_OUT_GEOM_TOTAL_WIDTH,
    MV_OUT_GEOM_LINE_DIRECTION,
    MV_OUT_GEOM_BASE_ADDR_0,
    MV_OUT_FRMT_PACKING,
    MV_OUT_FRMT_MNM,
    MV_OUT_FRMT_CH_MIX_0,
    MV_OUT_FRMT_CH_MIX_1,
    MV_OUT_OUTSTANDING_LIMIT,
    MV_OUT_DATA_FIFO_DEPTH,
    MV_OUT_BURST_ALIGNMENT,
    MV_OUT_SELF_HW_FLUSH_ENABLE,
    SAD_OUT_CLIENT_ENABLE,
    SAD_OUT_GEOM_BURST_LENGTH,
    SAD_OUT_GEOM_LWIDTH,
    SAD_OUT_GEOM_LINE_COUNT,
    SAD_OUT_GEOM_TOTAL_WIDTH,
    SAD_OUT_GEOM_LINE_DIRECTION,
    SAD_OUT_GEOM_BASE_ADDR_0,
    SAD_OUT_FRMT_PACKING,
    SAD_OUT_FRMT_MNM,
    SAD_OUT_OUTSTANDING_LIMIT,
    SAD_OUT_DATA_FIFO_DEPTH,
    SAD_OUT_BURST_ALIGNMENT,
    SAD_OUT_SELF_HW_FLUSH_ENABLE,
    MBMV_OUT_CLIENT_ENABLE,
    MBMV_OUT_GEOM_BURST_LENGTH,
    MBMV_OUT_GEOM_LWIDTH,
    MBMV_OUT_GEOM_LINE_COUNT,
    MBMV_OUT_GEOM_TOTAL_WIDTH,
    MBMV_OUT_GEOM_LINE_DIRECTION,
    MBMV_OUT_GEOM_BASE_ADDR_0,
    MBMV_OUT_GEOM_BASE_ADDR_1,
    MBMV_OUT_GEOM_BASE_ADDR_CONF,
    MBMV_OUT_FRMT_PACKING,
    MBMV_OUT_FRMT_MNM,
    MBMV_OUT_FRMT_CH_MIX_0,
    MBMV_OUT_FRMT_CH_MIX_1,
    MBMV_OUT_OUTSTANDING_LIMIT,
    MBMV_OUT_DATA_FIFO_DEPTH,
    MBMV_OUT_BURST_ALIGNMENT,
    MBMV_OUT_CLIENT_FLUSH,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_insert_extract_roundtrip() {
        let f = F_MVCT_WEIGHT_AD;
        let word = f.insert(0xffff_0000, 5);
        assert_eq!(f.extract(word), 5);
        // neighbours untouched
        assert_eq!(F_MVCT_WEIGHT_CT.extract(word), 0);
        assert_eq!(F_MVCT_NOISE_LEVEL.extract(word), 0xf);
    }

    #[test]
    fn full_width_field_mask() {
        assert_eq!(F_CONTINT_INT1_ENABLE.mask(), u32::MAX);
        assert_eq!(F_CONTINT_INT1_ENABLE.insert(0, 0xdead_beef), 0xdead_beef);
    }

    #[test]
    fn insert_truncates_to_width() {
        let f = F_MVCT_SR_X;
        assert_eq!(f.extract(f.insert(0, 0x1ff)), 0xff);
    }

    #[test]
    fn dump_list_is_sorted_unique_and_in_span() {
        let mut prev: Option<u32> = None;
        for reg in DUMP_LIST {
            assert_eq!(reg.offset % 4, 0, "{} not word aligned", reg.name);
            assert!(reg.offset < MAP_SPAN, "{} outside map span", reg.name);
            if let Some(p) = prev {
                assert!(reg.offset > p, "{} out of order or duplicated", reg.name);
            }
            prev = Some(reg.offset);
        }
    }
}
