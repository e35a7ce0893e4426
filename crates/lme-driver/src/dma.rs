//! DMA client configuration and address programming.
//!
//! Each client is programmed in two passes: a geometry/constant pass when
//! the frame size changes and an address pass every frame. Disabling a
//! client writes only its enable bit and leaves the rest of its state
//! untouched.

use crate::device::LmeHw;
use crate::error::{LmeError, Result};
use crate::mmio::RegisterIo;
use crate::params::{FrameParams, LmeMode};
use lme_chip::bank::CorexSet;
use lme_chip::dma::{self, DmaChannel};
use lme_chip::regs;

impl<R: RegisterIo> LmeHw<R> {
    /// Configure a read client.
    ///
    /// # Errors
    ///
    /// [`LmeError::UnsupportedChannel`] for write channels.
    pub fn configure_rdma(
        &mut self,
        set: CorexSet,
        params: &FrameParams,
        channel: DmaChannel,
        enable: bool,
    ) -> Result<()> {
        match channel {
            DmaChannel::CacheIn0 => {
                self.write_reg(set, regs::CACHE_IN_CLIENT_ENABLE, u32::from(enable));
                if !enable {
                    return Ok(());
                }
                self.write_reg(set, regs::CACHE_IN_DATA_FIFO_DEPTH, dma::cache_in::DATA_FIFO_DEPTH);
                self.write_reg(set, regs::CACHE_IN_BURST_ALIGNMENT, dma::cache_in::BURST_ALIGNMENT);
                self.write_reg(set, regs::CACHE_IN_GEOM_BURST_LENGTH, dma::cache_in::BURST_LENGTH);
                Ok(())
            }
            // the second cache port shares the first port's client; only its
            // base address is programmed separately
            DmaChannel::CacheIn1 => Ok(()),
            DmaChannel::MbmvIn => {
                self.write_reg(set, regs::MBMV_IN_CLIENT_ENABLE, u32::from(enable));
                if !enable {
                    return Ok(());
                }

                let lwidth = dma::mbmv_line_width(params.output_width);
                let lines = dma::mbmv_line_count(params.output_height);

                self.write_reg(set, regs::MBMV_IN_GEOM_BURST_LENGTH, dma::mbmv_in::BURST_LENGTH);
                self.write_reg(set, regs::MBMV_IN_GEOM_LWIDTH, lwidth);
                self.write_reg(set, regs::MBMV_IN_GEOM_LINE_COUNT, lines);
                self.write_reg(set, regs::MBMV_IN_GEOM_TOTAL_WIDTH, lwidth);

                self.write_reg(set, regs::MBMV_IN_FRMT_LWIDTH, lwidth);
                self.write_reg(set, regs::MBMV_IN_FRMT_LINEGAP, dma::mbmv_in::LINEGAP);
                self.write_reg(set, regs::MBMV_IN_FRMT_PREGAP, dma::mbmv_in::PREGAP);
                self.write_reg(set, regs::MBMV_IN_FRMT_POSTGAP, dma::mbmv_in::POSTGAP);
                self.write_reg(set, regs::MBMV_IN_FRMT_PIXELGAP, dma::mbmv_in::PIXELGAP);
                self.write_reg(set, regs::MBMV_IN_FRMT_STALLGAP, dma::mbmv_in::STALLGAP);
                self.write_reg(set, regs::MBMV_IN_FRMT_PACKING, dma::mbmv_in::PACKING);
                self.write_reg(set, regs::MBMV_IN_GEOM_LINE_DIRECTION, 0x1);
                self.write_reg(set, regs::MBMV_IN_FRMT_MNM, dma::mbmv_in::MNM);
                self.write_reg(set, regs::MBMV_IN_FRMT_CH_MIX_0, dma::mbmv_in::CH_MIX_0);
                self.write_reg(set, regs::MBMV_IN_FRMT_CH_MIX_1, dma::mbmv_in::CH_MIX_1);
                self.write_reg(set, regs::MBMV_IN_OUTSTANDING_LIMIT, dma::mbmv_in::OUTSTANDING_LIMIT);
                self.write_reg(set, regs::MBMV_IN_BURST_ALIGNMENT, dma::mbmv_in::BURST_ALIGNMENT);
                self.write_reg(set, regs::MBMV_IN_CLIENT_FLUSH, 0);
                Ok(())
            }
            _ => {
                tracing::error!("invalid read client {channel:?}");
                Err(LmeError::unsupported(channel, "read client setup"))
            }
        }
    }

    /// Configure a write client.
    ///
    /// # Errors
    ///
    /// [`LmeError::UnsupportedChannel`] for read channels.
    pub fn configure_wdma(
        &mut self,
        set: CorexSet,
        params: &FrameParams,
        channel: DmaChannel,
        enable: bool,
    ) -> Result<()> {
        match channel {
            DmaChannel::MvOut => {
                self.write_reg(set, regs::MV_OUT_CLIENT_ENABLE, u32::from(enable));
                if !enable {
                    return Ok(());
                }

                let lwidth = dma::mv_out_line_width(params.cur_input_width);
                let lines = dma::mv_out_line_count(params.cur_input_height);

                self.write_reg(set, regs::MV_OUT_GEOM_BURST_LENGTH, dma::mv_out::BURST_LENGTH);
                self.write_reg(set, regs::MV_OUT_GEOM_LWIDTH, lwidth);
                self.write_reg(set, regs::MV_OUT_GEOM_LINE_COUNT, lines);
                self.write_reg(set, regs::MV_OUT_GEOM_TOTAL_WIDTH, lwidth);
                self.write_reg(set, regs::MV_OUT_GEOM_LINE_DIRECTION, 0x1);

                self.write_reg(set, regs::MV_OUT_FRMT_PACKING, dma::mv_out::PACKING);
                self.write_reg(set, regs::MV_OUT_FRMT_MNM, dma::mv_out::MNM);
                self.write_reg(set, regs::MV_OUT_FRMT_CH_MIX_0, dma::mv_out::CH_MIX_0);
                self.write_reg(set, regs::MV_OUT_FRMT_CH_MIX_1, dma::mv_out::CH_MIX_1);
                self.write_reg(set, regs::MV_OUT_OUTSTANDING_LIMIT, dma::mv_out::OUTSTANDING_LIMIT);
                self.write_reg(set, regs::MV_OUT_DATA_FIFO_DEPTH, dma::mv_out::DATA_FIFO_DEPTH);
                self.write_reg(set, regs::MV_OUT_BURST_ALIGNMENT, dma::mv_out::BURST_ALIGNMENT);
                self.write_reg(set, regs::MV_OUT_SELF_HW_FLUSH_ENABLE, 0x0);
                Ok(())
            }
            DmaChannel::SadOut => {
                self.write_reg(set, regs::SAD_OUT_CLIENT_ENABLE, u32::from(enable));
                if !enable {
                    return Ok(());
                }

                let lwidth = dma::sad_out_line_width(params.output_width);
                let lines = dma::sad_out_line_count(params.output_height);

                self.write_reg(set, regs::SAD_OUT_GEOM_BURST_LENGTH, dma::sad_out::BURST_LENGTH);
                self.write_reg(set, regs::SAD_OUT_GEOM_LWIDTH, lwidth);
                self.write_reg(set, regs::SAD_OUT_GEOM_LINE_COUNT, lines);
                self.write_reg(set, regs::SAD_OUT_GEOM_TOTAL_WIDTH, lwidth);
                self.write_reg(set, regs::SAD_OUT_GEOM_LINE_DIRECTION, 0x1);

                self.write_reg(set, regs::SAD_OUT_FRMT_PACKING, dma::sad_out::PACKING);
                self.write_reg(set, regs::SAD_OUT_FRMT_MNM, dma::sad_out::MNM);
                self.write_reg(set, regs::SAD_OUT_OUTSTANDING_LIMIT, dma::sad_out::OUTSTANDING_LIMIT);
                self.write_reg(set, regs::SAD_OUT_DATA_FIFO_DEPTH, dma::sad_out::DATA_FIFO_DEPTH);
                self.write_reg(set, regs::SAD_OUT_BURST_ALIGNMENT, dma::sad_out::BURST_ALIGNMENT);
                self.write_reg(set, regs::SAD_OUT_SELF_HW_FLUSH_ENABLE, 0x0);
                Ok(())
            }
            DmaChannel::MbmvOut => {
                self.write_reg(set, regs::MBMV_OUT_CLIENT_ENABLE, u32::from(enable));
                if !enable {
                    return Ok(());
                }

                let lwidth = dma::mbmv_line_width(params.output_width);
                let lines = dma::mbmv_line_count(params.output_height);

                self.write_reg(set, regs::MBMV_OUT_GEOM_BURST_LENGTH, dma::mbmv_out::BURST_LENGTH);
                self.write_reg(set, regs::MBMV_OUT_GEOM_LWIDTH, lwidth);
                self.write_reg(set, regs::MBMV_OUT_GEOM_LINE_COUNT, lines);
                self.write_reg(set, regs::MBMV_OUT_GEOM_TOTAL_WIDTH, lwidth);
                self.write_reg(set, regs::MBMV_OUT_GEOM_LINE_DIRECTION, 0x1);

                self.write_reg(set, regs::MBMV_OUT_FRMT_PACKING, dma::mbmv_out::PACKING);
                self.write_reg(set, regs::MBMV_OUT_FRMT_MNM, dma::mbmv_out::MNM);
                self.write_reg(set, regs::MBMV_OUT_FRMT_CH_MIX_0, dma::mbmv_out::CH_MIX_0);
                self.write_reg(set, regs::MBMV_OUT_FRMT_CH_MIX_1, dma::mbmv_out::CH_MIX_1);
                self.write_reg(set, regs::MBMV_OUT_OUTSTANDING_LIMIT, dma::mbmv_out::OUTSTANDING_LIMIT);
                self.write_reg(set, regs::MBMV_OUT_DATA_FIFO_DEPTH, dma::mbmv_out::DATA_FIFO_DEPTH);
                self.write_reg(set, regs::MBMV_OUT_BURST_ALIGNMENT, dma::mbmv_out::BURST_ALIGNMENT);
                self.write_reg(set, regs::MBMV_OUT_CLIENT_FLUSH, 0);
                Ok(())
            }
            _ => {
                tracing::error!("invalid write client {channel:?}");
                Err(LmeError::unsupported(channel, "write client setup"))
            }
        }
    }

    /// Program read client base addresses.
    ///
    /// Cache ports take a single address; the MBMV input takes a rotating
    /// pair for double buffering.
    ///
    /// # Errors
    ///
    /// [`LmeError::UnsupportedChannel`] for channels without an input
    /// address register.
    pub fn set_rdma_addr(
        &mut self,
        set: CorexSet,
        channel: DmaChannel,
        addr: [u32; 2],
    ) -> Result<()> {
        tracing::debug!("rdma addr {channel:?} {:#x}/{:#x}", addr[0], addr[1]);
        match channel {
            DmaChannel::CacheIn0 => {
                self.write_reg(set, regs::CACHE_BASE_ADDR_1P_0, addr[0]);
                Ok(())
            }
            DmaChannel::CacheIn1 => {
                self.write_reg(set, regs::CACHE_BASE_ADDR_1P_1, addr[0]);
                Ok(())
            }
            DmaChannel::MbmvIn => {
                self.write_reg(set, regs::MBMV_IN_GEOM_BASE_ADDR_0, addr[0]);

                let mut conf = 0;
                conf = regs::F_MBMV_IN_BASE_ADDR_EN_0.insert(conf, 1);
                conf = regs::F_MBMV_IN_BASE_ADDR_EN_1.insert(conf, 1);
                conf = regs::F_MBMV_IN_BASE_ADDR_ROTATION_SIZE.insert(conf, 1);
                self.write_reg(set, regs::MBMV_IN_GEOM_BASE_ADDR_CONF, conf);

                self.write_reg(set, regs::MBMV_IN_GEOM_BASE_ADDR_1, addr[1]);
                Ok(())
            }
            _ => {
                tracing::error!("invalid read address target {channel:?}");
                Err(LmeError::unsupported(channel, "read address programming"))
            }
        }
    }

    /// Program write client base addresses.
    ///
    /// Output planes are written bottom-up, so the programmed address points
    /// at the last line. MBMV output double-buffers against the MBMV input:
    /// in TNR mode slot 0 takes buffer 1 as-is and slot 1 takes buffer 0
    /// offset to its last line; fusion leaves both slots at zero.
    ///
    /// # Errors
    ///
    /// [`LmeError::UnsupportedChannel`] for channels without an output
    /// address register.
    pub fn set_wdma_addr(
        &mut self,
        set: CorexSet,
        params: &FrameParams,
        channel: DmaChannel,
        mode: LmeMode,
    ) -> Result<()> {
        match channel {
            DmaChannel::MvOut => {
                let lwidth = dma::mv_out_line_width(params.cur_input_width);
                let lines = dma::mv_out_line_count(params.cur_input_height);
                let addr = dma::last_line_addr(params.mv_out_addr, lwidth, lines);
                self.write_reg(set, regs::MV_OUT_GEOM_BASE_ADDR_0, addr);
                Ok(())
            }
            DmaChannel::SadOut => {
                let lwidth = dma::sad_out_line_width(params.cur_input_width);
                let lines = dma::sad_out_line_count(params.cur_input_height);
                let addr = dma::last_line_addr(params.sad_out_addr, lwidth, lines);
                self.write_reg(set, regs::SAD_OUT_GEOM_BASE_ADDR_0, addr);
                Ok(())
            }
            DmaChannel::MbmvOut => {
                let (addr0, addr1) = match mode {
                    LmeMode::Tnr => {
                        let lwidth = dma::mbmv_line_width(params.output_width);
                        let lines = dma::mbmv_line_count(params.output_height);
                        (
                            params.mbmv1_addr,
                            dma::last_line_addr(params.mbmv0_addr, lwidth, lines),
                        )
                    }
                    LmeMode::Fusion => (0, 0),
                };

                self.write_reg(set, regs::MBMV_OUT_GEOM_BASE_ADDR_0, addr0);

                let mut conf = 0;
                conf = regs::F_MBMV_OUT_BASE_ADDR_EN_0.insert(conf, 1);
                conf = regs::F_MBMV_OUT_BASE_ADDR_EN_1.insert(conf, 1);
                conf = regs::F_MBMV_OUT_BASE_ADDR_ROTATION_SIZE.insert(conf, 1);
                self.write_reg(set, regs::MBMV_OUT_GEOM_BASE_ADDR_CONF, conf);

                self.write_reg(set, regs::MBMV_OUT_GEOM_BASE_ADDR_1, addr1);
                Ok(())
            }
            _ => {
                tracing::error!("invalid write address target {channel:?}");
                Err(LmeError::unsupported(channel, "write address programming"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimRegisters;

    fn params_1080p() -> FrameParams {
        FrameParams {
            cur_input_width: 1920,
            cur_input_height: 1080,
            output_width: 1920,
            output_height: 1080,
            mv_out_addr: 0x4000_0000,
            sad_out_addr: 0x5000_0000,
            mbmv0_addr: 0x6000_0000,
            mbmv1_addr: 0x6100_0000,
        }
    }

    #[test]
    fn disable_writes_only_the_enable_bit() {
        let mut hw = LmeHw::new(SimRegisters::new());
        let set = CorexSet::SetA;

        // sentinel geometry left over from a previous frame
        hw.write_reg(set, regs::MV_OUT_GEOM_LWIDTH, 0xdead);
        hw.write_reg(set, regs::SAD_OUT_GEOM_LINE_COUNT, 0xbeef);
        hw.write_reg(set, regs::MBMV_IN_GEOM_LWIDTH, 0xcafe);

        hw.configure_wdma(set, &params_1080p(), DmaChannel::MvOut, false).unwrap();
        hw.configure_wdma(set, &params_1080p(), DmaChannel::SadOut, false).unwrap();
        hw.configure_rdma(set, &params_1080p(), DmaChannel::MbmvIn, false).unwrap();

        assert_eq!(hw.read_reg(set, regs::MV_OUT_CLIENT_ENABLE), 0);
        assert_eq!(hw.read_reg(set, regs::MV_OUT_GEOM_LWIDTH), 0xdead);
        assert_eq!(hw.read_reg(set, regs::SAD_OUT_GEOM_LINE_COUNT), 0xbeef);
        assert_eq!(hw.read_reg(set, regs::MBMV_IN_GEOM_LWIDTH), 0xcafe);
    }

    #[test]
    fn mv_out_geometry_1080p() {
        let mut hw = LmeHw::new(SimRegisters::new());
        let set = CorexSet::SetA;
        hw.configure_wdma(set, &params_1080p(), DmaChannel::MvOut, true).unwrap();

        assert_eq!(hw.read_reg(set, regs::MV_OUT_CLIENT_ENABLE), 1);
        assert_eq!(hw.read_reg(set, regs::MV_OUT_GEOM_LWIDTH), 4 * 240);
        assert_eq!(hw.read_reg(set, regs::MV_OUT_GEOM_LINE_COUNT), 270);
        assert_eq!(hw.read_reg(set, regs::MV_OUT_GEOM_TOTAL_WIDTH), 4 * 240);
    }

    #[test]
    fn sad_out_addr_points_at_last_line() {
        let mut hw = LmeHw::new(SimRegisters::new());
        let set = CorexSet::SetA;
        let params = params_1080p();
        hw.set_wdma_addr(set, &params, DmaChannel::SadOut, LmeMode::Tnr).unwrap();

        assert_eq!(
            hw.read_reg(set, regs::SAD_OUT_GEOM_BASE_ADDR_0),
            0x5000_0000 + 480 * 269
        );
    }

    #[test]
    fn mbmv_out_tnr_swaps_buffers() {
        let mut hw = LmeHw::new(SimRegisters::new());
        let set = CorexSet::SetA;
        let params = params_1080p();
        hw.set_wdma_addr(set, &params, DmaChannel::MbmvOut, LmeMode::Tnr).unwrap();

        let lwidth = dma::mbmv_line_width(1920);
        let lines = dma::mbmv_line_count(1080);
        assert_eq!(hw.read_reg(set, regs::MBMV_OUT_GEOM_BASE_ADDR_0), params.mbmv1_addr);
        assert_eq!(
            hw.read_reg(set, regs::MBMV_OUT_GEOM_BASE_ADDR_1),
            params.mbmv0_addr + lwidth * (lines - 1)
        );
    }

    #[test]
    fn mbmv_out_fusion_leaves_slots_zeroed() {
        let mut hw = LmeHw::new(SimRegisters::new());
        let set = CorexSet::SetA;
        hw.set_wdma_addr(set, &params_1080p(), DmaChannel::MbmvOut, LmeMode::Fusion).unwrap();

        assert_eq!(hw.read_reg(set, regs::MBMV_OUT_GEOM_BASE_ADDR_0), 0);
        assert_eq!(hw.read_reg(set, regs::MBMV_OUT_GEOM_BASE_ADDR_1), 0);
    }

    #[test]
    fn wrong_direction_is_rejected() {
        let mut hw = LmeHw::new(SimRegisters::new());
        let set = CorexSet::SetA;
        let params = params_1080p();

        assert!(matches!(
            hw.configure_rdma(set, &params, DmaChannel::MvOut, true),
            Err(LmeError::UnsupportedChannel { .. })
        ));
        assert!(matches!(
            hw.configure_wdma(set, &params, DmaChannel::CacheIn0, true),
            Err(LmeError::UnsupportedChannel { .. })
        ));
        assert!(matches!(
            hw.set_rdma_addr(set, DmaChannel::SadOut, [0, 0]),
            Err(LmeError::UnsupportedChannel { .. })
        ));
        assert!(matches!(
            hw.set_wdma_addr(set, &params, DmaChannel::MbmvIn, LmeMode::Tnr),
            Err(LmeError::UnsupportedChannel { .. })
        ));
    }

    #[test]
    fn mbmv_in_rotation_pair() {
        let mut hw = LmeHw::new(SimRegisters::new());
        let set = CorexSet::SetA;
        hw.set_rdma_addr(set, DmaChannel::MbmvIn, [0x6000_0000, 0x6100_0000]).unwrap();

        assert_eq!(hw.read_reg(set, regs::MBMV_IN_GEOM_BASE_ADDR_0), 0x6000_0000);
        assert_eq!(hw.read_reg(set, regs::MBMV_IN_GEOM_BASE_ADDR_1), 0x6100_0000);
        let conf = hw.read_reg(set, regs::MBMV_IN_GEOM_BASE_ADDR_CONF);
        assert_eq!(regs::F_MBMV_IN_BASE_ADDR_EN_0.extract(conf), 1);
        assert_eq!(regs::F_MBMV_IN_BASE_ADDR_EN_1.extract(conf), 1);
        assert_eq!(regs::F_MBMV_IN_BASE_ADDR_ROTATION_SIZE.extract(conf), 1);
    }
}
