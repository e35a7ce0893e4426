//! Walk through a full frame configuration against the simulated block.
//!
//! Shows the call order the pipeline layer uses. Run with
//! `RUST_LOG=lme_driver=debug` to watch every register access.

use anyhow::Result;
use lme_driver::prelude::*;
use lme_driver::sim::SimRegisters;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lme_driver=info".into()),
        )
        .init();

    let mut hw = LmeHw::new(SimRegisters::new());
    let set = CorexSet::SetA;

    let params = FrameParams {
        cur_input_width: 1920,
        cur_input_height: 1080,
        output_width: 1920,
        output_height: 1080,
        mv_out_addr: 0x4000_0000,
        sad_out_addr: 0x5000_0000,
        mbmv0_addr: 0x6000_0000,
        mbmv1_addr: 0x6100_0000,
    };

    let polls = hw.reset()?;
    println!("reset complete after {polls} polls");

    hw.set_clock(true);
    hw.configure_core(set);

    hw.configure_cache(set);
    hw.set_cache_size(set, (1920, 1080), (1920, 1080));
    hw.configure_mvct(set);
    hw.set_mvct_size(set, 1920, 1080);

    for channel in [DmaChannel::CacheIn0, DmaChannel::CacheIn1, DmaChannel::MbmvIn] {
        hw.configure_rdma(set, &params, channel, true)?;
    }
    for channel in [DmaChannel::MvOut, DmaChannel::SadOut, DmaChannel::MbmvOut] {
        hw.configure_wdma(set, &params, channel, true)?;
        hw.set_wdma_addr(set, &params, channel, LmeMode::Tnr)?;
    }
    hw.set_rdma_addr(set, DmaChannel::CacheIn0, [0x1000_0000, 0])?;
    hw.set_rdma_addr(set, DmaChannel::CacheIn1, [0x2000_0000, 0])?;
    hw.set_rdma_addr(set, DmaChannel::MbmvIn, [params.mbmv0_addr, params.mbmv1_addr])?;

    hw.set_first_frame(true);
    hw.init_corex(true)?;
    hw.start_corex(true)?;
    println!("streaming configuration committed");

    // pretend the hardware finished a frame
    hw.io().raise_irq(LmeEvent::FrameStart.mask() | LmeEvent::FrameEnd.mask());
    let state = hw.interrupt_state(set, true);
    println!(
        "frame done: start={} end={} errors={:#x}",
        state.has(LmeEvent::FrameStart),
        state.has(LmeEvent::FrameEnd),
        state.errors
    );

    hw.wait_idle(set)?;
    hw.init_corex(false)?;
    hw.set_clock(false);
    println!("block stopped");

    Ok(())
}
