//! Device wrapper and banked register accessors.

use crate::mmio::RegisterIo;
use lme_chip::bank::CorexSet;
use lme_chip::regs::{Field, Reg, DUMP_LIST};
use tracing::info;

/// Bound on every register poll in this driver.
pub const TRY_COUNT: u32 = 20_000;

/// One LME hardware instance.
///
/// Wraps a [`RegisterIo`] transport and routes every access through a
/// [`CorexSet`] bank window. The caller serializes use of an instance;
/// nothing here locks, and no state outlives a call except the registers
/// themselves.
#[derive(Debug)]
pub struct LmeHw<R> {
    io: R,
}

impl<R: RegisterIo> LmeHw<R> {
    /// Wrap a register transport.
    pub fn new(io: R) -> Self {
        Self { io }
    }

    /// Borrow the underlying transport.
    pub fn io(&self) -> &R {
        &self.io
    }

    /// Mutably borrow the underlying transport.
    pub fn io_mut(&mut self) -> &mut R {
        &mut self.io
    }

    /// Unwrap the transport.
    pub fn into_inner(self) -> R {
        self.io
    }

    pub(crate) fn read_reg(&self, set: CorexSet, reg: Reg) -> u32 {
        self.io.read(set.window() + reg.offset)
    }

    pub(crate) fn write_reg(&mut self, set: CorexSet, reg: Reg, value: u32) {
        self.io.write(set.window() + reg.offset, value);
    }

    /// Read-modify-write of a single field.
    pub(crate) fn write_field(&mut self, set: CorexSet, field: Field, value: u32) {
        let offset = set.window() + field.reg.offset;
        let word = self.io.read(offset);
        self.io.write(offset, field.insert(word, value));
    }

    pub(crate) fn read_field(&self, set: CorexSet, field: Field) -> u32 {
        field.extract(self.read_reg(set, field.reg))
    }

    /// Log every register of the selected window.
    ///
    /// Called from the timeout paths; also useful on its own when bringing
    /// up a new board.
    pub fn dump(&self, set: CorexSet) {
        info!("LME register dump, {set:?} window");
        for reg in DUMP_LIST {
            let value = self.read_reg(set, *reg);
            info!("  {:<42} {:#06x} = {value:#010x}", reg.name, reg.offset);
        }
    }
}
