//! COREX shadow-bank window layout.
//!
//! The block exposes its register map three times within the 64 KiB
//! instance window: two shadow copies (set A and set B) that hardware
//! commits atomically on a trigger edge, and a direct window that writes
//! the live register file immediately.
//!
//! ```text
//! window   base      behaviour
//! ──────── ───────── ─────────────────────────────────────────────
//! set A    0x0000    shadow, applied on the next COREX trigger
//! set B    0x2000    shadow, applied on the next COREX trigger
//! direct   0x8000    live registers, takes effect immediately
//! ```

/// Byte stride between shadow-bank windows.
pub const BANK_STRIDE: u32 = 0x2000;

/// Base of the direct (non-shadowed) window.
pub const DIRECT_BASE: u32 = 0x8000;

/// Selects which window a register access goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CorexSet {
    /// Shadow set A.
    SetA = 0,
    /// Shadow set B.
    SetB = 1,
    /// Direct access, bypassing the shadow/commit mechanism entirely.
    Direct = 2,
}

impl CorexSet {
    /// Window base added to every register offset for this selector.
    #[must_use]
    pub const fn window(self) -> u32 {
        match self {
            Self::SetA => 0,
            Self::SetB => BANK_STRIDE,
            Self::Direct => DIRECT_BASE,
        }
    }

    /// True for the direct window.
    #[must_use]
    pub const fn is_direct(self) -> bool {
        matches!(self, Self::Direct)
    }

    /// Decode a raw selector value; `None` for anything out of range.
    #[must_use]
    pub const fn from_raw(id: u32) -> Option<Self> {
        match id {
            0 => Some(Self::SetA),
            1 => Some(Self::SetB),
            2 => Some(Self::Direct),
            _ => None,
        }
    }
}

/// What a COREX trigger does with a shadow set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum UpdateType {
    /// Leave the live registers alone.
    Ignore = 0,
    /// Copy the shadow SRAM into the live registers.
    Copy = 1,
    /// Swap shadow and live register files.
    Swap = 2,
}

/// Source of the COREX commit trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TriggerMode {
    /// Frame-synchronized hardware edge.
    Hardware = 0,
    /// Explicit software pulse.
    Software = 1,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_do_not_overlap_the_map() {
        assert!(crate::regs::MAP_SPAN <= BANK_STRIDE);
        assert!(CorexSet::SetB.window() + crate::regs::MAP_SPAN <= DIRECT_BASE);
    }

    #[test]
    fn raw_roundtrip() {
        for set in [CorexSet::SetA, CorexSet::SetB, CorexSet::Direct] {
            assert_eq!(CorexSet::from_raw(set as u32), Some(set));
        }
        assert_eq!(CorexSet::from_raw(3), None);
    }
}
