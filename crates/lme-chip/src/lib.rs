//! Silicon model for the LME (local motion estimation) block of the Exynos
//! camera ISP.
//!
//! This crate has **no dependencies** and **no hardware access**. It is a
//! pure model of the block: register offsets and bit fields, the COREX
//! shadow-bank window layout, interrupt sources, and the per-DMA-client
//! constant tables and geometry arithmetic from the hardware integration
//! guide.
//!
//! # Crate organisation
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`regs`] | Register map and bit-field descriptors, dump list |
//! | [`bank`] | COREX shadow-bank windows and trigger/update constants |
//! | [`int`]  | Interrupt source bits, error and enable masks |
//! | [`dma`]  | DMA client identifiers, fixed client tables, stride math |

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bank;
pub mod dma;
pub mod int;
pub mod regs;
