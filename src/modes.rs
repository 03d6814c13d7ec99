// src/modes.rs

// Scoped spellings of the multi-valued register fields. Discriminants are
// the raw field values from `registers`, so `as u32` drops straight into a
// register word.

use core::fmt::{Debug, Formatter, Result};
use ufmt::{uDebug, uWrite};

// reg0 bits 12:13 (FIL_MODE_SEL0, FIL_MODE_SEL1)
#[derive(Clone, Copy, PartialEq)]
#[repr(u32)]
pub enum IfMode {
    Khz2048 = 0,
    Khz1620 = 1,
    Khz450 = 2,
    Zero = 3,
}

// reg0 bits 20:22 (IF_LPMODE0 - IF_LPMODE2)
#[derive(Clone, Copy, PartialEq)]
#[repr(u32)]
pub enum IfLpMode {
    Normal = 0,
    OnlyQ = 1,
    OnlyI = 2,
    LowPower = 4,
}

// reg1 bits 14:16 (DCCAL0 - DCCAL2)
#[derive(Clone, Copy, PartialEq)]
#[repr(u32)]
pub enum DcOffsetCal {
    Static = 0,
    Periodic1 = 1,
    Periodic2 = 2,
    Periodic3 = 3,
    OneShot = 4,
    Continuous = 5,
}

impl Debug for IfMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            IfMode::Khz2048 => write!(f, "Khz2048"),
            IfMode::Khz1620 => write!(f, "Khz1620"),
            IfMode::Khz450 => write!(f, "Khz450"),
            IfMode::Zero => write!(f, "Zero"),
        }
    }
}

impl uDebug for IfMode {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<W>) -> core::result::Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            IfMode::Khz2048 => f.write_str("Khz2048"),
            IfMode::Khz1620 => f.write_str("Khz1620"),
            IfMode::Khz450 => f.write_str("Khz450"),
            IfMode::Zero => f.write_str("Zero"),
        }
    }
}

impl Debug for IfLpMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            IfLpMode::Normal => write!(f, "Normal"),
            IfLpMode::OnlyQ => write!(f, "OnlyQ"),
            IfLpMode::OnlyI => write!(f, "OnlyI"),
            IfLpMode::LowPower => write!(f, "LowPower"),
        }
    }
}

impl uDebug for IfLpMode {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<W>) -> core::result::Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            IfLpMode::Normal => f.write_str("Normal"),
            IfLpMode::OnlyQ => f.write_str("OnlyQ"),
            IfLpMode::OnlyI => f.write_str("OnlyI"),
            IfLpMode::LowPower => f.write_str("LowPower"),
        }
    }
}

impl Debug for DcOffsetCal {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            DcOffsetCal::Static => write!(f, "Static"),
            DcOffsetCal::Periodic1 => write!(f, "Periodic1"),
            DcOffsetCal::Periodic2 => write!(f, "Periodic2"),
            DcOffsetCal::Periodic3 => write!(f, "Periodic3"),
            DcOffsetCal::OneShot => write!(f, "OneShot"),
            DcOffsetCal::Continuous => write!(f, "Continuous"),
        }
    }
}

impl uDebug for DcOffsetCal {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<W>) -> core::result::Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            DcOffsetCal::Static => f.write_str("Static"),
            DcOffsetCal::Periodic1 => f.write_str("Periodic1"),
            DcOffsetCal::Periodic2 => f.write_str("Periodic2"),
            DcOffsetCal::Periodic3 => f.write_str("Periodic3"),
            DcOffsetCal::OneShot => f.write_str("OneShot"),
            DcOffsetCal::Continuous => f.write_str("Continuous"),
        }
    }
}
