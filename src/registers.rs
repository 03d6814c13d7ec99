// src/registers.rs

// Field values for the MSi001 internal control registers. A register write
// is a 24-bit word: the register number sits in bits 0:3, the fields below
// pack into bits 4:23. Shifting and packing is the caller's job; the bit
// ranges in the comments tell it where each field goes.

// Register 0: IC Mode / Power Control

// reg0 bits 4:8 (AM_MODE, VHF_MODE, B3_MODE, B45_MODE, BL_MODE), one-hot
pub const MIRISDR_MODE_AM: u32 = 0x01;
pub const MIRISDR_MODE_VHF: u32 = 0x02;
pub const MIRISDR_MODE_B3: u32 = 0x04;
pub const MIRISDR_MODE_B45: u32 = 0x08;
pub const MIRISDR_MODE_BL: u32 = 0x10;

// reg0 bit 9 (AM_MODE2)
pub const MIRISDR_UPCONVERT_MIXER_OFF: u32 = 0;
pub const MIRISDR_UPCONVERT_MIXER_ON: u32 = 1;

// reg0 bit 10 (RF_SYNTH)
pub const MIRISDR_RF_SYNTHESIZER_OFF: u32 = 0;
pub const MIRISDR_RF_SYNTHESIZER_ON: u32 = 1;

// reg0 bit 11 (AM_PORT_SEL)
pub const MIRISDR_AM_PORT1: u32 = 0;
pub const MIRISDR_AM_PORT2: u32 = 1;

// reg0 bits 12:13 (FIL_MODE_SEL0, FIL_MODE_SEL1)
pub const MIRISDR_IF_MODE_2048KHZ: u32 = 0;
pub const MIRISDR_IF_MODE_1620KHZ: u32 = 1;
pub const MIRISDR_IF_MODE_450KHZ: u32 = 2;
pub const MIRISDR_IF_MODE_ZERO: u32 = 3;

// reg0 bits 14:16 (FIL_BW_SEL0 - FIL_BW_SEL2): no named values

// reg0 bits 17:19 (XTAL_SEL0 - XTAL_SEL2): no named values

// reg0 bits 20:22 (IF_LPMODE0 - IF_LPMODE2)
pub const MIRISDR_IF_LPMODE_NORMAL: u32 = 0;
pub const MIRISDR_IF_LPMODE_ONLY_Q: u32 = 1;
pub const MIRISDR_IF_LPMODE_ONLY_I: u32 = 2;
pub const MIRISDR_IF_LPMODE_LOW_POWER: u32 = 4;

// reg0 bit 23 (VCO_LPMODE)
pub const MIRISDR_VCO_LPMODE_NORMAL: u32 = 0;
pub const MIRISDR_VCO_LPMODE_LOW_POWER: u32 = 1;

// Register 2: Synthesizer Programming

// reg2 bits 4:15 (FRAC0 - FRAC11): fractional divisor, no named values

// reg2 bits 16:21 (INT0 - INT5): integer divisor, no named values

// reg2 bit 22 (LNACAL_EN)
pub const MIRISDR_LBAND_LNA_CALIBRATION_OFF: u32 = 0;
pub const MIRISDR_LBAND_LNA_CALIBRATION_ON: u32 = 1;

// Register 5: RF Synthesizer Configuration

// reg5 bits 4:15 (THRESH0 - THRESH11): no named values

// reg5 bits 16:21 (reserved): must be programmed to this value
pub const MIRISDR_RF_SYNTHESIZER_RESERVED_PROGRAMMING: u32 = 0x28;

// Register 1: Receiver Gain Control

// reg1 bits 4:9 (BBGAIN0 - BBGAIN5): baseband gain reduction code
pub const MIRISDR_BASEBAND_GAIN_REDUCTION_MIN: u32 = 0;
pub const MIRISDR_BASEBAND_GAIN_REDUCTION_MAX: u32 = 0x3B;

// reg1 bits 10:11 (MIXBU0, MIXBU1) - AM port 1
pub const MIRISDR_AM_PORT1_BLOCKUP_CONVERT_GAIN_REDUCTION_0DB: u32 = 0;
pub const MIRISDR_AM_PORT1_BLOCKUP_CONVERT_GAIN_REDUCTION_6DB: u32 = 1;
pub const MIRISDR_AM_PORT1_BLOCKUP_CONVERT_GAIN_REDUCTION_12DB: u32 = 2;
pub const MIRISDR_AM_PORT1_BLOCKUP_CONVERT_GAIN_REDUCTION_18DB: u32 = 3;

// reg1 bits 10:11 (MIXBU0, MIXBU1) - AM port 2
pub const MIRISDR_AM_PORT2_BLOCKUP_CONVERT_GAIN_REDUCTION_0DB: u32 = 0;
pub const MIRISDR_AM_PORT2_BLOCKUP_CONVERT_GAIN_REDUCTION_24DB: u32 = 3;

// reg1 bit 12 (MIXL)
pub const MIRISDR_LNA_GAIN_REDUCTION_OFF: u32 = 0;
pub const MIRISDR_LNA_GAIN_REDUCTION_ON: u32 = 1;

// reg1 bit 13 (LNAGR)
pub const MIRISDR_MIXER_GAIN_REDUCTION_OFF: u32 = 0;
pub const MIRISDR_MIXER_GAIN_REDUCTION_ON: u32 = 1;

// reg1 bits 14:16 (DCCAL0 - DCCAL2)
pub const MIRISDR_DC_OFFSET_CALIBRATION_STATIC: u32 = 0;
pub const MIRISDR_DC_OFFSET_CALIBRATION_PERIODIC1: u32 = 1;
pub const MIRISDR_DC_OFFSET_CALIBRATION_PERIODIC2: u32 = 2;
pub const MIRISDR_DC_OFFSET_CALIBRATION_PERIODIC3: u32 = 3;
pub const MIRISDR_DC_OFFSET_CALIBRATION_ONE_SHOT: u32 = 4;
pub const MIRISDR_DC_OFFSET_CALIBRATION_CONTINUOUS: u32 = 5;

// reg1 bit 17 (DCCAL_SPEEDUP)
pub const MIRISDR_DC_OFFSET_CALIBRATION_SPEEDUP_OFF: u32 = 0;
pub const MIRISDR_DC_OFFSET_CALIBRATION_SPEEDUP_ON: u32 = 1;

// Register 6: DC Offset Calibration setup

// reg6 bits 4:7 (DCTRK_TIM0 - DCTRK_TIM3): no named values

// reg6 bits 8:21 (DCRATE_TIM0 - DCRATE_TIM11): no named values
