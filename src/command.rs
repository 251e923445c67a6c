/// STCC4 command map (Sensirion STCC4 datasheet, section 3.4).
///
/// Every operation is a 16-bit command word sent big-endian, optionally
/// followed by CRC-protected argument words. Commands that answer do so
/// only after a command-specific execution time, during which the chip
/// NAKs read headers.
///
/// Key groups:
/// - **Measurement control** - start/stop continuous, single shot
/// - **Compensation** - RHT (0xE000) and pressure (0xE016) inputs
/// - **Power** - enter sleep (0x3650); wake-up is a one-byte special
/// - **Maintenance** - conditioning, self test, factory reset, forced
///   recalibration, testing mode, product id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub(crate) enum Command {
    StartContinuousMeasurement = 0x218B,
    StopContinuousMeasurement = 0x3F86,
    ReadMeasurement = 0xEC05,
    SetRhtCompensation = 0xE000,
    SetPressureCompensation = 0xE016,
    MeasureSingleShot = 0x219D,
    EnterSleepMode = 0x3650,
    PerformConditioning = 0x29BC,
    PerformFactoryReset = 0x3632,
    PerformSelfTest = 0x278C,
    EnableTestingMode = 0x3FBC,
    DisableTestingMode = 0x3F3D,
    PerformForcedRecalibration = 0x362F,
    GetProductId = 0x365B,
}

/// Single-byte wake-up, written to the sensor address itself.
pub(crate) const WAKE_UP_BYTE: u8 = 0x00;

/// Single-byte soft reset, written to the I2C general-call address.
pub(crate) const SOFT_RESET_BYTE: u8 = 0x06;

/// I2C general-call address used by the soft reset.
pub(crate) const GENERAL_CALL_ADDRESS: u8 = 0x00;

/// Longest accepted argument payload: command word plus 14 data bytes.
pub(crate) const MAX_FRAME_LEN: usize = 16;
