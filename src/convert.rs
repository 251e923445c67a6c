//! Raw register word scaling.
//!
//! The STCC4 exchanges physical quantities as unsigned 16-bit words. These
//! are the chip's fixed scalings, usable directly when driving the raw
//! command interface on [`Stcc4`](crate::Stcc4).

/// Celsius degrees to the temperature register word.
pub fn temperature_to_register(deg: f32) -> u16 {
    ((deg + 45.0) * 65535.0 / 175.0) as u16
}

/// Temperature register word to Celsius degrees.
pub fn temperature_to_data(reg: u16) -> f32 {
    (reg as f32) / 65535.0 * 175.0 - 45.0
}

/// Relative humidity percentage to the humidity register word.
pub fn humidity_to_register(percentage: f32) -> u16 {
    ((percentage + 6.0) * 65535.0 / 125.0) as u16
}

/// Humidity register word to relative humidity percentage.
pub fn humidity_to_data(reg: u16) -> f32 {
    (reg as f32) / 65535.0 * 125.0 - 6.0
}

/// Pressure in pascal to the pressure register word (2 Pa per LSB).
pub fn pressure_to_register(pa: f32) -> u16 {
    (pa / 2.0) as u16
}

/// Pressure register word to pascal.
pub fn pressure_to_data(reg: u16) -> f32 {
    (reg as f32) * 2.0
}

/// Forced-recalibration CO2 ppm to its offset register word.
pub fn frc_co2_to_register(ppm: f32) -> u16 {
    (ppm + 32768.0) as u16
}

/// Forced-recalibration register word to CO2 ppm.
pub fn frc_co2_to_data(reg: u16) -> f32 {
    (reg as f32) - 32768.0
}
