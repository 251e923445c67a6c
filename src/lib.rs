#![no_std]

//! Async driver for the Sensirion STCC4 indoor CO2 sensor.
//!
//! The STCC4 is a thermal-conductivity CO2 sensor with on-chip temperature
//! and humidity readout, controlled over I2C with 16-bit command words and
//! CRC-protected data words. This crate speaks that protocol on top of the
//! [`embedded_hal_async`] traits, so it runs on any Embassy-supported target.

#[cfg(test)]
extern crate std;

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

mod command;
mod crc;
pub mod convert;
mod stcc4;

pub use crc::crc8;
pub use stcc4::Stcc4;

/// ADDR pin wiring, selecting one of the two supported I2C addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Address {
    /// ADDR pin connected to GND (0x64).
    #[default]
    Gnd = 0x64,
    /// ADDR pin connected to VCC (0x65).
    Vcc = 0x65,
}

/// One converted measurement frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// CO2 concentration in ppm. The register word is already 1 ppm per LSB.
    pub co2_ppm: i16,
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub humidity: f32,
}

/// Product identification read from the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProductId {
    /// Product id word, `0x0901018A` for the STCC4.
    pub id: u32,
    /// 64-bit unique serial number.
    pub serial: [u8; 8],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The bus transaction failed.
    I2c,
    /// A received word did not match its CRC byte.
    Crc,
    /// The chip answered with an unexpected product id.
    InvalidProductId(u32),
    /// The measurement frame carried a non-zero sensor status word.
    SensorStatus(u16),
    /// The factory reset result word was non-zero.
    FactoryResetFailed(u16),
    /// A raw command payload exceeded the 14-byte frame limit.
    InvalidLength,
}

/// Static chip and driver information.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipInfo {
    pub chip_name: &'static str,
    pub manufacturer_name: &'static str,
    pub interface: &'static str,
    pub supply_voltage_min_v: f32,
    pub supply_voltage_max_v: f32,
    pub max_current_ma: f32,
    pub temperature_min: f32,
    pub temperature_max: f32,
    pub driver_version: u32,
}

pub const CHIP_INFO: ChipInfo = ChipInfo {
    chip_name: "Sensirion STCC4",
    manufacturer_name: "Sensirion",
    interface: "IIC",
    supply_voltage_min_v: 2.7,
    supply_voltage_max_v: 5.5,
    max_current_ma: 4.2,
    temperature_min: -40.0,
    temperature_max: 85.0,
    driver_version: 1000,
};
