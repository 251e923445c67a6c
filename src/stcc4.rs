use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::command::{Command, GENERAL_CALL_ADDRESS, MAX_FRAME_LEN, SOFT_RESET_BYTE, WAKE_UP_BYTE};
use crate::convert;
use crate::crc::{crc8, parse_word};
use crate::{Address, Error, Measurement, ProductId};

const PRODUCT_ID_STCC4: u32 = 0x0901_018A;

/// STCC4 driver over an owned I2C bus and delay provider.
pub struct Stcc4<I2C, D> {
    i2c: I2C,
    delay: D,
    address: Address,
}

impl<I2C: I2c, D: DelayNs> Stcc4<I2C, D> {
    /// Create a driver at the default address (ADDR pin to GND).
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::new_with_address(i2c, delay, Address::default())
    }

    pub fn new_with_address(i2c: I2C, delay: D, address: Address) -> Self {
        Self { i2c, delay, address }
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = address;
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Release the underlying bus and delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Bring the chip into a known state and verify it is an STCC4.
    ///
    /// Issues a soft reset over the I2C general call, then reads the
    /// product id and checks it against the STCC4's `0x0901018A`.
    pub async fn init(&mut self) -> Result<(), Error> {
        self.perform_soft_reset().await?;

        let product = self.product_id().await?;
        if product.id != PRODUCT_ID_STCC4 {
            warn!("stcc4: product id {} is invalid", product.id);
            return Err(Error::InvalidProductId(product.id));
        }
        debug!("stcc4: found chip, serial {}", product.serial);

        Ok(())
    }

    /// Read the latest measurement frame.
    ///
    /// Valid once per second in continuous mode, or after
    /// [`measure_single_shot`](Self::measure_single_shot) has completed.
    /// All four words of the frame are CRC-checked; a non-zero sensor
    /// status word fails the read with [`Error::SensorStatus`].
    pub async fn read(&mut self) -> Result<Measurement, Error> {
        let mut buf = [0u8; 12];
        self.read_frame(Command::ReadMeasurement as u16, &[], 1, &mut buf)
            .await?;

        let co2_raw = parse_word(&buf[0..3])? as i16;
        let temperature_raw = parse_word(&buf[3..6])?;
        let humidity_raw = parse_word(&buf[6..9])?;
        let status = parse_word(&buf[9..12])?;
        if status != 0 {
            warn!("stcc4: sensor status {} is invalid", status);
            return Err(Error::SensorStatus(status));
        }

        Ok(Measurement {
            co2_ppm: co2_raw,
            temperature: convert::temperature_to_data(temperature_raw),
            humidity: convert::humidity_to_data(humidity_raw),
        })
    }

    /// Start the 1 Hz continuous measurement mode.
    pub async fn start_continuous_measurement(&mut self) -> Result<(), Error> {
        self.write_frame(Command::StartContinuousMeasurement as u16, &[])
            .await?;
        self.delay.delay_ms(1000).await;
        Ok(())
    }

    /// Stop continuous measurement and return to idle.
    pub async fn stop_continuous_measurement(&mut self) -> Result<(), Error> {
        self.write_frame(Command::StopContinuousMeasurement as u16, &[])
            .await?;
        self.delay.delay_ms(1200).await;
        Ok(())
    }

    /// Trigger one measurement from idle. Takes 500 ms to execute.
    pub async fn measure_single_shot(&mut self) -> Result<(), Error> {
        self.write_frame(Command::MeasureSingleShot as u16, &[]).await?;
        self.delay.delay_ms(500).await;
        Ok(())
    }

    /// Feed external temperature and humidity into the CO2 compensation.
    pub async fn set_rht_compensation(
        &mut self,
        temperature: f32,
        humidity: f32,
    ) -> Result<(), Error> {
        let t = convert::temperature_to_register(temperature).to_be_bytes();
        let h = convert::humidity_to_register(humidity).to_be_bytes();
        let payload = [t[0], t[1], crc8(&t), h[0], h[1], crc8(&h)];
        self.write_frame(Command::SetRhtCompensation as u16, &payload)
            .await?;
        self.delay.delay_ms(1).await;
        Ok(())
    }

    /// Feed external ambient pressure (pascal) into the CO2 compensation.
    pub async fn set_pressure_compensation(&mut self, pascal: f32) -> Result<(), Error> {
        let p = convert::pressure_to_register(pascal).to_be_bytes();
        let payload = [p[0], p[1], crc8(&p)];
        self.write_frame(Command::SetPressureCompensation as u16, &payload)
            .await?;
        self.delay.delay_ms(1).await;
        Ok(())
    }

    /// Enter the low-power sleep mode. Only valid from idle.
    pub async fn enter_sleep_mode(&mut self) -> Result<(), Error> {
        self.write_frame(Command::EnterSleepMode as u16, &[]).await?;
        self.delay.delay_ms(1).await;
        Ok(())
    }

    /// Wake the chip from sleep mode.
    pub async fn exit_sleep_mode(&mut self) -> Result<(), Error> {
        // A sleeping chip NAKs the wake byte but wakes anyway.
        let _ = self.i2c.write(self.address as u8, &[WAKE_UP_BYTE]).await;
        self.delay.delay_ms(5).await;
        Ok(())
    }

    /// Run the 22 s conditioning sequence recommended after long storage.
    pub async fn perform_conditioning(&mut self) -> Result<(), Error> {
        self.write_frame(Command::PerformConditioning as u16, &[]).await?;
        self.delay.delay_ms(22000).await;
        Ok(())
    }

    /// Reset the chip over the I2C general call.
    pub async fn perform_soft_reset(&mut self) -> Result<(), Error> {
        // The general call is not acknowledged; the reset happens regardless.
        let _ = self
            .i2c
            .write(GENERAL_CALL_ADDRESS, &[SOFT_RESET_BYTE])
            .await;
        self.delay.delay_ms(10).await;
        Ok(())
    }

    /// Restore factory calibration, discarding FRC and ASC history.
    pub async fn perform_factory_reset(&mut self) -> Result<(), Error> {
        let mut buf = [0u8; 2];
        self.read_frame(Command::PerformFactoryReset as u16, &[], 90, &mut buf)
            .await?;
        let result = u16::from_be_bytes(buf);
        if result != 0 {
            warn!("stcc4: factory reset not passed: {}", result);
            return Err(Error::FactoryResetFailed(result));
        }
        Ok(())
    }

    /// Run the built-in self test. Takes 360 ms; 0 means all checks passed.
    pub async fn perform_self_test(&mut self) -> Result<u16, Error> {
        let mut buf = [0u8; 3];
        self.read_frame(Command::PerformSelfTest as u16, &[], 360, &mut buf)
            .await?;
        parse_word(&buf)
    }

    pub async fn enable_testing_mode(&mut self) -> Result<(), Error> {
        self.write_frame(Command::EnableTestingMode as u16, &[]).await
    }

    pub async fn disable_testing_mode(&mut self) -> Result<(), Error> {
        self.write_frame(Command::DisableTestingMode as u16, &[]).await
    }

    /// Calibrate against a known reference concentration.
    ///
    /// The chip must have measured for at least one minute in the target
    /// environment and then be idle. Returns the correction it applied,
    /// in ppm.
    pub async fn perform_forced_recalibration(
        &mut self,
        target_co2_ppm: f32,
    ) -> Result<f32, Error> {
        let target = convert::frc_co2_to_register(target_co2_ppm).to_be_bytes();
        let payload = [target[0], target[1], crc8(&target)];
        let mut out = [0u8; 3];
        self.read_frame(
            Command::PerformForcedRecalibration as u16,
            &payload,
            90,
            &mut out,
        )
        .await?;
        let correction = parse_word(&out)?;
        Ok(convert::frc_co2_to_data(correction))
    }

    /// Read the product id word and the 64-bit unique serial number.
    pub async fn product_id(&mut self) -> Result<ProductId, Error> {
        let mut buf = [0u8; 18];
        self.read_frame(Command::GetProductId as u16, &[], 1, &mut buf)
            .await?;

        let mut words = [0u16; 6];
        for (word, chunk) in words.iter_mut().zip(buf.chunks_exact(3)) {
            *word = parse_word(chunk)?;
        }

        let id = ((words[0] as u32) << 16) | words[1] as u32;
        let mut serial = [0u8; 8];
        for (pair, word) in serial.chunks_exact_mut(2).zip(&words[2..]) {
            pair.copy_from_slice(&word.to_be_bytes());
        }

        Ok(ProductId { id, serial })
    }

    /// Send an arbitrary command word with a raw payload.
    ///
    /// Escape hatch for commands this driver does not wrap. The payload
    /// must carry its own CRC bytes; see [`crc8`](crate::crc8).
    pub async fn send_command(&mut self, command: u16, data: &[u8]) -> Result<(), Error> {
        self.write_frame(command, data).await
    }

    /// Send an arbitrary command word and read back a raw reply after
    /// `delay_ms` of execution time.
    pub async fn read_command(
        &mut self,
        command: u16,
        buf: &mut [u8],
        delay_ms: u32,
    ) -> Result<(), Error> {
        self.read_frame(command, &[], delay_ms, buf).await
    }

    async fn write_frame(&mut self, command: u16, data: &[u8]) -> Result<(), Error> {
        if data.len() + 2 > MAX_FRAME_LEN {
            return Err(Error::InvalidLength);
        }
        let mut buf = [0u8; MAX_FRAME_LEN];
        buf[..2].copy_from_slice(&command.to_be_bytes());
        buf[2..2 + data.len()].copy_from_slice(data);
        self.i2c
            .write(self.address as u8, &buf[..2 + data.len()])
            .await
            .map_err(|_| Error::I2c)
    }

    async fn read_frame(
        &mut self,
        command: u16,
        data: &[u8],
        delay_ms: u32,
        out: &mut [u8],
    ) -> Result<(), Error> {
        self.write_frame(command, data).await?;
        self.delay.delay_ms(delay_ms).await;
        self.i2c
            .read(self.address as u8, out)
            .await
            .map_err(|_| Error::I2c)
    }
}
