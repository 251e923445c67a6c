#![no_std]
#![no_main]

use defmt::{error, info, unwrap};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::peripherals::I2C0;
use embassy_rp::{bind_interrupts, i2c};
use embassy_stcc4_sensor::{Error, Stcc4};
use embassy_time::{Delay, Duration, Timer};
use panic_probe as _;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let p = embassy_rp::init(Default::default());

    let sda = p.PIN_0;
    let scl = p.PIN_1;

    // Configure I2C
    let i2c = i2c::I2c::new_async(p.I2C0, scl, sda, Irqs, Default::default());

    // Create sensor instance, ADDR pin to GND
    let mut sensor = Stcc4::new(i2c, Delay);

    unwrap!(sensor.init().await);
    let product = unwrap!(sensor.product_id().await);
    info!("Found STCC4, serial {}", product.serial);

    unwrap!(sensor.start_continuous_measurement().await);

    // Read sensor data
    loop {
        Timer::after(Duration::from_secs(1)).await;

        match sensor.read().await {
            Ok(data) => {
                info!(
                    "CO2: {}ppm, Temperature: {}°C, Humidity: {}%",
                    data.co2_ppm, data.temperature, data.humidity
                );
            }
            Err(e) => match e {
                Error::I2c => error!("I2C communication error"),
                Error::Crc => error!("CRC check failed"),
                Error::SensorStatus(status) => error!("Sensor status invalid: {}", status),
                _ => error!("Unexpected error"),
            },
        }
    }
}
