#![no_std]
#![no_main]

//! Low-power pattern: wake, trigger one measurement, read, sleep again.

use defmt::{error, info, unwrap};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::peripherals::I2C0;
use embassy_rp::{bind_interrupts, i2c};
use embassy_stcc4_sensor::Stcc4;
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

    let mut sensor = Stcc4::new(i2c, Delay);

    unwrap!(sensor.init().await);

    loop {
        unwrap!(sensor.exit_sleep_mode().await);

        unwrap!(sensor.measure_single_shot().await);
        match sensor.read().await {
            Ok(data) => {
                info!(
                    "CO2: {}ppm, Temperature: {}°C, Humidity: {}%",
                    data.co2_ppm, data.temperature, data.humidity
                );
            }
            Err(e) => error!("Read failed: {}", e),
        }

        unwrap!(sensor.enter_sleep_mode().await);
        Timer::after(Duration::from_secs(30)).await;
    }
}
