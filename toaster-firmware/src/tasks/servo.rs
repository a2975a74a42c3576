//! Servo pulse task

use defmt::*;
use toaster_hal_rp2040::ServoOutput;

/// Generate the servo signal for the width the controller last set
#[embassy_executor::task]
pub async fn servo_task(mut output: ServoOutput<'static>) {
    info!("Servo task started");
    output.run().await
}
