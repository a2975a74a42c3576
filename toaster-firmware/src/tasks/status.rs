//! Status reporting task
//!
//! Logs the presentation status over RTT whenever it changes.

use defmt::*;

use crate::channels::STATUS;

#[embassy_executor::task]
pub async fn status_task() {
    info!("Status task started");

    loop {
        let status = STATUS.wait().await;
        match status.current_temperature {
            Some(temp) => info!(
                "{} | {}C / {}C | {}s",
                status.phase, temp, status.threshold, status.elapsed_seconds
            ),
            None => info!(
                "{} | --C / {}C | {}s",
                status.phase, status.threshold, status.elapsed_seconds
            ),
        }
    }
}
