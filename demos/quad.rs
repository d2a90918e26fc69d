// demos/quad.rs

use flight_core::ports::{Esc, Imu, ImuSample, Radio, RcFrame, TelemetryFrame, TelemetryOut};
use flight_core::FlightCore;

struct ConsoleTelemetry;

impl TelemetryOut<f32> for ConsoleTelemetry {
    fn write(&mut self, frame: TelemetryFrame<f32>) {
        println!(
            "pitch: {:.4}, roll: {:.4}, yaw: {:.4}, batt: {:.2}",
            frame.pitch, frame.roll, frame.yaw, frame.batt_v
        );
    }
}

struct TiltedImu;

impl Imu<f32> for TiltedImu {
    fn begin(&mut self) {}

    fn read(&mut self) -> ImuSample<f32> {
        // A static, slightly tilted vehicle with a slow yaw rotation.
        ImuSample {
            ax: 0.05,
            ay: 0.1,
            az: 0.99,
            gx: 0.0,
            gy: 0.0,
            gz: 0.1,
        }
    }
}

struct FixedRadio;

impl Radio<f32> for FixedRadio {
    fn read(&mut self) -> RcFrame<f32> {
        RcFrame {
            thrust: 0.5,
            ..RcFrame::default()
        }
    }
}

struct SilentEsc;

impl Esc<f32> for SilentEsc {
    fn arm(&mut self) -> bool {
        true
    }

    fn disarm(&mut self) {}

    fn write(&mut self, _duty: f32) {}
}

fn main() {
    let mut core = FlightCore::new(
        TiltedImu,
        FixedRadio,
        ConsoleTelemetry,
        [SilentEsc, SilentEsc, SilentEsc, SilentEsc],
    );

    core.init();
    if !core.arm() {
        println!("arming failed, staying disarmed");
    }

    // Externally clocked loop; each tick covers 10 ms.
    for _ in 0..50 {
        core.update(0.01);
    }

    core.disarm();
}
