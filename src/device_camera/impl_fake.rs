use crate::device_camera::interface::{DeviceCamera, DeviceCameraEvent};
use crate::library::logger::interface::Logger;
use std::sync::Arc;

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Starting camera...")?;
        std::thread::sleep(std::time::Duration::from_millis(500));
        self.logger.info("Camera started")?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Stopping camera...")?;
        self.logger.info("Camera stopped")?;
        Ok(())
    }

    fn capture_frame(&self) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Capturing frame...")?;
        std::thread::sleep(std::time::Duration::from_millis(100));
        let frame = vec![0; 224 * 224 * 3];
        self.logger.info("Frame captured")?;
        Ok(frame)
    }

    fn events(&self) -> std::sync::mpsc::Receiver<DeviceCameraEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(500));
            let _ = tx.send(DeviceCameraEvent::Connected);
            // Hold the sender so subscribers keep blocking instead of
            // seeing a disconnected channel
            loop {
                std::thread::park();
            }
        });
        rx
    }
}

#[cfg(test)]
mod impl_fake_test {
    use super::DeviceCameraFake;
    use crate::device_camera::interface::{DeviceCamera, DeviceCameraEvent};
    use crate::library::logger::impl_console::LoggerConsole;
    use std::sync::mpsc::RecvTimeoutError;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_events_channel_stays_open_after_connected() {
        let logger = Arc::new(LoggerConsole::new(chrono::FixedOffset::west_opt(0).unwrap()));
        let camera = DeviceCameraFake::new(logger);

        let events = camera.events();

        let event = events
            .recv_timeout(Duration::from_secs(2))
            .expect("fake camera should connect");
        assert!(matches!(event, DeviceCameraEvent::Connected));

        // No further events, but the channel must not disconnect
        assert!(matches!(
            events.recv_timeout(Duration::from_millis(100)),
            Err(RecvTimeoutError::Timeout)
        ));
    }
}
