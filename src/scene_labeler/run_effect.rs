use super::main::SceneLabeler;
use crate::scene_labeler::core::{Effect, Msg};
use std::time::Instant;

impl SceneLabeler {
    pub fn run_effect(&self, effect: Effect) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::SubscribeToCameraEvents => {
                let events = self.device_camera.events();
                loop {
                    match events.recv() {
                        Ok(event) => {
                            let _ = self.event_sender.send(Msg::CameraEvent(event));
                        }
                        // A disconnected channel can never deliver again
                        Err(_) => break,
                    }
                }
            }
            Effect::SubscribeTick => loop {
                std::thread::sleep(self.config.tick_rate);
                if self.event_sender.send(Msg::Tick(Instant::now())).is_err() {
                    continue;
                }
            },
            Effect::StartCamera => {
                let started = self.device_camera.start();
                let _ = self.event_sender.send(Msg::CameraStartDone(started));
            }
            Effect::LoadStillImage => {
                let loaded = std::fs::read(&self.config.still_image_path)
                    .map_err(|e| e.into());
                let _ = self.event_sender.send(Msg::StillLoadDone(loaded));
            }
            Effect::CaptureFrame => {
                let frame = self.device_camera.capture_frame();
                let _ = self.event_sender.send(Msg::FrameCaptureDone(frame));
            }
            Effect::ClassifyImage { image } => {
                let distribution = self.image_classifier.classify(&image);
                let _ = self.event_sender.send(Msg::ClassifyDone(distribution));
            }
        }
    }
}
