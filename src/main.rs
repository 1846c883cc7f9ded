use classifier::impl_fake::ImageClassifierFake;
use config::Config;
use device_camera::impl_fake::DeviceCameraFake;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use scene_labeler::main::SceneLabeler;
use std::sync::{Arc, Mutex};

mod classifier;
mod config;
mod device_camera;
mod device_display;
mod library;
mod ranking;
mod scene_labeler;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera = Arc::new(DeviceCameraFake::new(logger.clone()));

    let device_display: Arc<Mutex<dyn DeviceDisplay>> = if config.use_gui_display {
        Arc::new(Mutex::new(DeviceDisplayGui::new()))
    } else {
        Arc::new(Mutex::new(DeviceDisplayConsole::new()))
    };

    let image_classifier = Arc::new(ImageClassifierFake::new(logger.clone()));

    let scene_labeler = SceneLabeler::new(
        config,
        logger,
        device_camera,
        device_display,
        image_classifier,
    );

    scene_labeler.run()?;

    Ok(())
}
