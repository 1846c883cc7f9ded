use crate::classifier::interface::ImageClassifier;
use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use crate::scene_labeler::core::Msg;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct SceneLabeler {
    pub config: Config,
    pub logger: Arc<dyn Logger>,
    pub device_camera: Arc<dyn DeviceCamera>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay>>,
    pub image_classifier: Arc<dyn ImageClassifier>,
    pub event_sender: Sender<Msg>,
    pub event_receiver: Arc<Mutex<Receiver<Msg>>>,
}

impl SceneLabeler {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger>,
        device_camera: Arc<dyn DeviceCamera>,
        device_display: Arc<Mutex<dyn DeviceDisplay>>,
        image_classifier: Arc<dyn ImageClassifier>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();

        Self {
            config,
            logger,
            device_camera,
            device_display,
            image_classifier,
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
        }
    }
}
