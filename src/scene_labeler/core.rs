use crate::config::Config;
use crate::device_camera::interface::DeviceCameraEvent;
use crate::ranking::{top_k, Distribution, LabelScore};
use std::time::Instant;

pub type RankedList = Vec<LabelScore>;

#[derive(Debug, Clone, Default)]
pub enum CameraState {
    #[default]
    Disconnected,
    Connected(Instant),
    Started,
}

/// What the inference pipeline is currently doing. At most one capture or
/// classification is in flight at a time; frames arriving while busy are
/// dropped.
#[derive(Debug, Clone)]
pub enum Phase {
    LoadingStill,
    ClassifyingStill,
    AwaitingFrame { last_done: Instant },
    CapturingFrame,
    ClassifyingFrame,
}

#[derive(Debug, Clone)]
pub struct Model {
    pub camera: CameraState,
    pub phase: Phase,
    pub latest: Option<RankedList>,
}

#[derive(Debug)]
pub enum Msg {
    Tick(Instant),
    CameraEvent(DeviceCameraEvent),
    CameraStartDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    StillLoadDone(Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>),
    FrameCaptureDone(Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>),
    ClassifyDone(Result<Distribution, Box<dyn std::error::Error + Send + Sync>>),
}

impl Msg {
    pub fn to_display_string(&self) -> String {
        match self {
            Msg::StillLoadDone(Ok(_)) => format!("{:?}", Msg::StillLoadDone(Ok(vec![]))),
            Msg::FrameCaptureDone(Ok(_)) => {
                format!("{:?}", Msg::FrameCaptureDone(Ok(vec![])))
            }
            msg => format!("{:?}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubscribeToCameraEvents,
    SubscribeTick,
    StartCamera,
    LoadStillImage,
    CaptureFrame,
    ClassifyImage { image: Vec<u8> },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::ClassifyImage { .. } => {
                format!("{:?}", Effect::ClassifyImage { image: vec![] })
            }
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init() -> (Model, Vec<Effect>) {
    (
        Model {
            camera: CameraState::default(),
            phase: Phase::LoadingStill,
            latest: None,
        },
        vec![
            Effect::SubscribeToCameraEvents,
            Effect::SubscribeTick,
            Effect::LoadStillImage,
        ],
    )
}

pub fn transition(config: &Config, mut model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match msg {
        // Camera lifecycle, independent of the inference phase
        Msg::CameraEvent(DeviceCameraEvent::Connected) => {
            model.camera = CameraState::Connected(Instant::now());
            (model, vec![Effect::StartCamera])
        }
        Msg::CameraEvent(DeviceCameraEvent::Disconnected) => {
            model.camera = CameraState::Disconnected;
            if matches!(model.phase, Phase::CapturingFrame) {
                model.phase = Phase::AwaitingFrame {
                    last_done: Instant::now(),
                };
            }
            (model, vec![])
        }
        Msg::CameraStartDone(Ok(())) => {
            model.camera = CameraState::Started;
            (model, vec![])
        }
        Msg::CameraStartDone(Err(_)) => {
            model.camera = CameraState::Disconnected;
            (model, vec![])
        }

        // Startup path: the bundled still image runs through the same
        // classify-and-rank pipeline as live frames
        Msg::StillLoadDone(result) => match (model.phase.clone(), result) {
            (Phase::LoadingStill, Ok(image)) => {
                model.phase = Phase::ClassifyingStill;
                (model, vec![Effect::ClassifyImage { image }])
            }
            (Phase::LoadingStill, Err(_)) => {
                model.phase = Phase::AwaitingFrame {
                    last_done: Instant::now(),
                };
                (model, vec![])
            }
            _ => (model, vec![]),
        },

        // Live loop
        Msg::Tick(now) => match model.phase.clone() {
            Phase::AwaitingFrame { last_done }
                if matches!(model.camera, CameraState::Started)
                    && now.duration_since(last_done) >= config.capture_rate =>
            {
                model.phase = Phase::CapturingFrame;
                (model, vec![Effect::CaptureFrame])
            }
            _ => (model, vec![]),
        },
        Msg::FrameCaptureDone(result) => match (model.phase.clone(), result) {
            (Phase::CapturingFrame, Ok(frame)) => {
                model.phase = Phase::ClassifyingFrame;
                (model, vec![Effect::ClassifyImage { image: frame }])
            }
            (Phase::CapturingFrame, Err(_)) => {
                model.phase = Phase::AwaitingFrame {
                    last_done: Instant::now(),
                };
                (model, vec![])
            }
            _ => (model, vec![]),
        },
        Msg::ClassifyDone(result) => {
            if matches!(
                model.phase,
                Phase::ClassifyingStill | Phase::ClassifyingFrame
            ) {
                if let Ok(distribution) = result {
                    model.latest = Some(rank(config, &distribution));
                }
                model.phase = Phase::AwaitingFrame {
                    last_done: Instant::now(),
                };
            }
            (model, vec![])
        }
    }
}

// The selector requires k <= |distribution|, so clamp before calling.
fn rank(config: &Config, distribution: &Distribution) -> RankedList {
    let k = config.display_count.min(distribution.len());
    top_k(distribution, k)
}
