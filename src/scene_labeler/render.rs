use super::main::SceneLabeler;
use crate::ranking::LabelScore;
use crate::scene_labeler::core::{CameraState, Model, Phase};

/// One line per prediction, `"<rank>: <label> (<percent>%)"`, entries
/// separated by blank lines.
pub fn format_predictions(ranked: &[LabelScore]) -> String {
    ranked
        .iter()
        .enumerate()
        .map(|(i, prediction)| {
            format!(
                "{}: {} ({:.2}%)",
                i + 1,
                prediction.label,
                prediction.score * 100.0
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// The ranking once one exists, a startup status message before that.
pub fn display_text(model: &Model) -> String {
    match &model.latest {
        Some(ranked) => format_predictions(ranked),
        None => match model.phase {
            Phase::LoadingStill | Phase::ClassifyingStill => "Classifying photo...".to_string(),
            _ => match model.camera {
                CameraState::Disconnected => "Camera connecting...".to_string(),
                CameraState::Connected(_) => "Camera starting...".to_string(),
                CameraState::Started => "Waiting for frames...".to_string(),
            },
        },
    }
}

impl SceneLabeler {
    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().unwrap();

        let text = display_text(model);

        if text.is_empty() {
            device_display.clear()?;
        } else {
            device_display.write_text(&text)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod render_test {
    use super::{display_text, format_predictions};
    use crate::ranking::LabelScore;
    use crate::scene_labeler::core::{CameraState, Model, Phase};
    use std::time::Instant;

    #[test]
    fn test_format_single_prediction() {
        let ranked = vec![LabelScore {
            label: "cat".to_string(),
            score: 0.7,
        }];

        assert_eq!(format_predictions(&ranked), "1: cat (70.00%)");
    }

    #[test]
    fn test_format_joins_with_blank_lines() {
        let ranked = vec![
            LabelScore {
                label: "cat".to_string(),
                score: 0.7,
            },
            LabelScore {
                label: "dog".to_string(),
                score: 0.2,
            },
            LabelScore {
                label: "bird".to_string(),
                score: 0.1,
            },
        ];

        assert_eq!(
            format_predictions(&ranked),
            "1: cat (70.00%)\n\n2: dog (20.00%)\n\n3: bird (10.00%)"
        );
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_predictions(&[]), "");
    }

    #[test]
    fn test_status_text_while_classifying_still() {
        for phase in [Phase::LoadingStill, Phase::ClassifyingStill] {
            let model = Model {
                camera: CameraState::Disconnected,
                phase,
                latest: None,
            };

            assert_eq!(display_text(&model), "Classifying photo...");
        }
    }

    #[test]
    fn test_status_text_tracks_camera_state() {
        let model = |camera: CameraState| Model {
            camera,
            phase: Phase::AwaitingFrame {
                last_done: Instant::now(),
            },
            latest: None,
        };

        assert_eq!(
            display_text(&model(CameraState::Disconnected)),
            "Camera connecting..."
        );
        assert_eq!(
            display_text(&model(CameraState::Connected(Instant::now()))),
            "Camera starting..."
        );
        assert_eq!(
            display_text(&model(CameraState::Started)),
            "Waiting for frames..."
        );
    }

    #[test]
    fn test_ranking_replaces_status_text() {
        let model = Model {
            camera: CameraState::Started,
            phase: Phase::AwaitingFrame {
                last_done: Instant::now(),
            },
            latest: Some(vec![LabelScore {
                label: "cat".to_string(),
                score: 0.7,
            }]),
        };

        assert_eq!(display_text(&model), "1: cat (70.00%)");
    }
}
