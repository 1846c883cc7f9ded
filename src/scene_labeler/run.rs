use super::main::SceneLabeler;
use crate::scene_labeler::core::{init, transition, Effect};

impl SceneLabeler {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.device_display.lock().unwrap().init()?;

        let (mut current_model, effects) = init();

        self.spawn_effects(effects);

        loop {
            let msg = {
                let receiver = self.event_receiver.lock().unwrap();
                receiver.recv()?
            };

            let _ = self.logger.info(&format!(
                "\nmodel:\n\t{:?}\nmsg:\n\t{}",
                current_model,
                msg.to_display_string()
            ));

            let (new_model, effects) = transition(&self.config, current_model, msg);

            let _ = self.logger.info(&format!(
                "\nnew model:\n\t{:?}\neffects:\n\t{:?}",
                new_model,
                effects
                    .iter()
                    .map(|effect| effect.to_display_string())
                    .collect::<Vec<_>>()
            ));

            current_model = new_model;

            self.render(&current_model)?;

            self.spawn_effects(effects);
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.run_effect(effect));
        }
    }
}
