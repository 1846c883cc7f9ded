use crate::device_display::interface::DeviceDisplay;
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Clone)]
struct DisplayWindow {
    text: Arc<Mutex<String>>,
}

impl eframe::App for DisplayWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let text = self.text.lock().unwrap().clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);

                let rect = ui.available_rect_before_wrap();
                ui.painter()
                    .rect_filled(rect, 0.0, egui::Color32::from_rgb(20, 20, 20));

                for line in text.lines() {
                    ui.label(
                        egui::RichText::new(line)
                            .monospace()
                            .color(egui::Color32::WHITE)
                            .size(20.0),
                    );
                }
            });
        });

        ctx.request_repaint();
    }
}

pub struct DeviceDisplayGui {
    text: Arc<Mutex<String>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            text: Arc::new(Mutex::new(String::new())),
        }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let text = self.text.clone();

        // The window blocks its own thread until closed
        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([400.0, 300.0])
                    .with_resizable(false),
                ..Default::default()
            };

            let window = DisplayWindow { text };

            let _ = eframe::run_native("Scene Labeler", options, Box::new(|_cc| Box::new(window)));
        });

        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.text.lock().unwrap().clear();
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.text.lock().unwrap() = text.to_string();
        Ok(())
    }
}
