use crate::device_display::interface::DeviceDisplay;
use std::error::Error;

pub struct DeviceDisplayConsole {
    text: String,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    fn render_display(&self) {
        if self.text.is_empty() {
            return;
        }
        println!("┌────────────────────────────────┐");
        for line in self.text.lines() {
            println!("│ {:<30} │", line);
        }
        println!("└────────────────────────────────┘");
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.render_display();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.text.clear();
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if text == self.text {
            return Ok(());
        }
        self.text = text.to_string();
        self.render_display();
        Ok(())
    }
}
