use owo_colors::Style;

// Stylesheet used to colorize the run summary
#[derive(Debug, Default)]
pub(crate) struct Styles {
    pub device_style: Style,
    pub layer_style: Style,
    pub interface_style: Style,
    pub value_style: Style,
}

impl Styles {
    /// Plain styles unless stdout supports colour
    pub(crate) fn for_stdout() -> Self {
        let mut styles = Self::default();
        if supports_color::on(supports_color::Stream::Stdout).is_some() {
            styles.colorize();
        }
        styles
    }

    pub(crate) fn colorize(&mut self) {
        self.device_style = Style::new().bright_blue().bold();
        self.layer_style = Style::new().bright_green();
        self.interface_style = Style::new().bright_yellow();
        self.value_style = Style::new().bold();
    }
}
