use mandelbrot_zoom::{GuiConfig, PixelsPresenterFactory, RunGuiCommand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), GuiConfig::default());

    command.execute()
}
