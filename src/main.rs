use mandelbrot_zoom::HeadlessController;
use mandelbrot_zoom::core::data::image_size::ImageSize;
use mandelbrot_zoom::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut controller = HeadlessController::new(MandelbrotConfig::default(), ImageSize::default());

    controller.generate()?;

    Ok(())
}
