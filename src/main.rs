// src/main.rs

use anyhow::Context;
use figure_generator::FigureGenerator;

const DEFAULT_COUNT: i64 = 10;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mut generator = match args.next() {
        Some(arg) => {
            let max_coordinate: i32 = arg
                .parse()
                .with_context(|| format!("invalid maximum coordinate {:?}", arg))?;
            FigureGenerator::new(max_coordinate)
        }
        None => FigureGenerator::default(),
    };
    let count: i64 = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid figure count {:?}", arg))?,
        None => DEFAULT_COUNT,
    };

    log::info!("Maximum coordinate: {}", generator.max_coordinate());
    let figures = generator
        .create_figures(count)
        .context("failed to generate figures")?;

    for figure in &figures {
        println!(
            "{} area={:.3} perimeter={:.3}",
            figure,
            figure.area(),
            figure.perimeter()
        );
    }
    log::info!("Generated {} figures", figures.len());
    Ok(())
}
