use std::{error::Error, fs::File, io::BufReader};

use chairfit_funnel::{
    checkout::SimulatedProcessor, clock::SystemClock, config::Config, replay, Answers, Funnel,
};
use chairfit_model::profile::Profile;
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    log4rs::init_file(&config.log_config, Default::default())?;

    info!("Loading answers from {}", config.answers_path);
    let file = File::open(&config.answers_path)?;
    let answers: Answers = serde_json::from_reader(BufReader::new(file))?;

    let mut funnel = Funnel::new(
        Profile::new(),
        Box::new(SystemClock),
        Box::new(SimulatedProcessor::new(config.checkout_delay)),
    );
    let receipt = replay(&mut funnel, &answers).await?;

    let summary = funnel.summary();
    let projection = funnel.projection();
    let archetype = funnel.archetype();

    if let Some(bmi) = summary.bmi {
        println!("BMI: {}", bmi);
    }
    println!("Fitness level: {}", summary.fitness_level);
    println!("{}", summary.message);
    for recommendation in &summary.recommendations {
        println!("  - {}", recommendation);
    }

    println!();
    println!("{}", projection.message(funnel.profile()));
    for point in &projection.weekly_points {
        println!("  {}  {:>5.1} kg", point.date, point.weight_kg);
    }

    println!();
    println!("Your archetype: {} {}", archetype.icon, archetype.title);
    for phase in funnel.plan_phases() {
        println!(
            "  {} ({}, difficulty {}/5): {}",
            phase.title,
            phase.days(),
            phase.difficulty,
            phase.description
        );
    }

    println!();
    for testimonial in funnel.testimonials() {
        println!("\"{}\" - {}, {}", testimonial.quote, testimonial.name, testimonial.age);
    }

    println!();
    println!(
        "Payment {} accepted for {}",
        receipt.reference, receipt.order.email
    );
    println!("{}", serde_json::to_string_pretty(funnel.profile())?);

    Ok(())
}
