use clap::Parser;

use meal_planner_rs::catalog::{Catalog, load_catalog};
use meal_planner_rs::cli::{Cli, Command, ListArgs};
use meal_planner_rs::config::PlanRequest;
use meal_planner_rs::error::Result;
use meal_planner_rs::interface::{
    collect_plan_request, display_food_list, display_meal_plan, display_no_plan,
    display_target_comparison, plan_to_json, prompt_yes_no,
};
use meal_planner_rs::logging::init_logger;
use meal_planner_rs::models::{MealPlan, Nutrient};
use meal_planner_rs::planner::try_find_plan;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan => cmd_plan(&cli.file),
        Command::Demo => cmd_demo(&cli.file),
        Command::Profile { path, json } => cmd_profile(&cli.file, &path, json),
        Command::List(args) => cmd_list(&cli.file, &args),
    }
}

/// Load the catalog, explaining when there is nothing to plan with.
fn load_foods_or_explain(file_path: &str) -> Option<Catalog> {
    let catalog = load_catalog(file_path);
    if catalog.is_empty() {
        eprintln!("No foods loaded from {}", file_path);
        eprintln!(
            "Please provide a CSV with columns name,calories,protein,fat,carbs[,meal_times,tags]."
        );
        return None;
    }
    Some(catalog)
}

/// Plan and render, returning the plan when one was found.
fn plan_and_report<'a>(catalog: &'a Catalog, request: &PlanRequest) -> Option<MealPlan<'a>> {
    match try_find_plan(catalog.foods(), request) {
        Ok(plan) => {
            display_meal_plan(&plan);
            display_target_comparison(&plan, &request.targets);
            Some(plan)
        }
        Err(e) if e.is_constraint_violation() => {
            tracing::info!("No meal plan satisfies the constraints: {}", e);
            display_no_plan(Some(&e));
            None
        }
        Err(e) => {
            tracing::warn!("No meal plan found: {}", e);
            display_no_plan(Some(&e));
            None
        }
    }
}

/// Interactive planning.
fn cmd_plan(file_path: &str) -> Result<()> {
    let Some(catalog) = load_foods_or_explain(file_path) else {
        return Ok(());
    };
    println!("Loaded {} foods", catalog.len());
    println!();

    loop {
        let request = collect_plan_request()?;

        println!();
        println!("Searching for a meal plan...");
        println!();
        plan_and_report(&catalog, &request);

        println!();
        if !prompt_yes_no("Plan again with different settings?", false)? {
            break;
        }
    }

    Ok(())
}

/// High-protein demo with preset targets.
fn cmd_demo(file_path: &str) -> Result<()> {
    let Some(catalog) = load_foods_or_explain(file_path) else {
        return Ok(());
    };

    let request = PlanRequest::high_protein_demo();

    println!("Demo: high-protein day (for athletes and active people)");
    println!();
    println!("Targets:");
    for (nutrient, goal) in request.targets.active() {
        println!("  • {}: {} {}", nutrient, goal, nutrient.unit());
    }
    println!("Weights:");
    for nutrient in Nutrient::ALL {
        println!("  • {}: {}", nutrient, request.weights.weight(nutrient));
    }
    println!();

    if let Some(plan) = plan_and_report(&catalog, &request) {
        if let Some(goal) = request.targets.protein.filter(|g| *g > 0.0) {
            let actual = plan.totals().protein;
            println!();
            println!("Protein analysis:");
            println!("  Target:   {:.0} g", goal);
            println!("  Actual:   {:.1} g", actual);
            println!("  Achieved: {:.1}%", actual / goal * 100.0);
        }
    }

    Ok(())
}

/// Plan from a JSON profile.
fn cmd_profile(file_path: &str, profile_path: &str, json: bool) -> Result<()> {
    let request = PlanRequest::from_json_file(profile_path)?;
    let catalog = load_catalog(file_path);

    if !json {
        if catalog.is_empty() {
            eprintln!("No foods loaded from {}", file_path);
        }
        plan_and_report(&catalog, &request);
        return Ok(());
    }

    let output = match try_find_plan(catalog.foods(), &request) {
        Ok(plan) => plan_to_json(&plan),
        Err(e) => serde_json::json!({ "error": e.to_string() }),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// List foods matching the given filters.
fn cmd_list(file_path: &str, args: &ListArgs) -> Result<()> {
    let Some(catalog) = load_foods_or_explain(file_path) else {
        return Ok(());
    };

    let matching = catalog.filter(&args.filter());
    display_food_list(&matching, "Matching foods");
    Ok(())
}
