//! # LiftSizer CLI Application
//!
//! Terminal front end for the hydraulic elevator sizing engine. Prompts
//! for the load case, runs the full pipeline (feasibility, component
//! selection, cost, thermal) and prints a quote summary plus the JSON
//! payloads for downstream tooling.

use std::io::{self, BufRead, Write};

use lift_core::calculations::{
    compute_cost, compute_thermal, evaluate_cylinders, select_components, LoadInputs,
    SuspensionRatio, ThermalInput, DEFAULT_BUFFER_MM,
};
use lift_core::catalog::Catalog;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_suspension() -> SuspensionRatio {
    print!("Suspension ratio (1:1 or 2:1) [2:1]: ");
    if io::stdout().flush().is_err() {
        return SuspensionRatio::TwoToOne;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return SuspensionRatio::TwoToOne;
    }

    match input.trim() {
        "1:1" => SuspensionRatio::OneToOne,
        _ => SuspensionRatio::TwoToOne,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    println!("LiftSizer CLI - Hydraulic Elevator Sizing");
    println!("=========================================");
    println!();

    let capacity_kg = prompt_f64("Rated capacity (kg) [1000]: ", 1000.0);
    let carcass_weight_kg = prompt_f64("Car carcass weight (kg) [800]: ", 800.0);
    let travel_distance_mm = prompt_f64("Travel distance (mm) [3000]: ", 3000.0);
    let buffer_mm = prompt_f64("Buffer margin (mm) [300]: ", DEFAULT_BUFFER_MM);
    let speed_mps = prompt_f64("Rated speed (m/s) [0.5]: ", 0.5);
    let suspension = prompt_suspension();
    let cylinder_count = prompt_f64("Number of cylinders [2]: ", 2.0) as u32;
    let trips_per_hour = prompt_f64("Trips per hour for heat check [120]: ", 120.0);

    let inputs = LoadInputs {
        capacity_kg,
        carcass_weight_kg,
        travel_distance_mm,
        buffer_mm,
        speed_mps,
        suspension,
        cylinder_count,
        regulation: "EN 81-20".to_string(),
    };

    let catalog = Catalog::standard();

    let evaluations = match evaluate_cylinders(&inputs, &catalog) {
        Ok(evaluations) => evaluations,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!();
    println!("═══════════════════════════════════════════════════════════");
    println!("  CYLINDER FEASIBILITY (stroke {:.0} mm)", inputs.stroke_mm());
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!(
        "  {:<10} {:>10} {:>10} {:>8} {:>8}",
        "Type", "p_empty", "p_full", "Buckling", "Valid"
    );
    for eval in &evaluations {
        println!(
            "  {:<10} {:>8.2} b {:>8.2} b {:>8} {:>8}",
            eval.type_code,
            eval.pressure_empty_bar,
            eval.pressure_full_bar,
            status_icon(eval.buckling_safe),
            status_icon(eval.valid)
        );
    }

    let Some(chosen) = evaluations.iter().find(|e| e.valid) else {
        println!();
        println!("No suitable cylinder for this load case.");
        return;
    };

    println!();
    println!("Selecting components for {}...", chosen.type_code);

    let config = match select_components(chosen, &inputs, &catalog) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let cost = compute_cost(&config, &catalog);

    println!();
    println!("═══════════════════════════════════════════════════════════");
    println!("  SELECTED CONFIGURATION");
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!(
        "  Cylinder:      {} x{}{}",
        config.cylinder_type,
        config.quantity,
        if config.two_piece { " (two-piece)" } else { "" }
    );
    println!(
        "  Pump:          {} ({:.0} L/min, required {:.1})",
        config.pump, config.actual_flow_lpm, config.required_flow_lpm
    );
    println!(
        "  Motor:         {} (required {:.2} kW)",
        config.motor, config.required_power_kw
    );
    println!("  Main valve:    {}", config.main_valve.display_name());
    match &config.rupture_valve {
        Some(key) => println!(
            "  Rupture valve: {}{}",
            key.size.display_name(),
            if key.dual { " DK" } else { "" }
        ),
        None => println!("  Rupture valve: none (flow out of range)"),
    }
    match &config.power_unit {
        Some(model) => println!(
            "  Power unit:    {} (oil required {:.1} L)",
            model, config.required_oil_volume_l
        ),
        None => println!(
            "  Power unit:    no suitable unit for {:.1} L",
            config.required_oil_volume_l
        ),
    }
    println!("  Eff. speed:    {:.3} m/s", config.effective_speed_mps);

    println!();
    println!("  Cost breakdown (EUR):");
    println!("    Cylinders:     {:>10.2}", cost.cylinders_eur);
    println!("    Pump:          {:>10.2}", cost.pump_eur);
    println!("    Motor:         {:>10.2}", cost.motor_eur);
    println!("    Main valve:    {:>10.2}", cost.main_valve_eur);
    println!("    Rupture valve: {:>10.2}", cost.rupture_valve_eur);
    println!("    Power unit:    {:>10.2}", cost.power_unit_eur);
    println!("    Accessories:   {:>10.2}", cost.accessories_eur);
    println!("    ─────────────────────────");
    println!("    TOTAL:         {:>10.2}", cost.total_eur());

    if let (Some(motor), Some(unit_model)) = (catalog.motor(&config.motor), &config.power_unit) {
        if let Some(unit) = catalog.power_unit(unit_model) {
            let thermal_input = ThermalInput {
                motor_power_kw: motor.power_kw,
                travel_distance_mm: inputs.travel_distance_mm,
                speed_mps: inputs.speed_mps,
                trips_per_hour,
                oil_volume_l: unit.total_oil_l,
            };
            match compute_thermal(&thermal_input) {
                Ok(thermal) => {
                    println!();
                    println!(
                        "  Thermal:       steady state {:.1} °C, {}",
                        thermal.steady_state_temp_c, thermal.recommendation
                    );
                }
                Err(e) => eprintln!("Thermal estimate skipped: {}", e),
            }
        }
    }

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&config) {
        println!("{}", json);
    }
    if let Ok(json) = serde_json::to_string_pretty(&cost) {
        println!("{}", json);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[--]"
    }
}
