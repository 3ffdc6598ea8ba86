use crate::engine::{adjusted_dose, ServingSize, ShotCount};
use crate::models::{Drink, Guidance, Severity, Verdict};

fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Green => "[OK]",
        Severity::Yellow => "[!]",
        Severity::Red => "[!!]",
    }
}

/// Display a sleep verdict for one prospective drink.
pub fn display_verdict(drink: &Drink, verdict: &Verdict) {
    println!();
    println!("=== {} ===", drink.name);
    println!();
    println!("{} ({})", verdict.headline, verdict.code.label());
    println!("{}", verdict.detail);
    println!("{}", verdict.suggestion);
    println!();
}

/// Display guidance computed from the day's journal.
pub fn display_guidance(guidance: &Guidance, active_mg: f64, consumed_mg: f64) {
    println!();
    println!("=== Caffeine Status ===");
    println!();
    println!("{} {}", severity_marker(guidance.severity), guidance.message);
    println!();
    println!("--- Summary ---");
    println!("Active now: {:.0} mg", active_mg.round());
    println!("Consumed today: {:.0} mg", consumed_mg.round());
    println!(
        "Projected at bedtime: {:.0} mg",
        guidance.projected_at_bedtime_mg
    );
    if let Some(label) = &guidance.wait_label {
        println!("Safe for more caffeine in: {}", label);
    }
    println!();
}

/// Display a suggestion list with serving-adjusted doses.
pub fn display_suggestions(drinks: &[&Drink], size: ServingSize, shots: ShotCount) {
    if drinks.is_empty() {
        println!("No suggestions match right now. Water it is.");
        return;
    }

    println!();
    println!("=== Suggestions ===");
    println!();

    let max_name_len = drinks.iter().map(|d| d.name.len()).max().unwrap_or(10);

    for (i, drink) in drinks.iter().enumerate() {
        let dose = adjusted_dose(drink, size, shots);
        let tags = if drink.tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", drink.tags.join(", "))
        };
        println!(
            "{:>3}. {:<width$} - {:>4.0} mg ({}){}",
            i + 1,
            drink.name,
            dose,
            drink.category.label(),
            tags,
            width = max_name_len
        );
    }

    println!();
}

/// Display a simple drink list with nominal caffeine.
pub fn display_drink_list(drinks: &[&Drink], title: &str) {
    if drinks.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, drinks.len());
    println!();

    for drink in drinks {
        println!(
            "  {} - {:.0} mg ({})",
            drink.name,
            drink.caffeine_mg,
            drink.category.label()
        );
    }

    println!();
}
