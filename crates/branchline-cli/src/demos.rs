//! Scripted example walks. Each section prints fixed inputs through the
//! library so the output reads as a worked tour of the classifier families.

use branchline_core::*;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Render a shipping quote, or its rejection, on one line.
fn print_quote(quote: Result<f64, QuoteError>) {
    match quote {
        Ok(cost) => println!("{cost:.2}"),
        Err(e) => println!("{e}"),
    }
}

pub fn run_beginner_examples() {
    debug!("running beginner examples");
    println!("=== BEGINNER EXAMPLES ===");
    println!("{}", check_temperature(30));
    println!("{}", check_temperature(15));
    println!("{}", grade_assignment(95));
    println!("{}", grade_assignment(75));
    println!("{}", grade_assignment(45));
    println!("{}", check_even_odd(7));
    println!("{}", check_even_odd(12));

    println!();
    println!("=== MATCH/CASE EXAMPLE ===");
    println!("{}", handle_http_status(200));
    println!("{}", handle_http_status(418));

    println!();
    println!("=== COMPACT VERSIONS ===");
    println!("{}", check_temperature_compact(30));
    println!("{}", check_even_odd_compact(7));
    println!("{}", get_pass_fail(75));
    println!("{}", get_discount_rate(true, 70));
    println!("{}", format_price(29.99));
    println!("{}", validate_input_compact("  "));
}

pub fn run_intermediate_examples() {
    debug!("running intermediate examples");
    println!();
    println!("=== INTERMEDIATE EXAMPLES ===");
    println!("{}", categorise_age(10));
    println!("{}", categorise_age(16));
    println!("{}", categorise_age(30));
    print_quote(calculate_shipping(5.0, 50.0));
    print_quote(calculate_shipping_with(15.0, 200.0, true));

    println!();
    println!("=== COMPACT INTERMEDIATE ===");
    println!("{:.2}", calculate_tax_compact(25_000.0));
    println!("{}", get_user_status_compact(3, 45));
    println!("{}", process_grade_compact_with(85, 7));
}

pub fn run_advanced_examples() {
    debug!("running advanced examples");
    println!();
    println!("=== ADVANCED EXAMPLES ===");
    println!("{}", validate_password_strength("password"));
    println!("{}", validate_password_strength("MyStr0ng!Pass"));

    println!();
    println!("=== ADVANCED COMPACT ===");
    println!("{}", validate_email_compact("user@domain.com"));
    println!("{}", get_priority_level_compact("admin", false, 2));
    let options = PricingOptions {
        discount_pct: 0.1,
        tax_rate: 0.2,
        is_member: true,
    };
    println!("{:.2}", calculate_final_price(100.0, options));
    println!("{}", classify_text_length_compact("This is a medium length sentence."));
}

pub fn run_match_examples() {
    debug!("running match examples");
    println!();
    println!("=== MATCH/CASE EXAMPLES ===");
    println!("{}", process_command("help", &[]));
    println!("{}", process_command("save", &["myfile.txt"]));
    println!("{}", analyse_data_structure(&Value::Int(42)));

    let long: Vec<Value> = (1..=7).map(Value::Int).collect();
    println!("{}", analyse_data_structure(&Value::List(long)));

    let mut person = FxHashMap::default();
    person.insert("name".to_string(), Value::Str("Alice".to_string()));
    person.insert("age".to_string(), Value::Int(25));
    println!("{}", analyse_data_structure(&Value::Map(person)));
}
