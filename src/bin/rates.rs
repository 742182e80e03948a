//! Currency rate CLI
//!
//! `rates [BASE] [CODE...]` prints the latest exchange rate from BASE
//! (default HRK) into each CODE (default EUR USD). Any fetch failure
//! prints a single fixed message, as the kiosk display expects.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use seedfall::exchange::fetch_rates;

    let mut args = std::env::args().skip(1);
    let base = args.next().unwrap_or_else(|| "HRK".to_string());
    let codes: Vec<String> = args.collect();
    let codes = if codes.is_empty() {
        vec!["EUR".to_string(), "USD".to_string()]
    } else {
        codes
    };

    let table = match fetch_rates(&base) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("{}", e);
            println!("Greška prilikom dohvaćanja tečaja.");
            std::process::exit(1);
        }
    };

    if !table.date.is_empty() {
        println!("Rates for {} ({})", table.base, table.date);
    }
    for code in codes {
        match table.rate_for(&code) {
            Ok(rate) => println!("1 {} = {} {}", table.base, rate, code.to_uppercase()),
            Err(e) => eprintln!("{}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    eprintln!("rates is a native-only tool");
}
