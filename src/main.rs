use rand::SeedableRng;
use rand::rngs::StdRng;
use randsum::{logging, run};
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    logging::init();

    // One generator, seeded from wall-clock time at process start, drives
    // both the length draw and the element draws.
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let mut rng = StdRng::seed_from_u64(seed);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run::run(&mut rng, &mut out) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code() as i32);
    }
}
