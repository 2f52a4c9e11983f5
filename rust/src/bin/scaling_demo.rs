use std::io::{self, Write};

use complexity_lab::logging::init_tracing;
use complexity_lab::report::write_snapshot;
use complexity_lab::runner::{snapshot, DEMO_SIZES};
use complexity_lab::DataGenerator;

fn main() -> io::Result<()> {
    init_tracing(0);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "=== COMPLEXITY DEMONSTRATION ===")?;
    writeln!(out, "Watch how execution time changes as input size grows...\n")?;

    let mut generator = DataGenerator::default();
    for size in DEMO_SIZES {
        write_snapshot(&mut out, &snapshot(&mut generator, size))?;
    }

    writeln!(out, "Array access should stay flat, binary search barely move,")?;
    writeln!(out, "linear search double and pair finding stay capped at 50 elements.")?;
    Ok(())
}
