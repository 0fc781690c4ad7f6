//! Membership and boundary checks for a sample point set.
//!
//! Builds the set
//!
//! ```text
//! 2x + 3y               <= 10
//! 2x² + 3y² - z² - 2w²  <= -5
//! ```
//!
//! and reports where the point `(1, 2)` lies, then waits for Enter.
//!
//! # Usage
//!
//! ```text
//! cargo run -p levelset-demo
//! RUST_LOG=levelset_regions=trace cargo run -p levelset-demo
//! ```

use std::{
    io::{self, BufRead, Write},
    sync::Arc,
};

use levelset_core::{LinearFunction, QuadraticFunction};
use levelset_regions::{Constraint, PointSet};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut stdout = io::stdout().lock();
    run(&mut stdout)?;

    write!(stdout, "Press Enter to exit...")?;
    stdout.flush()?;
    io::stdin().lock().read_line(&mut String::new())?;

    Ok(())
}

/// Writes the membership and boundary results for the sample point.
fn run(out: &mut impl Write) -> io::Result<()> {
    let set = sample_set();
    let point = [1.0, 2.0];

    tracing::info!(?point, constraints = set.len(), "checking sample point");

    writeln!(out, "Point is in set: {}", set.contains(&point))?;
    writeln!(out, "Point is on boundary: {}", set.is_on_boundary(&point))?;

    Ok(())
}

fn sample_set() -> PointSet {
    let linear = Arc::new(LinearFunction::new(vec![2.0, 3.0]));
    let quadratic = Arc::new(QuadraticFunction::new(vec![2.0, 3.0, -1.0, -2.0]));

    PointSet::new(vec![
        Constraint::new(linear, 10.0),
        Constraint::new(quadratic, -5.0),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_sample_point() {
        let mut out = Vec::new();

        run(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Point is in set: false\nPoint is on boundary: false\n"
        );
    }

    #[test]
    fn sample_set_has_both_constraints() {
        let set = sample_set();

        let bounds: Vec<f64> = set.constraints().iter().map(Constraint::bound).collect();

        assert_eq!(bounds, vec![10.0, -5.0]);
    }
}
