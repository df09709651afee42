use std::env::args;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
extern crate bounded_dirichlet;
use crate::bounded_dirichlet::{
    batch::sample_batch_summary,
    bounded::BoundedDirichlet,
    error::BoundedDirichletError,
    gamma::RngGammaSource,
};


fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> T {
    match args.get(index) {
        Some(value) => match value.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!("could not parse argument {} ({}), using default", index, value);
                default
            }
        },
        None => default,
    }
}

// usage: cargo run --example bounded_dirichlet -- [alpha] [sum] [lo] [hi] [n] [trials] [seed]
fn main() -> Result<(), BoundedDirichletError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args: Vec<String> = args().collect();
    let defaults = BoundedDirichlet::default();
    let params = BoundedDirichlet::new(
        parse_arg(&args, 1, defaults.alpha),
        parse_arg(&args, 2, defaults.sum),
        parse_arg(&args, 3, defaults.lo),
        parse_arg(&args, 4, defaults.hi),
        parse_arg(&args, 5, defaults.len),
    )?;
    let trials: usize = parse_arg(&args, 6, 1_000);
    let seed: u64 = parse_arg(&args, 7, 0);

    info!(?params, trials, seed, "sampling");

    let mut source = RngGammaSource::seed_from_u64(seed);
    let mut rn = vec![0.; params.len];
    let mut infeasible = 0;
    for trial in 0..trials {
        let feasible = params.sample_into(&mut source, &mut rn)?;
        if !feasible {
            infeasible += 1;
        }

        debug!(trial, feasible, "bounded sample");
        for r in rn.iter() {
            debug!(r);
        }
        debug!(total = rn.iter().sum::<f64>());
    }

    info!(trials, infeasible, "sequential run finished");

    let summary = sample_batch_summary(&params, seed, trials)?;
    println!("{:#?}", summary);

    Ok(())
}
