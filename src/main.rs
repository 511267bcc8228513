use itertools::Itertools;
use problem::Input;
use solver::Solver;

mod problem;
pub mod solver;
mod util;

fn main() {
    init_logger();

    let input = Input::read();
    let solver = solver::harvest::HarvestSolver;
    let moves = solver.solve(&input);

    #[cfg(feature = "local")]
    match problem::judge::judge(&input, &moves) {
        Ok(score) => log::info!("judged score: {}", score),
        Err(err) => log::error!("invalid output: {:#}", err),
    }

    println!("{}", moves.iter().join("\n"));
    log::info!("total time: {}ms", input.since().elapsed().as_millis());
}

#[cfg(not(feature = "local"))]
fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();
}

#[cfg(feature = "local")]
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
