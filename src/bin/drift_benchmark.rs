extern crate color_eyre;
extern crate driftbench;

use color_eyre::eyre::{eyre,Result};

use driftbench::retention::{self,DriftParameters};
use driftbench::visualize::plot;
use driftbench::{load_runtime_conf,BENCHMARK_FILE_NAME};

fn main() -> Result<()> {
    color_eyre::install()?;
    let runtime_conf = load_runtime_conf();

    let parameters = DriftParameters::benchmark_default();
    let stochastic_retention = retention::generate_stochastic_retention(&parameters);
    let deterministic_retention = retention::generate_deterministic_retention(parameters.step_count);
    let crash_steps = retention::CRASH_STEPS.to_vec();

    plot::draw_retention_benchmark(&stochastic_retention, &deterministic_retention, &crash_steps, &runtime_conf.output_folder, BENCHMARK_FILE_NAME)
        .map_err(|e| eyre!("rendering failed: {}", e))?;

    println!("Saved benchmark chart to {}/{}", runtime_conf.output_folder, BENCHMARK_FILE_NAME);

    Ok(())
}
