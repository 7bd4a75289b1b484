
use serde::{Serialize,Deserialize};

pub mod retention;
pub mod visualize;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

pub const BENCHMARK_FILE_NAME: &str = "stochastic_drift_benchmark.png";

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct RuntimeConf {
    pub output_folder: String
}

pub fn load_runtime_conf() -> RuntimeConf {
    match std::fs::read_to_string("runtime_conf.yaml") {
        Ok(contents) => serde_yaml::from_str(&contents).expect("runtime_conf.yaml is malformed"),
        Err(_) => RuntimeConf { output_folder: String::from(".") }
    }
}
