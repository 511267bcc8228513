use std::rc::Rc;

use crate::util::XorShift32;

thread_local! {
    static PARAMS: Rc<Params> = Rc::new(Params::new());
}

pub struct Params {
    pub time_limit_ms: u64,
    pub seed: u32,
}

impl Params {
    fn new() -> Self {
        let time_limit_ms = get_env("AHC_TIME_LIMIT_MS", 1900);
        let seed = get_env("AHC_SEED", XorShift32::DEFAULT_SEED);

        Self {
            time_limit_ms,
            seed,
        }
    }

    pub fn get() -> Rc<Self> {
        PARAMS.with(|p| p.clone())
    }
}

#[cfg(feature = "local")]
fn get_env<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[cfg(not(feature = "local"))]
fn get_env<T>(_name: &str, default: T) -> T {
    default
}
