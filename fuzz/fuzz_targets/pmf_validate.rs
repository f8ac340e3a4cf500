#![no_main]

use libfuzzer_sys::fuzz_target;
use pmf_core::{DistributionKind, ParameterSet};
use pmf_prob::ProbabilityEngine;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };

    let kind = DistributionKind::ALL[selector as usize % DistributionKind::ALL.len()];
    let mut fields = text.split('\n');
    let mut params = ParameterSet::new();
    for &name in kind.required_params() {
        // Exponent forms are bounded by the engine; long mantissas only slow
        // down the exact powers.
        let raw = fields.next().unwrap_or_default();
        if raw.len() > 16 {
            return;
        }
        params.insert(name, raw);
    }
    let decimals = fields.next().unwrap_or_default();

    // Every input must end in Ok or a typed error, never a panic.
    let _ = ProbabilityEngine::new().evaluate(kind, &params, decimals);
});
