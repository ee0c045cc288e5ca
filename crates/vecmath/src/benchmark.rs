pub mod benchmarks;

vecmath_profiling::define_target_enum! {
    Target,
    crate::benchmark::benchmarks,
    arithmetic => {
        add_vector3d,
        add_vector3d_in_place,
        add_scaled_vector4f,
        scale_vector3i,
        clamp_vector4d,
        clamp_vector3l_by_vector,
    },
    geometry => {
        dot_product_vector3d,
        magnitude_vector4f,
        magnitude_vector3l,
        distance_vector3d,
        normalize_vector3d,
        normalize_vector3d_in_place,
        cross_product_vector3f,
        interpolate_linear_vector4d,
        ortho_normalize_vector3d,
        angle_vector2d,
    }
}

pub fn benchmark(target: Target, duration: f64, delay: f64) {
    log::info!("Running benchmark target {target:?}");
    vecmath_profiling::benchmark::benchmark(
        |benchmarker| target.execute(benchmarker),
        duration,
        delay,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_target_runs() {
        for &target in Target::ALL {
            benchmark(target, 0.0, 0.0);
        }
    }

    #[test]
    fn all_targets_are_distinct() {
        let mut targets = Target::ALL.to_vec();
        targets.sort();
        targets.dedup();
        assert_eq!(targets.len(), Target::ALL.len());
    }
}
