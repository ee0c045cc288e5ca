#![no_main]

use libfuzzer_sys::fuzz_target;
use vecmath::geometry::fuzzing::{ArbitraryVector3D, fuzz_test_normalizing_vector};

fuzz_target!(|input: ArbitraryVector3D| {
    fuzz_test_normalizing_vector(input);
});
