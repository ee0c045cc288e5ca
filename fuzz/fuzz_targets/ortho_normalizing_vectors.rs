#![no_main]

use libfuzzer_sys::fuzz_target;
use vecmath::geometry::fuzzing::{ArbitraryVector3D, fuzz_test_ortho_normalizing_vectors};

fuzz_target!(|input: (ArbitraryVector3D, ArbitraryVector3D)| {
    fuzz_test_ortho_normalizing_vectors(input);
});
