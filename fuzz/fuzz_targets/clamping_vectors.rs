#![no_main]

use libfuzzer_sys::fuzz_target;
use vecmath::{clamp::fuzzing::fuzz_test_clamping_vectors, vector::Vector4L};

fuzz_target!(|input: (Vector4L, Vector4L, Vector4L)| {
    fuzz_test_clamping_vectors(input);
});
