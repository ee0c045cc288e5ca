use crate::{
    arithmetic, clamp,
    vector::{Vector3D, Vector3I, Vector3L, Vector4D, Vector4F},
};
use std::hint::black_box;
use vecmath_profiling::benchmark::Benchmarker;

pub fn add_vector3d(benchmarker: impl Benchmarker) {
    let a = create_vector3d();
    let b = create_vector3d();
    benchmarker.benchmark(&mut || arithmetic::add(black_box(&a), black_box(&b)));
}

pub fn add_vector3d_in_place(benchmarker: impl Benchmarker) {
    let mut a = create_vector3d();
    let b = create_vector3d();
    benchmarker.benchmark(&mut || *arithmetic::add_in_place(black_box(&mut a), black_box(&b)));
}

pub fn add_scaled_vector4f(benchmarker: impl Benchmarker) {
    let a = create_vector4f();
    let b = create_vector4f();
    benchmarker.benchmark(&mut || arithmetic::add_scaled(black_box(&a), black_box(&b), 0.5));
}

pub fn scale_vector3i(benchmarker: impl Benchmarker) {
    let v = Vector3I::new(-7, 12, 1024);
    benchmarker.benchmark(&mut || arithmetic::scale(black_box(&v), 2.5));
}

pub fn clamp_vector4d(benchmarker: impl Benchmarker) {
    let v = Vector4D::new(-4.2, 0.3, 7.9, 1.0);
    benchmarker.benchmark(&mut || clamp::clamp(black_box(&v), -1.0, 1.0));
}

pub fn clamp_vector3l_by_vector(benchmarker: impl Benchmarker) {
    let v = Vector3L::new(-400, 25, 9000);
    let minimum = Vector3L::new(-100, -100, 0);
    let maximum = Vector3L::new(100, 10, 1000);
    benchmarker.benchmark(&mut || {
        clamp::clamp_by_vector(black_box(&v), black_box(&minimum), black_box(&maximum))
    });
}

fn create_vector3d() -> Vector3D {
    Vector3D::new(1.3, -0.7, 2.9)
}

fn create_vector4f() -> Vector4F {
    Vector4F::new(0.25, -1.5, 3.75, 1.0)
}
