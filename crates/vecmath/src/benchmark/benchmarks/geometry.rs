use crate::{
    context::{Context3D, Context4D},
    geometry,
    vector::{Vector2D, Vector3D, Vector3F, Vector3L, Vector4D, Vector4F},
};
use std::hint::black_box;
use vecmath_profiling::benchmark::Benchmarker;

pub fn dot_product_vector3d(benchmarker: impl Benchmarker) {
    let a = create_vector3d();
    let b = Vector3D::new(-2.0, 0.5, 4.0);
    benchmarker.benchmark(&mut || geometry::dot_product(black_box(&a), black_box(&b)));
}

pub fn magnitude_vector4f(benchmarker: impl Benchmarker) {
    let v = Vector4F::new(0.25, -1.5, 3.75, 1.0);
    benchmarker.benchmark(&mut || geometry::magnitude(black_box(&v)));
}

pub fn magnitude_vector3l(benchmarker: impl Benchmarker) {
    let v = Vector3L::new(i64::from(i32::MAX), -12345, 987_654_321);
    benchmarker.benchmark(&mut || geometry::magnitude(black_box(&v)));
}

pub fn distance_vector3d(benchmarker: impl Benchmarker) {
    let mut context = Context3D::new();
    let a = create_vector3d();
    let b = Vector3D::new(-2.0, 0.5, 4.0);
    benchmarker.benchmark(&mut || {
        geometry::distance(&mut context, black_box(&a), black_box(&b))
    });
}

pub fn normalize_vector3d(benchmarker: impl Benchmarker) {
    let v = create_vector3d();
    benchmarker.benchmark(&mut || geometry::normalize(black_box(&v)));
}

pub fn normalize_vector3d_in_place(benchmarker: impl Benchmarker) {
    let mut v = create_vector3d();
    benchmarker.benchmark(&mut || *geometry::normalize_in_place(black_box(&mut v)));
}

pub fn cross_product_vector3f(benchmarker: impl Benchmarker) {
    let a = Vector3F::new(1.0, 2.0, 3.0);
    let b = Vector3F::new(-0.5, 4.0, 0.25);
    benchmarker.benchmark(&mut || geometry::cross_product(black_box(&a), black_box(&b)));
}

pub fn interpolate_linear_vector4d(benchmarker: impl Benchmarker) {
    let mut context = Context4D::new();
    let a = Vector4D::new(0.0, 1.0, 2.0, 1.0);
    let b = Vector4D::new(10.0, -1.0, 5.0, 1.0);
    benchmarker.benchmark(&mut || {
        geometry::interpolate_linear(&mut context, black_box(&a), black_box(&b), 0.3)
    });
}

pub fn ortho_normalize_vector3d(benchmarker: impl Benchmarker) {
    let mut context = Context3D::new();
    let v0 = create_vector3d();
    let v1 = Vector3D::new(-2.0, 0.5, 4.0);
    benchmarker.benchmark(&mut || {
        geometry::ortho_normalize(&mut context, black_box(&v0), black_box(&v1))
    });
}

pub fn angle_vector2d(benchmarker: impl Benchmarker) {
    let a = Vector2D::new(1.0, 0.0);
    let b = Vector2D::new(1.0, 1.0);
    benchmarker.benchmark(&mut || geometry::angle(black_box(&a), black_box(&b)));
}

fn create_vector3d() -> Vector3D {
    Vector3D::new(1.3, -0.7, 2.9)
}
