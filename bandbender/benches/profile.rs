use bandbender::{Bias, Device, InfoDesk};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{thread_rng, Rng};

fn npn(info_desk: &InfoDesk<f64>) -> Device<f64> {
    Device::new(
        vec![
            info_desk.build_layer("Al", None, 0., 50.).unwrap(),
            info_desk.build_layer("Si", None, 1e17, 500.).unwrap(),
            info_desk.build_layer("Si", None, -1e16, 1500.).unwrap(),
            info_desk.build_layer("Si", None, 1e17, 500.).unwrap(),
            info_desk.build_layer("Al", None, 0., 50.).unwrap(),
        ],
        300.,
    )
    .unwrap()
}

pub fn bench_compute_profile(c: &mut Criterion) {
    let info_desk = InfoDesk::with_presets();
    let device = npn(&info_desk);

    let mut group = c.benchmark_group("compute_profile");
    for number_of_points in [100, 1000, 10_000, 100_000].into_iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(number_of_points),
            &number_of_points,
            |b, &number_of_points| b.iter(|| device.compute_profile(black_box(number_of_points))),
        );
    }
    group.finish();
}

pub fn bench_bias_sweep(c: &mut Criterion) {
    let mut rng = thread_rng();
    let info_desk = InfoDesk::with_presets();
    let device = npn(&info_desk);
    let biases: Vec<Bias<f64>> = (0..32)
        .map(|_| Bias::from_voltages(vec![0., 0., rng.gen_range(-0.2..0.2), 0., 0.]))
        .collect();

    c.bench_function("bias_sweep", |b| {
        b.iter(|| {
            for bias in biases.iter() {
                let _ = device.compute_profile_with_bias(black_box(bias), 1000);
            }
        })
    });
}

criterion_group!(benches, bench_compute_profile, bench_bias_sweep);
criterion_main!(benches);
