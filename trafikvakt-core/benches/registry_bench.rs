#[macro_use]
extern crate criterion;

use criterion::Criterion;

use trafikvakt_core::readings::Reading;
use trafikvakt_core::registry::SensorRegistry;

fn bench_route_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_throughput");

    for batch in [128, 1024, 16384] {
        group.throughput(criterion::Throughput::Elements(batch as u64)); // Readings per second
        group.bench_function(format!("batch_{}", batch), |b| {
            let mut registry = SensorRegistry::new();
            registry.register_sensor("s1");
            let reading = Reading::new("r", 10, 30.5, 5, 1).unwrap();
            b.iter(|| {
                for _ in 0..batch {
                    registry.route("s1", reading.clone());
                }
                registry.clear_all();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_route_clear);
criterion_main!(benches);
