use criterion::{black_box, criterion_group, criterion_main, Criterion};

use xdmf_write::{AttributeCenter, Container, ElementType, TimeSeries};

fn container(steps: usize) -> Container {
    let mut file = Container::new("bench.h5");
    file.insert("/coor", [10_000, 3]).insert("/conn", [1_000, 8]);

    for i in 0..steps {
        file.insert(format!("/disp/{i}"), [10_000, 3])
            .insert(format!("/stress/{i}"), [1_000]);
    }

    file
}

fn write_timeseries(file: &Container, steps: usize) -> String {
    let mesh = xdmf_write::unstructured(
        file.dataset("/coor").unwrap(),
        file.dataset("/conn").unwrap(),
        ElementType::Hexahedron,
    )
    .unwrap();

    let mut series = TimeSeries::new();

    for i in 0..steps {
        let disp = file.dataset(&format!("/disp/{i}")).unwrap();
        let stress = file.dataset(&format!("/stress/{i}")).unwrap();

        let mut fields = mesh.clone();
        fields.push(xdmf_write::attribute(disp, AttributeCenter::Node, Some("Disp")).unwrap());
        fields.push(xdmf_write::attribute(stress, AttributeCenter::Cell, Some("Stress")).unwrap());

        series.push_back(fields);
    }

    xdmf_write::to_string(&series).unwrap()
}

fn write_timeseries_bench(c: &mut Criterion) {
    let file = container(1_000);

    c.bench_function("write timeseries 100", |b| {
        b.iter(|| write_timeseries(&file, black_box(100)))
    });

    c.bench_function("write timeseries 1000", |b| {
        b.iter(|| write_timeseries(&file, black_box(1_000)))
    });
}

criterion_group!(benches, write_timeseries_bench);
criterion_main!(benches);
