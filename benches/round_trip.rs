use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use gmt_grd::{Extent, GrdReader, GrdWriter, Grid};
use std::io::Cursor;

fn synthetic_grid(nx: usize, ny: usize) -> Grid {
    let mut grid = Grid::new(nx, ny);
    for j in 0..ny {
        for i in 0..nx {
            let x = i as f64;
            let y = j as f64;
            grid.set_value(i, j, (x * x + y * y).sqrt());
        }
    }
    grid
}

fn writer_benchmark(c: &mut Criterion) {
    let grid = synthetic_grid(512, 512);

    c.bench_function("write_512x512", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(892 + 512 * 512 * 4);
            GrdWriter::new(Extent::new(0.0, 511.0), Extent::new(0.0, 511.0))
                .with_title("benchmark grid")
                .write(&mut buf, &grid)
                .unwrap();
            buf
        })
    });
}

fn reader_benchmark(c: &mut Criterion) {
    let grid = synthetic_grid(512, 512);
    let mut bytes = Vec::new();
    GrdWriter::new(Extent::new(0.0, 511.0), Extent::new(0.0, 511.0))
        .with_title("benchmark grid")
        .write(&mut bytes, &grid)
        .unwrap();

    c.bench_function("read_512x512", |b| {
        b.iter_batched(
            || Cursor::new(bytes.clone()),
            |cursor| GrdReader::new(cursor).read().unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, writer_benchmark, reader_benchmark);
criterion_main!(benches);
