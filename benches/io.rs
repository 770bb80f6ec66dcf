use criterion::{criterion_group, criterion_main, Criterion};
use csv::{self, ReaderBuilder};
use etsv::prelude::*;
use etsv::test_utilities::{random_etsv_file, standard_input_fields};

#[derive(Debug, serde::Deserialize, PartialEq)]
struct PlainRow {
    id: String,
    length: i64,
    score: f64,
}

const ETSV_LENGTH: usize = 100_000;

fn bench_io_shootout(c: &mut Criterion) {
    // create the benchmark group
    let mut group = c.benchmark_group("read");

    // create the test data
    let input_file = random_etsv_file(ETSV_LENGTH).unwrap();

    // configure the sample size for the group
    group.sample_size(10);

    // EtsvReader
    group.bench_function("etsvreader", |b| {
        b.iter(|| {
            let reader = EtsvReader::from_path(
                input_file.path(),
                standard_input_fields(),
                ReaderOptions::default(),
            )
            .unwrap();
            let mut rows = 0;
            for row in reader {
                row.unwrap();
                rows += 1;
            }
            rows
        });
    });

    // CSV
    group.bench_function("csv", |b| {
        b.iter(|| {
            let mut rdr = ReaderBuilder::new()
                .delimiter(b'\t')
                .comment(Some(b'#'))
                .has_headers(false)
                .from_path(input_file.path())
                .unwrap();

            let mut rows = 0;
            for result in rdr.deserialize() {
                let _row: PlainRow = result.unwrap();
                rows += 1;
            }
            rows
        });
    });
}

criterion_group!(benches, bench_io_shootout,);
criterion_main!(benches);
