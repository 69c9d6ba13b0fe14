// Benchmarks for recorder construction and grip lookup.
//
// Run with: cargo bench -p play_recorder_fingering

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use play_recorder_fingering::{InstrumentCategory, Recorder};
use play_recorder_theory::{Note, Scale};

fn bench_construction(c: &mut Criterion) {
    c.bench_function("recorder_new", |b| {
        b.iter(|| Recorder::new(black_box(InstrumentCategory::from_code(6))))
    });
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("grips");
    let notes: Vec<Note> = (48..96).map(Note::from_value_sharp).collect();

    for code in [1, 6] {
        let recorder = Recorder::from_code(code);
        group.bench_with_input(BenchmarkId::new("keyboard_sweep", code), &code, |b, _| {
            b.iter(|| {
                let scale = Scale::with_flats(3);
                notes
                    .iter()
                    .filter(|note| recorder.grips(&scale, black_box(note)).is_some())
                    .count()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_construction, bench_lookup);
criterion_main!(benches);
