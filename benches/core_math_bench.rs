use criterion::{Criterion, criterion_group, criterion_main};
use gapminder_scenes::core::{
    Dataset, LinearScale, LogScale, NumericField, Record, mean_by_year, mean_by_year_for_continent,
};
use gapminder_scenes::scenes::{SceneKind, SceneStyle, render_scene};
use std::hint::black_box;

const CONTINENTS: [&str; 5] = ["Africa", "Americas", "Asia", "Europe", "Oceania"];

fn synthetic_dataset() -> Dataset {
    // 142 countries x 12 survey years, the shape of the real table.
    (0..142)
        .flat_map(|country| {
            (0..12_u32).map(move |step| {
                let year = 1952.0 + f64::from(step) * 5.0;
                Record::new(
                    format!("Country {country}"),
                    CONTINENTS[country % CONTINENTS.len()],
                    year,
                    40.0 + f64::from(step) * 2.5 + (country % 7) as f64,
                    1_000_000.0 + (country * 250_000) as f64,
                    300.0 + (country * 220) as f64 + f64::from(step) * 90.0,
                )
            })
        })
        .collect()
}

fn bench_mean_by_year(c: &mut Criterion) {
    let dataset = synthetic_dataset();

    c.bench_function("mean_by_year_all", |b| {
        b.iter(|| {
            let _ = mean_by_year(black_box(dataset.records()), NumericField::LifeExp);
        })
    });

    c.bench_function("mean_by_year_per_continent", |b| {
        b.iter(|| {
            for continent in CONTINENTS {
                let _ = mean_by_year_for_continent(
                    black_box(dataset.records()),
                    continent,
                    NumericField::LifeExp,
                );
            }
        })
    });
}

fn bench_scale_projection(c: &mut Criterion) {
    let linear = LinearScale::new((1952.0, 2007.0), (70.0, 820.0)).expect("valid scale");
    let log = LogScale::new((100.0, 50_000.0), (70.0, 820.0))
        .expect("valid scale")
        .with_clamp(true);

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = linear.domain_to_pixel(black_box(1979.5));
            let _ = linear.pixel_to_domain(px);
        })
    });

    c.bench_function("log_scale_projection_1k", |b| {
        b.iter(|| {
            for step in 0..1_000_u32 {
                let _ = log.domain_to_pixel(black_box(50.0 + f64::from(step) * 49.0));
            }
        })
    });
}

fn bench_scene_render(c: &mut Criterion) {
    let dataset = synthetic_dataset();
    let style = SceneStyle::default();

    for kind in SceneKind::ALL {
        c.bench_function(&format!("render_scene_{kind:?}"), |b| {
            b.iter(|| {
                let _ = render_scene(kind, black_box(&dataset), &style).expect("render");
            })
        });
    }
}

criterion_group!(
    benches,
    bench_mean_by_year,
    bench_scale_projection,
    bench_scene_render
);
criterion_main!(benches);
