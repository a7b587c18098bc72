//! Criterion benchmarks for trade_atlas: CSV load, country resolution and selection filtering.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::sync::Arc;

use trade_atlas::Selection;
use trade_atlas::app::services::country_resolver::CountryResolver;
use trade_atlas::app::services::dataset_store::TradeDataset;
use trade_atlas::app::services::trade_csv_parser::TradeCsvParser;

const PARTNERS: &[&str] = &[
    "Chile",
    "Argentina",
    "China",
    "Korea, Rep.",
    "China, Hong Kong SAR",
    "United States",
    "Australia",
    "Germany",
    "Viet Nam",
    "Other Asia, nes",
];

fn make_csv(rows: usize) -> String {
    let mut csv = String::from("Period,CmdCode,ReporterDesc,PartnerDesc,PrimaryValue\n");
    for i in 0..rows {
        let month = i % 12 + 1;
        let year = 2010 + (i / 120) % 10;
        let partner = PARTNERS[i % PARTNERS.len()];
        csv.push_str(&format!(
            "{}-{:02},283691,Japan,\"{}\",\"{},{:03}\"\n",
            year,
            month,
            partner,
            i % 997 + 1,
            i % 1000
        ));
    }
    csv
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    let resolver = Arc::new(CountryResolver::default());

    for &rows in &[1_000usize, 10_000, 100_000] {
        let csv = make_csv(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &csv, |b, csv| {
            b.iter(|| {
                let parser = TradeCsvParser::new(Arc::clone(&resolver));
                let result = parser.parse_reader(csv.as_bytes(), "bench").unwrap();
                TradeDataset::from_parse_result(result, "bench")
            });
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let resolver = CountryResolver::default();
    c.bench_function("resolve_10_names", |b| {
        b.iter(|| {
            PARTNERS
                .iter()
                .filter(|name| resolver.resolve(name).is_resolved())
                .count()
        });
    });
}

fn bench_filter(c: &mut Criterion) {
    let parser = TradeCsvParser::new(Arc::new(CountryResolver::default()));
    let result = parser.parse_reader(make_csv(100_000).as_bytes(), "bench").unwrap();
    let dataset = TradeDataset::from_parse_result(result, "bench");

    let monthly = Selection::monthly("Japan", "283691", "201503");
    let annual = Selection::annual("Japan", "283691", "2015");

    c.bench_function("filter_monthly_100k", |b| b.iter(|| dataset.view(&monthly)));
    c.bench_function("filter_annual_100k", |b| b.iter(|| dataset.view(&annual)));
}

criterion_group!(benches, bench_load, bench_resolve, bench_filter);
criterion_main!(benches);
