use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use opme::*;

const TYPED: [&str; 6] = [
    "529.982.247-25",
    "11.444.777/0001-61",
    "123.456.789-00",
    "00000000000",
    "11.444.777/0001",
    "",
];

fn bench_validate(c: &mut Criterion) {
    c.bench_function("is_valid_tax_id_mixed", |b| {
        b.iter(|| {
            for s in TYPED {
                black_box(is_valid_tax_id(black_box(s)));
            }
        });
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("tax_id_parse_cnpj", |b| {
        b.iter(|| black_box(TaxId::parse(black_box("11.444.777/0001-61"))));
    });
}

fn bench_format(c: &mut Criterion) {
    c.bench_function("format_tax_id_mixed", |b| {
        b.iter(|| {
            for s in TYPED {
                black_box(format_tax_id(black_box(s)));
            }
        });
    });
}

fn bench_table_row(c: &mut Criterion) {
    // One balance row as rendered by the stock table
    c.bench_function("render_balance_row", |b| {
        b.iter(|| {
            black_box((
                format_tax_id(black_box("11444777000161")),
                truncate(black_box("PARAFUSO CORTICAL 3.5MM X 24MM TITANIO"), DEFAULT_TRUNCATE_LENGTH),
                format_number(black_box(dec!(1250.5)), DEFAULT_DECIMALS),
                StockStatus::from_balance(black_box(dec!(1250.5))).label(),
            ))
        });
    });
}

criterion_group!(benches, bench_validate, bench_parse, bench_format, bench_table_row);
criterion_main!(benches);
