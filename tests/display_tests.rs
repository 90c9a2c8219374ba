#![cfg(feature = "core")]

use std::time::{Duration, Instant};

use opme::*;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// Truncation
// ---------------------------------------------------------------------------

#[test]
fn truncate_boundary() {
    assert_eq!(truncate("abcde", 5), "abcde");
    assert_eq!(truncate("abcdef", 5), "abcde...");
}

#[test]
fn truncate_default_length() {
    let long = "x".repeat(60);
    let cut = truncate(long.as_str(), DEFAULT_TRUNCATE_LENGTH);
    assert_eq!(cut.len(), 53);
    assert!(cut.ends_with("..."));
}

#[test]
fn truncate_product_description() {
    let desc = Some("PARAFUSO CORTICAL 3.5MM X 24MM TITANIO AUTOROSCANTE ESTERIL");
    assert_eq!(
        truncate(desc, 30),
        "PARAFUSO CORTICAL 3.5MM X 24MM..."
    );
}

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

#[test]
fn format_number_null() {
    assert_eq!(format_number(None, DEFAULT_DECIMALS), "0");
}

#[test]
fn format_number_fixed_precision() {
    assert_eq!(format_number(dec!(1234.5), 2), "1.234,50");
    assert_eq!(format_number(dec!(1234.5), 0), "1.235");
    assert_eq!(format_number(dec!(0.1), 3), "0,100");
}

#[test]
fn format_number_large_values() {
    assert_eq!(format_number(dec!(1234567890), 0), "1.234.567.890");
}

#[test]
fn currency_rendering() {
    assert_eq!(format_currency(dec!(0.5)), "R$ 0,50");
    assert_eq!(format_currency(dec!(100000)), "R$ 100.000,00");
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

#[test]
fn dates_for_table_and_backend() {
    assert_eq!(format_date("2024-12-31T18:45:00"), "31/12/2024");
    assert_eq!(format_date_time("2024-12-31T18:45:00"), "31/12/2024 18:45:00");
    assert_eq!(format_date_for_api("2024-12-31"), "31/12/2024");
    assert_eq!(
        parse_date_from_api("31/12/2024").map(|d| d.to_string()),
        Some("2024-12-31".into())
    );
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

#[test]
fn operation_label_table() {
    let table: Vec<String> = OperationType::ALL
        .iter()
        .map(|op| format!("{} | {} | {}", op.code(), op.label(), op.badge_class()))
        .collect();
    insta::assert_snapshot!(table.join("\n"), @r"
    saida | Saída para Consignação | bg-blue-100 text-blue-800
    retorno | Retorno de Consignação | bg-green-100 text-green-800
    simbolico | Retorno Simbólico | bg-yellow-100 text-yellow-800
    faturamento | Faturamento | bg-purple-100 text-purple-800
    outros | Outros | bg-gray-100 text-gray-800
    ");
}

#[test]
fn stock_badges_for_dashboard() {
    let rows = [dec!(0), dec!(3), dec!(8), dec!(42)]
        .map(|b| format!("{} unidades: {}", format_number(b, 0), StockStatus::from_balance(b).label()));
    assert_eq!(
        rows,
        [
            "0 unidades: Zerado",
            "3 unidades: Crítico",
            "8 unidades: Baixo",
            "42 unidades: Normal",
        ]
    );
}

// ---------------------------------------------------------------------------
// Debounce
// ---------------------------------------------------------------------------

#[test]
fn debounced_search_only_sends_last_term() {
    let t0 = Instant::now();
    let mut search = Debouncer::new(Duration::from_millis(500));
    let mut sent = Vec::new();

    for (ms, term) in [(0, "h"), (100, "ho"), (200, "hos"), (900, "hosp")] {
        let now = t0 + Duration::from_millis(ms);
        if let Some(term) = search.poll(now) {
            sent.push(term);
        }
        search.call(term, now);
    }
    if let Some(term) = search.poll(t0 + Duration::from_millis(1400)) {
        sent.push(term);
    }

    assert_eq!(sent, vec!["hos", "hosp"]);
}
