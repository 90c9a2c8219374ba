use opme::*;
use rust_decimal_macros::dec;

fn main() {
    println!("=== Stock balances ===\n");

    let rows = [
        ("11444777000161", "PARAFUSO CORTICAL 3.5MM X 24MM TITANIO AUTOROSCANTE", dec!(0)),
        ("11222333000181", "PLACA BLOQUEADA 6 FUROS", dec!(4)),
        ("52998224725", "FIO DE KIRSCHNER 1.5MM", dec!(1250.5)),
    ];

    for (cnpj, product, balance) in &rows {
        let status = StockStatus::from_balance(*balance);
        println!(
            "  {:<20} {:<33} {:>10}  [{}]",
            format_tax_id(*cnpj),
            truncate(*product, 30),
            format_number(*balance, 2),
            status.label()
        );
    }

    println!("\n=== Operation types ===\n");

    for code in ["saida", "retorno", "simbolico", "faturamento", "devolucao"] {
        println!("  {code:<12} {} ({})", operation_label(code), operation_badge_class(code));
    }

    println!("\n=== Dates ===\n");
    println!("  {}", format_date_time("2024-06-15T10:30:00"));
    println!("  API: {}", format_date_for_api("2024-06-15"));
    println!("  {}", format_file_size(48_213));
}
