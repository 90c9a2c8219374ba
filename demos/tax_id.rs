use opme::*;

fn main() {
    println!("=== CPF / CNPJ Validation ===\n");

    let inputs = [
        "529.982.247-25",
        "11.444.777/0001-61",
        "123.456.789-00",     // wrong check digits
        "00000000000",        // repeated digits
        "11.444.777/0001",    // incomplete
    ];

    for raw in &inputs {
        match TaxId::parse(raw) {
            Ok(id) => println!("  {raw} => valid {} ({})", id.kind(), id),
            Err(e) => println!("  {raw} => INVALID: {e}"),
        }
    }

    println!("\n=== Completing a base number ===\n");

    for (kind, base) in [(TaxIdKind::Cpf, "123456789"), (TaxIdKind::Cnpj, "112223330001")] {
        if let Some([a, b]) = kind.check_digits(base) {
            let full = format!("{base}{a}{b}");
            println!("  {kind} {base} => {}", format_tax_id(full.as_str()));
        }
    }
}
